//! The outcome of a single rule evaluation
//!
//! A [`ValidationResult`] is either valid, carrying nothing, or invalid,
//! carrying exactly one [`CreationFailure`]. The two states are only reachable
//! through [`ValidationResult::valid`] and [`ValidationResult::invalid`], so an
//! invalid result without a failure cannot exist.
//!
//! # Example
//!
//! ```rust
//! use valuegate::{CustomFailure, ValidationResult};
//!
//! let ok = ValidationResult::valid();
//! assert!(ok.is_valid());
//!
//! let bad = ValidationResult::invalid(CustomFailure::new("too small"));
//! assert!(bad.is_invalid());
//! assert_eq!(bad.require_invalid().message(), "too small");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::failure::CreationFailure;

/// Valid, or invalid with the failure that explains why.
#[must_use]
#[derive(Clone)]
pub struct ValidationResult {
    failure: Option<Arc<dyn CreationFailure>>,
}

impl ValidationResult {
    const VALID: ValidationResult = ValidationResult { failure: None };

    /// The canonical valid outcome.
    #[inline]
    pub const fn valid() -> Self {
        Self::VALID
    }

    /// An invalid outcome wrapping `failure`.
    pub fn invalid(failure: impl CreationFailure) -> Self {
        ValidationResult {
            failure: Some(Arc::new(failure)),
        }
    }

    /// An invalid outcome wrapping an already shared failure.
    pub fn invalid_shared(failure: Arc<dyn CreationFailure>) -> Self {
        ValidationResult {
            failure: Some(failure),
        }
    }

    /// `true` when no failure is present.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }

    /// `true` when a failure is present.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.failure.is_some()
    }

    /// Assert that this result is valid.
    ///
    /// # Panics
    ///
    /// Panics if the result is invalid. Meant for code that has already
    /// branched on [`is_valid`](Self::is_valid).
    #[track_caller]
    pub fn require_valid(&self) {
        if let Some(failure) = &self.failure {
            panic!(
                "validation result is required to be valid, but failed with: {}",
                failure.message()
            );
        }
    }

    /// Return the wrapped failure.
    ///
    /// # Panics
    ///
    /// Panics if the result is valid.
    #[track_caller]
    pub fn require_invalid(&self) -> &dyn CreationFailure {
        match &self.failure {
            Some(failure) => &**failure,
            None => panic!("validation result is required to be invalid, but is valid"),
        }
    }

    /// Borrow the failure, if any.
    pub fn failure(&self) -> Option<&dyn CreationFailure> {
        self.failure.as_deref()
    }

    /// Consume the result, returning the shared failure, if any.
    pub fn into_failure(self) -> Option<Arc<dyn CreationFailure>> {
        self.failure
    }

    /// Convert into a `Result`, for use with `?`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use valuegate::rule::{min_value, ValidationRule};
    ///
    /// assert!(min_value(1).validate(&1).into_result().is_ok());
    /// assert!(min_value(1).validate(&0).into_result().is_err());
    /// ```
    pub fn into_result(self) -> Result<(), Arc<dyn CreationFailure>> {
        match self.failure {
            None => Ok(()),
            Some(failure) => Err(failure),
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl fmt::Debug for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.failure {
            None => f.write_str("Valid"),
            Some(failure) => f.debug_tuple("Invalid").field(failure).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::CustomFailure;

    #[test]
    fn test_valid_predicates() {
        let r = ValidationResult::valid();
        assert!(r.is_valid());
        assert!(!r.is_invalid());
        assert!(r.failure().is_none());
        r.require_valid();
    }

    #[test]
    fn test_invalid_predicates() {
        let r = ValidationResult::invalid(CustomFailure::new("bad"));
        assert!(!r.is_valid());
        assert!(r.is_invalid());
        assert_eq!(r.require_invalid().message(), "bad");
    }

    #[test]
    #[should_panic(expected = "required to be invalid")]
    fn test_require_invalid_panics_on_valid() {
        let _ = ValidationResult::valid().require_invalid();
    }

    #[test]
    #[should_panic(expected = "required to be valid, but failed with: bad")]
    fn test_require_valid_panics_on_invalid() {
        ValidationResult::invalid(CustomFailure::new("bad")).require_valid();
    }

    #[test]
    fn test_require_invalid_returns_wrapped_failure() {
        let shared: Arc<dyn CreationFailure> = Arc::new(CustomFailure::new("bad"));
        let r = ValidationResult::invalid_shared(Arc::clone(&shared));
        let returned: *const dyn CreationFailure = r.require_invalid();
        assert!(std::ptr::addr_eq(returned, Arc::as_ptr(&shared)));
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationResult::valid().into_result().is_ok());
        let err = ValidationResult::invalid(CustomFailure::new("bad"))
            .into_result()
            .unwrap_err();
        assert_eq!(err.message(), "bad");
    }

    #[test]
    fn test_default_is_valid() {
        assert!(ValidationResult::default().is_valid());
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", ValidationResult::valid()), "Valid");
        let debug = format!("{:?}", ValidationResult::invalid(CustomFailure::new("bad")));
        assert!(debug.starts_with("Invalid("));
        assert!(debug.contains("bad"));
    }
}
