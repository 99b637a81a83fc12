//! Creation failures and the error that carries them
//!
//! Every rule that rejects a value explains itself with a [`CreationFailure`]:
//! a small, immutable value that knows how to render a human-readable message.
//! Each concrete rule defines its own failure type carrying the data needed for
//! that message (the boundary, the range, the pattern).
//!
//! [`ValidationError`] is what [`ValueFactory::create`](crate::ValueFactory::create)
//! returns when a rule rejects the raw input. It wraps the failure unchanged.
//!
//! # Examples
//!
//! ```
//! use valuegate::{CreationFailure, CustomFailure, ValidationError};
//!
//! let err = ValidationError::new(CustomFailure::new("must be even"));
//! assert_eq!(err.failure().message(), "must be even");
//! assert_eq!(
//!     err.to_string(),
//!     "The following validation constraint has failed: must be even"
//! );
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// A data-carrying explanation of why a rule rejected a value.
///
/// Implementors are plain values. They are built only when a rule fails and
/// are never mutated afterwards.
///
/// # Example
///
/// ```rust
/// use valuegate::CreationFailure;
///
/// #[derive(Debug)]
/// struct Odd(i64);
///
/// impl CreationFailure for Odd {
///     fn message(&self) -> String {
///         format!("{} is not even", self.0)
///     }
/// }
///
/// assert_eq!(Odd(3).message(), "3 is not even");
/// ```
pub trait CreationFailure: Any + fmt::Debug + Send + Sync {
    /// The complete, self-describing message for this failure.
    fn message(&self) -> String;
}

impl dyn CreationFailure {
    /// Returns `true` if the failure is of type `F`.
    pub fn is<F: CreationFailure>(&self) -> bool {
        (self as &dyn Any).is::<F>()
    }

    /// Borrow the failure as its concrete type, if it is an `F`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use valuegate::rule::{max_value, AboveMaximum, ValidationRule};
    ///
    /// let result = max_value(10).validate(&11);
    /// let failure = result.require_invalid();
    /// let above = failure.downcast_ref::<AboveMaximum<i32>>().unwrap();
    /// assert_eq!(above.value, 11);
    /// ```
    pub fn downcast_ref<F: CreationFailure>(&self) -> Option<&F> {
        (self as &dyn Any).downcast_ref::<F>()
    }
}

impl fmt::Display for dyn CreationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// A failure that is nothing more than its message.
///
/// Handy for ad-hoc rules written as closures.
///
/// # Example
///
/// ```rust
/// use valuegate::{CreationFailure, CustomFailure};
///
/// let failure = CustomFailure::new("must be even");
/// assert_eq!(failure.message(), "must be even");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomFailure {
    message: String,
}

impl CustomFailure {
    /// Create a failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        CustomFailure {
            message: message.into(),
        }
    }
}

impl CreationFailure for CustomFailure {
    fn message(&self) -> String {
        self.message.clone()
    }
}

/// Error produced when a [`ValueFactory`](crate::ValueFactory) rejects raw input.
///
/// Holds the failure of the first rule that rejected the value. The failure is
/// shared, not copied, so [`failure`](ValidationError::failure) returns the
/// exact instance the rule produced.
#[derive(Debug, Clone)]
pub struct ValidationError {
    failure: Arc<dyn CreationFailure>,
}

impl ValidationError {
    /// Wrap a failure.
    pub fn new(failure: impl CreationFailure) -> Self {
        ValidationError {
            failure: Arc::new(failure),
        }
    }

    /// Wrap an already shared failure without reallocating it.
    pub fn from_shared(failure: Arc<dyn CreationFailure>) -> Self {
        ValidationError { failure }
    }

    /// Borrow the wrapped failure.
    pub fn failure(&self) -> &dyn CreationFailure {
        &*self.failure
    }

    /// Consume the error, returning the shared failure.
    pub fn into_failure(self) -> Arc<dyn CreationFailure> {
        self.failure
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The following validation constraint has failed: {}",
            self.failure.message()
        )
    }
}

impl StdError for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct TooLong(usize);

    impl CreationFailure for TooLong {
        fn message(&self) -> String {
            format!("at most {} allowed", self.0)
        }
    }

    #[test]
    fn test_custom_failure_message() {
        let failure = CustomFailure::new("nope");
        assert_eq!(failure.message(), "nope");
    }

    #[test]
    fn test_display_for_dyn_failure() {
        let failure: Arc<dyn CreationFailure> = Arc::new(TooLong(4));
        assert_eq!(failure.to_string(), "at most 4 allowed");
    }

    #[test]
    fn test_downcast_ref() {
        let failure: Arc<dyn CreationFailure> = Arc::new(TooLong(4));
        assert!(failure.is::<TooLong>());
        assert!(!failure.is::<CustomFailure>());
        assert_eq!(failure.downcast_ref::<TooLong>(), Some(&TooLong(4)));
        assert!(failure.downcast_ref::<CustomFailure>().is_none());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(TooLong(8));
        assert_eq!(
            err.to_string(),
            "The following validation constraint has failed: at most 8 allowed"
        );
    }

    #[test]
    fn test_validation_error_keeps_shared_failure() {
        let shared: Arc<dyn CreationFailure> = Arc::new(CustomFailure::new("x"));
        let err = ValidationError::from_shared(Arc::clone(&shared));
        assert!(Arc::ptr_eq(&shared, &err.into_failure()));
    }

    #[test]
    fn test_validation_error_is_std_error() {
        fn assert_error<E: StdError + Send + Sync + 'static>(_: &E) {}
        assert_error(&ValidationError::new(CustomFailure::new("x")));
    }
}
