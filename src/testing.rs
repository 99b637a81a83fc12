//! Testing utilities for rules and factories
//!
//! Assertion macros for [`ValidationResult`](crate::ValidationResult) and, with
//! the `proptest` feature, an `Arbitrary` implementation so property tests can
//! generate results directly.
//!
//! # Example
//!
//! ```rust
//! use valuegate::rule::*;
//! use valuegate::{assert_failure_message, assert_invalid, assert_valid};
//!
//! assert_valid!(exact_length(2).validate("ab"));
//! assert_invalid!(exact_length(2).validate("abc"));
//! assert_failure_message!(exact_length(2).validate("abc"), "Length must be exactly 2");
//! ```

/// Assert that a validation result is valid.
///
/// # Example
///
/// ```rust
/// use valuegate::{assert_valid, ValidationResult};
///
/// assert_valid!(ValidationResult::valid());
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {
        match $crate::ValidationResult::failure(&$result) {
            None => {}
            Some(failure) => {
                panic!("Expected Valid, got Invalid: {}", failure.message());
            }
        }
    };
}

/// Assert that a validation result is invalid.
///
/// # Example
///
/// ```rust
/// use valuegate::{assert_invalid, CustomFailure, ValidationResult};
///
/// assert_invalid!(ValidationResult::invalid(CustomFailure::new("bad")));
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($result:expr) => {
        if $crate::ValidationResult::is_valid(&$result) {
            panic!("Expected Invalid, got Valid");
        }
    };
}

/// Assert that a validation result is invalid with a specific message.
///
/// # Example
///
/// ```rust
/// use valuegate::{assert_failure_message, CustomFailure, ValidationResult};
///
/// let result = ValidationResult::invalid(CustomFailure::new("bad"));
/// assert_failure_message!(result, "bad");
/// ```
#[macro_export]
macro_rules! assert_failure_message {
    ($result:expr, $expected:expr) => {
        match $crate::ValidationResult::failure(&$result) {
            Some(failure) => {
                assert_eq!(failure.message(), $expected);
            }
            None => {
                panic!("Expected Invalid with message {:?}, got Valid", $expected);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{CustomFailure, ValidationResult};

#[cfg(feature = "proptest")]
impl Arbitrary for ValidationResult {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(ValidationResult::valid()),
            any::<String>()
                .prop_map(|message| ValidationResult::invalid(CustomFailure::new(message))),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::{CustomFailure, ValidationResult};

    #[test]
    fn assert_valid_macro() {
        assert_valid!(ValidationResult::valid());
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(ValidationResult::invalid(CustomFailure::new("bad")));
    }

    #[test]
    fn assert_failure_message_macro() {
        let result = ValidationResult::invalid(CustomFailure::new("bad"));
        assert_failure_message!(result, "bad");
    }

    #[test]
    #[should_panic(expected = "Expected Valid, got Invalid: bad")]
    fn assert_valid_panics_on_invalid() {
        assert_valid!(ValidationResult::invalid(CustomFailure::new("bad")));
    }

    #[test]
    #[should_panic(expected = "Expected Invalid, got Valid")]
    fn assert_invalid_panics_on_valid() {
        assert_invalid!(ValidationResult::valid());
    }

    #[test]
    #[should_panic(expected = "Expected Invalid with message")]
    fn assert_failure_message_panics_on_valid() {
        assert_failure_message!(ValidationResult::valid(), "bad");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_results_are_consistent(result in any::<ValidationResult>()) {
                prop_assert_ne!(result.is_valid(), result.is_invalid());
                prop_assert_eq!(result.is_invalid(), result.failure().is_some());
            }
        }
    }
}
