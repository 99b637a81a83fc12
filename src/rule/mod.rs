//! Validation rules
//!
//! A [`ValidationRule`] is a pure check over one raw value that either passes
//! or explains, through a [`CreationFailure`](crate::CreationFailure), which
//! constraint was violated. Rules hold only their parameters and never depend
//! on each other's outcome.
//!
//! Ready-made rules:
//!
//! - **Numeric**: [`MinValue`], [`MaxValue`], [`ValueRange`]
//! - **String**: [`ExactLength`], [`LengthRange`], [`NotBlank`], [`Pattern`]
//!
//! Any `Fn(&T) -> ValidationResult` closure is a rule too.
//!
//! # Example
//!
//! ```rust
//! use valuegate::rule::*;
//! use valuegate::{CustomFailure, ValidationResult};
//!
//! assert!(length_range(3..=16).validate("alice").is_valid());
//! assert!(not_blank().validate("   ").is_invalid());
//!
//! let even = |n: &i64| {
//!     if n % 2 == 0 {
//!         ValidationResult::valid()
//!     } else {
//!         ValidationResult::invalid(CustomFailure::new("value must be even"))
//!     }
//! };
//! assert!(even.validate(&4).is_valid());
//! ```

mod number;
mod string;

pub use number::{
    max_value, min_value, value_range, AboveMaximum, BelowMinimum, MaxValue, MinValue, Numeric,
    OutOfRange, ValueRange,
};
pub use string::{
    exact_length, length_range, matches_pattern, not_blank, Blank, ExactLength, LengthMismatch,
    LengthOutOfRange, LengthRange, NotBlank, Pattern, PatternMismatch,
};

use crate::result::ValidationResult;

/// A check over values of type `T` that explains its rejections.
///
/// # Example
///
/// ```rust
/// use valuegate::rule::ValidationRule;
/// use valuegate::{CustomFailure, ValidationResult};
///
/// struct Even;
///
/// impl ValidationRule<i64> for Even {
///     fn validate(&self, value: &i64) -> ValidationResult {
///         if value % 2 == 0 {
///             ValidationResult::valid()
///         } else {
///             ValidationResult::invalid(CustomFailure::new("value must be even"))
///         }
///     }
/// }
///
/// assert!(Even.validate(&2).is_valid());
/// assert!(Even.validate(&3).is_invalid());
/// ```
pub trait ValidationRule<T: ?Sized>: Send + Sync {
    /// Check `value` against this rule.
    fn validate(&self, value: &T) -> ValidationResult;
}

// Blanket impl for closures
impl<T: ?Sized, F> ValidationRule<T> for F
where
    F: Fn(&T) -> ValidationResult + Send + Sync,
{
    #[inline]
    fn validate(&self, value: &T) -> ValidationResult {
        self(value)
    }
}

/// Extension methods for rules.
pub trait ValidationRuleExt<T: ?Sized>: ValidationRule<T> + Sized + 'static {
    /// Erase the rule's type so it can sit in a rule list next to other rules.
    ///
    /// # Example
    ///
    /// ```rust
    /// use valuegate::rule::*;
    ///
    /// let rules: Vec<Box<dyn ValidationRule<String>>> = vec![
    ///     not_blank().boxed(),
    ///     length_range(3..=16).boxed(),
    /// ];
    /// assert_eq!(rules.len(), 2);
    /// ```
    fn boxed(self) -> Box<dyn ValidationRule<T>> {
        Box::new(self)
    }
}

impl<T: ?Sized, R: ValidationRule<T> + 'static> ValidationRuleExt<T> for R {}

/// Turn a closure into a rule.
///
/// Closures already implement [`ValidationRule`]; this helper only pins the
/// input type so inference has something to work with.
///
/// # Example
///
/// ```rust
/// use valuegate::rule::{rule_fn, ValidationRule};
/// use valuegate::{CustomFailure, ValidationResult};
///
/// let no_spaces = rule_fn(|s: &str| {
///     if s.contains(' ') {
///         ValidationResult::invalid(CustomFailure::new("spaces are not allowed"))
///     } else {
///         ValidationResult::valid()
///     }
/// });
/// assert!(no_spaces.validate("a b").is_invalid());
/// ```
pub fn rule_fn<T: ?Sized, F>(f: F) -> F
where
    F: Fn(&T) -> ValidationResult + Send + Sync,
{
    f
}
