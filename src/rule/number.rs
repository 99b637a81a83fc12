//! Numeric rules
//!
//! All bounds are inclusive. Each rule works for any [`Numeric`] type, which
//! covers the primitive integers and floats.

use std::fmt;
use std::ops::RangeInclusive;

use super::ValidationRule;
use crate::failure::CreationFailure;
use crate::result::ValidationResult;

/// Values that are both ordered and numeric.
///
/// Implemented for every primitive integer and float. Implement it for your
/// own number types (fixed-point, decimal) to use them with the numeric rules.
pub trait Numeric: PartialOrd + Copy + fmt::Debug + fmt::Display + Send + Sync + 'static {}

macro_rules! impl_numeric {
    ($($ty:ty),+ $(,)?) => {
        $(impl Numeric for $ty {})+
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Value must be greater than or equal to a minimum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinValue<T> {
    min: T,
}

impl<T: Numeric> MinValue<T> {
    /// Create the rule.
    pub fn new(min: T) -> Self {
        MinValue { min }
    }

    /// The inclusive minimum.
    pub fn min(&self) -> T {
        self.min
    }
}

impl<T: Numeric> ValidationRule<T> for MinValue<T> {
    #[inline]
    fn validate(&self, value: &T) -> ValidationResult {
        if *value >= self.min {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(BelowMinimum {
                value: *value,
                min: self.min,
            })
        }
    }
}

/// Value fell below the minimum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BelowMinimum<T> {
    /// The rejected value.
    pub value: T,
    /// The minimum it had to reach.
    pub min: T,
}

impl<T: Numeric> CreationFailure for BelowMinimum<T> {
    fn message(&self) -> String {
        format!("Minimal value is {}", self.min)
    }
}

/// Create a rule that checks `value >= min`.
///
/// # Example
///
/// ```rust
/// use valuegate::rule::*;
///
/// let rule = min_value(18);
/// assert!(rule.validate(&18).is_valid());
/// assert!(rule.validate(&17).is_invalid());
/// ```
pub fn min_value<T: Numeric>(min: T) -> MinValue<T> {
    MinValue::new(min)
}

/// Value must be less than or equal to a maximum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaxValue<T> {
    max: T,
}

impl<T: Numeric> MaxValue<T> {
    /// Create the rule.
    pub fn new(max: T) -> Self {
        MaxValue { max }
    }

    /// The inclusive maximum.
    pub fn max(&self) -> T {
        self.max
    }
}

impl<T: Numeric> ValidationRule<T> for MaxValue<T> {
    #[inline]
    fn validate(&self, value: &T) -> ValidationResult {
        if *value <= self.max {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(AboveMaximum {
                value: *value,
                max: self.max,
            })
        }
    }
}

/// Value exceeded the maximum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AboveMaximum<T> {
    /// The rejected value.
    pub value: T,
    /// The maximum it had to stay within.
    pub max: T,
}

impl<T: Numeric> CreationFailure for AboveMaximum<T> {
    fn message(&self) -> String {
        format!("Maximum value is {}", self.max)
    }
}

/// Create a rule that checks `value <= max`.
///
/// # Example
///
/// ```rust
/// use valuegate::rule::*;
///
/// let rule = max_value(10);
/// assert!(rule.validate(&10).is_valid());
/// assert_eq!(rule.validate(&11).require_invalid().message(), "Maximum value is 10");
/// ```
pub fn max_value<T: Numeric>(max: T) -> MaxValue<T> {
    MaxValue::new(max)
}

/// Value must lie inside a closed range.
///
/// An empty range (`start > end`) is allowed and rejects every value.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueRange<T> {
    range: RangeInclusive<T>,
}

impl<T: Numeric> ValueRange<T> {
    /// Create the rule.
    pub fn new(range: RangeInclusive<T>) -> Self {
        ValueRange { range }
    }

    /// The accepted range.
    pub fn range(&self) -> &RangeInclusive<T> {
        &self.range
    }
}

impl<T: Numeric> ValidationRule<T> for ValueRange<T> {
    #[inline]
    fn validate(&self, value: &T) -> ValidationResult {
        if self.range.contains(value) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(OutOfRange {
                start: *self.range.start(),
                end: *self.range.end(),
            })
        }
    }
}

/// Value fell outside the accepted range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutOfRange<T> {
    /// Inclusive lower bound.
    pub start: T,
    /// Inclusive upper bound.
    pub end: T,
}

impl<T: Numeric> CreationFailure for OutOfRange<T> {
    fn message(&self) -> String {
        format!("Value should be in range {}..{}.", self.start, self.end)
    }
}

/// Create a rule that checks `start <= value <= end`.
///
/// # Example
///
/// ```rust
/// use valuegate::rule::*;
///
/// let rule = value_range(0..=100);
/// assert!(rule.validate(&0).is_valid());
/// assert!(rule.validate(&100).is_valid());
/// assert!(rule.validate(&101).is_invalid());
/// ```
pub fn value_range<T: Numeric>(range: RangeInclusive<T>) -> ValueRange<T> {
    ValueRange::new(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_value_boundary() {
        let rule = min_value(5);
        assert!(rule.validate(&5).is_valid());
        assert!(rule.validate(&6).is_valid());
        assert!(rule.validate(&4).is_invalid());
    }

    #[test]
    fn test_min_value_failure_payload() {
        let result = min_value(5).validate(&3);
        let failure = result
            .require_invalid()
            .downcast_ref::<BelowMinimum<i32>>()
            .unwrap();
        assert_eq!(failure, &BelowMinimum { value: 3, min: 5 });
        assert_eq!(failure.message(), "Minimal value is 5");
    }

    #[test]
    fn test_max_value_boundary() {
        let rule = max_value(10u8);
        assert!(rule.validate(&10).is_valid());
        assert!(rule.validate(&0).is_valid());
        assert!(rule.validate(&11).is_invalid());
    }

    #[test]
    fn test_max_value_failure_payload() {
        let result = max_value(10i64).validate(&42);
        let failure = result
            .require_invalid()
            .downcast_ref::<AboveMaximum<i64>>()
            .unwrap();
        assert_eq!(failure.value, 42);
        assert_eq!(failure.message(), "Maximum value is 10");
    }

    #[test]
    fn test_value_range_inclusive() {
        let rule = value_range(-3..=3);
        assert!(rule.validate(&-3).is_valid());
        assert!(rule.validate(&0).is_valid());
        assert!(rule.validate(&3).is_valid());
        assert!(rule.validate(&-4).is_invalid());
        assert!(rule.validate(&4).is_invalid());
    }

    #[test]
    fn test_value_range_message() {
        let result = value_range(1..=10).validate(&0);
        assert_eq!(
            result.require_invalid().message(),
            "Value should be in range 1..10."
        );
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_empty_range_rejects_everything() {
        let rule = value_range(10..=1);
        for n in -20..20 {
            assert!(rule.validate(&n).is_invalid());
        }
    }

    #[test]
    fn test_with_floats() {
        let rule = value_range(0.0_f64..=1.0_f64);
        assert!(rule.validate(&0.0).is_valid());
        assert!(rule.validate(&0.5).is_valid());
        assert!(rule.validate(&1.0).is_valid());
        assert!(rule.validate(&1.1).is_invalid());
        assert!(rule.validate(&f64::NAN).is_invalid());
        assert!(min_value(0.0_f32).validate(&f32::NAN).is_invalid());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(min_value(1).min(), 1);
        assert_eq!(max_value(2).max(), 2);
        assert_eq!(value_range(1..=2).range(), &(1..=2));
    }
}
