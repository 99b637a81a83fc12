//! String rules
//!
//! Lengths are counted in `char`s, not bytes. Every rule here validates both
//! `str` and `String`, so it can be bound to a factory over either.

use std::ops::RangeInclusive;

use regex::Regex;

use super::ValidationRule;
use crate::failure::CreationFailure;
use crate::result::ValidationResult;

// Forward `ValidationRule<String>` to the `str` implementation.
macro_rules! impl_for_string {
    ($($rule:ty),+ $(,)?) => {
        $(
            impl ValidationRule<String> for $rule {
                #[inline]
                fn validate(&self, value: &String) -> ValidationResult {
                    <Self as ValidationRule<str>>::validate(self, value.as_str())
                }
            }
        )+
    };
}

impl_for_string!(ExactLength, LengthRange, NotBlank, Pattern);

/// String must have exactly `n` characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExactLength {
    required: usize,
}

impl ExactLength {
    /// Create the rule.
    pub fn new(required: usize) -> Self {
        ExactLength { required }
    }

    /// The required length.
    pub fn required(&self) -> usize {
        self.required
    }
}

impl ValidationRule<str> for ExactLength {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.chars().count() == self.required {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(LengthMismatch {
                required: self.required,
            })
        }
    }
}

/// String length differs from the required one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LengthMismatch {
    /// The required length.
    pub required: usize,
}

impl CreationFailure for LengthMismatch {
    fn message(&self) -> String {
        format!("Length must be exactly {}", self.required)
    }
}

/// Create a rule that checks the string has exactly `required` characters.
///
/// # Example
///
/// ```rust
/// use valuegate::rule::*;
///
/// let rule = exact_length(5);
/// assert!(rule.validate("hello").is_valid());
/// assert!(rule.validate("hi").is_invalid());
/// ```
pub fn exact_length(required: usize) -> ExactLength {
    ExactLength::new(required)
}

/// String length must lie inside a closed range.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LengthRange {
    range: RangeInclusive<usize>,
}

impl LengthRange {
    /// Create the rule.
    pub fn new(range: RangeInclusive<usize>) -> Self {
        LengthRange { range }
    }

    /// The accepted length range.
    pub fn range(&self) -> &RangeInclusive<usize> {
        &self.range
    }
}

impl ValidationRule<str> for LengthRange {
    fn validate(&self, value: &str) -> ValidationResult {
        if self.range.contains(&value.chars().count()) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(LengthOutOfRange {
                start: *self.range.start(),
                end: *self.range.end(),
            })
        }
    }
}

/// String length fell outside the accepted range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LengthOutOfRange {
    /// Inclusive minimum length.
    pub start: usize,
    /// Inclusive maximum length.
    pub end: usize,
}

impl CreationFailure for LengthOutOfRange {
    fn message(&self) -> String {
        format!("Length must be in range of {}..{}", self.start, self.end)
    }
}

/// Create a rule that checks the character count is inside `range`.
///
/// # Example
///
/// ```rust
/// use valuegate::rule::*;
///
/// let rule = length_range(2..=4);
/// assert!(rule.validate("").is_invalid());
/// assert!(rule.validate("ab").is_valid());
/// assert!(rule.validate("abcde").is_invalid());
/// ```
pub fn length_range(range: RangeInclusive<usize>) -> LengthRange {
    LengthRange::new(range)
}

/// String must contain at least one non-whitespace character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NotBlank;

impl ValidationRule<str> for NotBlank {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.chars().any(|c| !c.is_whitespace()) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(Blank)
        }
    }
}

/// String was empty or whitespace only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Blank;

impl CreationFailure for Blank {
    fn message(&self) -> String {
        "Provided value is empty".to_string()
    }
}

/// Create a rule that rejects empty and whitespace-only strings.
///
/// # Example
///
/// ```rust
/// use valuegate::rule::*;
///
/// assert!(not_blank().validate("").is_invalid());
/// assert!(not_blank().validate("   ").is_invalid());
/// assert!(not_blank().validate(" a ").is_valid());
/// ```
pub fn not_blank() -> NotBlank {
    NotBlank
}

/// String must match a regular expression in full.
///
/// A substring match is not enough: `^[0-9]+` and `[0-9]+` both reject
/// `"12a"`.
#[derive(Clone, Debug)]
pub struct Pattern {
    pattern: String,
    anchored: Regex,
}

impl Pattern {
    /// Compile the rule from a regular expression.
    ///
    /// Fails when `pattern` is not a valid expression.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let anchored = Regex::new(&format!(r"^(?:{pattern})\z"))?;
        Ok(Pattern {
            pattern: pattern.to_string(),
            anchored,
        })
    }

    /// The expression as it was given.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

impl TryFrom<Regex> for Pattern {
    type Error = regex::Error;

    fn try_from(regex: Regex) -> Result<Self, Self::Error> {
        Pattern::new(regex.as_str())
    }
}

impl ValidationRule<str> for Pattern {
    fn validate(&self, value: &str) -> ValidationResult {
        if self.anchored.is_match(value) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(PatternMismatch {
                pattern: self.pattern.clone(),
            })
        }
    }
}

/// String did not match the expected pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PatternMismatch {
    /// The expression the input had to match.
    pub pattern: String,
}

impl CreationFailure for PatternMismatch {
    fn message(&self) -> String {
        format!("Input should match {}", self.pattern)
    }
}

/// Create a rule that checks the whole string matches `pattern`.
///
/// # Example
///
/// ```rust
/// use valuegate::rule::*;
///
/// let digits = matches_pattern("^[0-9]+$").unwrap();
/// assert!(digits.validate("123").is_valid());
/// assert!(digits.validate("12a").is_invalid());
/// assert!(digits.validate("").is_invalid());
///
/// assert!(matches_pattern("[0-9").is_err());
/// ```
pub fn matches_pattern(pattern: &str) -> Result<Pattern, regex::Error> {
    Pattern::new(pattern)
}
