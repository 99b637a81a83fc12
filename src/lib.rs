//! # Valuegate
//!
//! Rule-driven construction of validated domain values.
//!
//! ## Philosophy
//!
//! **Parse, don't validate.** A domain type such as `Username` should be
//! impossible to build from input that breaks its rules. Valuegate binds an
//! ordered list of [`ValidationRule`]s to a constructor in a [`ValueFactory`];
//! the factory is the only way in, so every `Username` you hold has already
//! passed every rule.
//!
//! ## Quick Example
//!
//! ```rust
//! use valuegate::rule::*;
//! use valuegate::ValueFactory;
//!
//! #[derive(Debug, PartialEq)]
//! struct Username(String);
//!
//! let factory = ValueFactory::builder()
//!     .rule(not_blank())
//!     .rule(length_range(3..=16))
//!     .rule(matches_pattern("^[a-zA-Z0-9_]+$").unwrap())
//!     .build(Username);
//!
//! // Fail fast on the first broken rule
//! let err = factory.create("ab".to_string()).unwrap_err();
//! assert_eq!(err.failure().message(), "Length must be in range of 3..16");
//!
//! // Or report every broken rule at once
//! let failures = factory.failures(&"a!".to_string());
//! assert_eq!(failures.len(), 2);
//!
//! assert_eq!(
//!     factory.create("valid_user1".to_string()).unwrap(),
//!     Username("valid_user1".to_string())
//! );
//! ```
//!
//! ## Features
//!
//! - `serde`: deserialize straight through a factory
//! - `tracing`: emit events when a factory rejects input
//! - `proptest`: `Arbitrary` for [`ValidationResult`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod factory;
pub mod failure;
pub mod result;
pub mod rule;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod testing;

// Re-exports
pub use factory::{FactoryBuilder, ValueFactory};
pub use failure::{CreationFailure, CustomFailure, ValidationError};
pub use result::ValidationResult;
pub use rule::{ValidationRule, ValidationRuleExt};
#[cfg(feature = "serde")]
pub use serde_impl::FactorySeed;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::factory::{FactoryBuilder, ValueFactory};
    pub use crate::failure::{CreationFailure, CustomFailure, ValidationError};
    pub use crate::result::ValidationResult;
    pub use crate::rule::{
        exact_length, length_range, matches_pattern, max_value, min_value, not_blank, rule_fn,
        value_range, ValidationRule, ValidationRuleExt,
    };
}
