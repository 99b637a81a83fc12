//! Value factories: rules plus a constructor
//!
//! A [`ValueFactory`] binds an ordered list of [`ValidationRule`]s to a
//! construction function. [`create`](ValueFactory::create) runs the rules in
//! order, stops at the first one that rejects the raw value, and only calls
//! the constructor when every rule has passed. The constructor therefore never
//! sees input that violates a declared rule.
//!
//! # Example
//!
//! ```rust
//! use std::sync::LazyLock;
//! use valuegate::rule::*;
//! use valuegate::ValueFactory;
//!
//! #[derive(Debug, PartialEq)]
//! pub struct Username(String);
//!
//! impl Username {
//!     pub fn factory() -> &'static ValueFactory<Username, String> {
//!         static FACTORY: LazyLock<ValueFactory<Username, String>> = LazyLock::new(|| {
//!             ValueFactory::builder()
//!                 .rule(not_blank())
//!                 .rule(length_range(3..=16))
//!                 .build(Username)
//!         });
//!         &FACTORY
//!     }
//! }
//!
//! let user = Username::factory().create("alice".to_string()).unwrap();
//! assert_eq!(user, Username("alice".to_string()));
//!
//! let err = Username::factory().create("al".to_string()).unwrap_err();
//! assert_eq!(err.failure().message(), "Length must be in range of 3..16");
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::failure::{CreationFailure, ValidationError};
use crate::result::ValidationResult;
use crate::rule::ValidationRule;

type Constructor<Boxed, Raw> = Box<dyn Fn(Raw) -> Boxed + Send + Sync>;

/// Turns raw input into a validated `Boxed` value, or explains why it cannot.
///
/// The rule list is fixed when the factory is built. A factory holds no other
/// state, so one instance can serve any number of `create` calls from any
/// number of threads.
pub struct ValueFactory<Boxed, Raw> {
    rules: Vec<Box<dyn ValidationRule<Raw>>>,
    constructor: Constructor<Boxed, Raw>,
}

impl<Boxed, Raw> ValueFactory<Boxed, Raw> {
    /// Create a factory from an ordered rule list and a constructor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use valuegate::rule::*;
    /// use valuegate::ValueFactory;
    ///
    /// let percent = ValueFactory::with_rules(
    ///     vec![min_value(0).boxed(), max_value(100).boxed()],
    ///     |n: i32| n as u8,
    /// );
    /// assert_eq!(percent.create(42).unwrap(), 42u8);
    /// assert!(percent.create(101).is_err());
    /// ```
    pub fn with_rules<I, F>(rules: I, constructor: F) -> Self
    where
        I: IntoIterator<Item = Box<dyn ValidationRule<Raw>>>,
        F: Fn(Raw) -> Boxed + Send + Sync + 'static,
    {
        ValueFactory {
            rules: rules.into_iter().collect(),
            constructor: Box::new(constructor),
        }
    }

    /// Create a factory that never rejects anything.
    ///
    /// # Example
    ///
    /// ```rust
    /// use valuegate::ValueFactory;
    ///
    /// let factory = ValueFactory::without_rules(|s: String| s.len());
    /// assert!(factory.rules().is_empty());
    /// assert_eq!(factory.create(String::new()).unwrap(), 0);
    /// ```
    pub fn without_rules<F>(constructor: F) -> Self
    where
        F: Fn(Raw) -> Boxed + Send + Sync + 'static,
    {
        Self::with_rules(Vec::new(), constructor)
    }

    /// Start collecting rules for a new factory.
    pub fn builder() -> FactoryBuilder<Boxed, Raw> {
        FactoryBuilder::new()
    }

    /// The rules applied by this factory, in evaluation order.
    pub fn rules(&self) -> &[Box<dyn ValidationRule<Raw>>] {
        &self.rules
    }

    /// Validate `raw` and construct the value.
    ///
    /// Rules run in declaration order. The first rejection ends evaluation and
    /// is returned as a [`ValidationError`]; later rules are not consulted.
    /// When every rule passes (or there are none), the constructor runs exactly
    /// once with `raw`.
    pub fn create(&self, raw: Raw) -> Result<Boxed, ValidationError> {
        for rule in &self.rules {
            if let Some(failure) = rule.validate(&raw).into_failure() {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    rule = self.rules.iter().position(|r| std::ptr::eq(r, rule)),
                    failure = %failure,
                    "raw value rejected"
                );
                return Err(ValidationError::from_shared(failure));
            }
        }

        Ok((self.constructor)(raw))
    }

    /// Like [`create`](Self::create), but panics on rejection.
    ///
    /// The panic message is the [`ValidationError`] display text. Use
    /// [`create`](Self::create) when the failure itself is needed.
    ///
    /// # Panics
    ///
    /// Panics if any rule rejects `raw`.
    ///
    /// ```rust,should_panic
    /// use valuegate::rule::*;
    /// use valuegate::ValueFactory;
    ///
    /// let factory = ValueFactory::builder().rule(max_value(10)).build(|n: i32| n);
    /// // panics with "The following validation constraint has failed: Maximum value is 10"
    /// factory.create_or_throw(11);
    /// ```
    #[track_caller]
    pub fn create_or_throw(&self, raw: Raw) -> Boxed {
        match self.create(raw) {
            Ok(value) => value,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %err, "create_or_throw rejected raw value");
                panic!("{err}")
            }
        }
    }

    /// Like [`create`](Self::create), but discards the reason for a rejection.
    ///
    /// # Example
    ///
    /// ```rust
    /// use valuegate::rule::*;
    /// use valuegate::ValueFactory;
    ///
    /// let factory = ValueFactory::builder().rule(min_value(1)).build(|n: u32| n);
    /// assert_eq!(factory.create_or_none(5), Some(5));
    /// assert_eq!(factory.create_or_none(0), None);
    /// ```
    pub fn create_or_none(&self, raw: Raw) -> Option<Boxed> {
        self.create(raw).ok()
    }

    /// Like [`create`](Self::create), but hands a rejection to `fallback`.
    ///
    /// `fallback` receives the failure of the rule that rejected `raw` and its
    /// return value is used instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use valuegate::rule::*;
    /// use valuegate::ValueFactory;
    ///
    /// let factory = ValueFactory::builder().rule(not_blank()).build(|s: String| s);
    /// let name = factory.create_or("  ".to_string(), |failure| failure.message());
    /// assert_eq!(name, "Provided value is empty");
    /// ```
    pub fn create_or<F>(&self, raw: Raw, fallback: F) -> Boxed
    where
        F: FnOnce(Arc<dyn CreationFailure>) -> Boxed,
    {
        self.create(raw).unwrap_or_else(|err| fallback(err.into_failure()))
    }

    /// Run every rule against `raw` without stopping at the first rejection.
    ///
    /// Returns one result per rule, in rule order. Useful when every violated
    /// constraint should be reported at once.
    ///
    /// # Example
    ///
    /// ```rust
    /// use valuegate::rule::*;
    /// use valuegate::ValueFactory;
    ///
    /// let factory = ValueFactory::builder()
    ///     .rule(not_blank())
    ///     .rule(length_range(3..=16))
    ///     .rule(matches_pattern("^[a-z]+$").unwrap())
    ///     .build(|s: String| s);
    ///
    /// let results = factory.check(&"A".to_string());
    /// let valid: Vec<bool> = results.iter().map(|r| r.is_valid()).collect();
    /// assert_eq!(valid, vec![true, false, false]);
    /// ```
    pub fn check(&self, raw: &Raw) -> Vec<ValidationResult> {
        self.rules.iter().map(|rule| rule.validate(raw)).collect()
    }

    /// The failures [`check`](Self::check) would report, in rule order.
    pub fn failures(&self, raw: &Raw) -> Vec<Arc<dyn CreationFailure>> {
        self.rules
            .iter()
            .filter_map(|rule| rule.validate(raw).into_failure())
            .collect()
    }
}

impl<Boxed, Raw> fmt::Debug for ValueFactory<Boxed, Raw> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueFactory")
            .field("rules", &self.rules.len())
            .field("boxed", &std::any::type_name::<Boxed>())
            .field("raw", &std::any::type_name::<Raw>())
            .finish()
    }
}

/// Collects rules, in order, for a [`ValueFactory`].
pub struct FactoryBuilder<Boxed, Raw> {
    rules: Vec<Box<dyn ValidationRule<Raw>>>,
    _boxed: PhantomData<fn() -> Boxed>,
}

impl<Boxed, Raw> FactoryBuilder<Boxed, Raw> {
    /// An empty builder.
    pub fn new() -> Self {
        FactoryBuilder {
            rules: Vec::new(),
            _boxed: PhantomData,
        }
    }

    /// Append a rule. Rules run in the order they are added.
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: ValidationRule<Raw> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Append an already boxed rule.
    pub fn boxed_rule(mut self, rule: Box<dyn ValidationRule<Raw>>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Freeze the rules and attach the constructor.
    pub fn build<F>(self, constructor: F) -> ValueFactory<Boxed, Raw>
    where
        F: Fn(Raw) -> Boxed + Send + Sync + 'static,
    {
        ValueFactory::with_rules(self.rules, constructor)
    }
}

impl<Boxed, Raw> Default for FactoryBuilder<Boxed, Raw> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Boxed, Raw> fmt::Debug for FactoryBuilder<Boxed, Raw> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryBuilder")
            .field("rules", &self.rules.len())
            .finish()
    }
}
