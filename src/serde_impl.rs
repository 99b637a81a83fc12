//! Serde support for value factories (feature-gated)
//!
//! Deserializing through a factory validates the raw value on the way in, so
//! invalid input is rejected by the deserializer instead of reaching the
//! domain type.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::{Deserialize, Deserializer};
//! use valuegate::ValueFactory;
//!
//! #[derive(Deserialize)]
//! struct Signup {
//!     #[serde(deserialize_with = "username")]
//!     name: Username,
//! }
//!
//! fn username<'de, D: Deserializer<'de>>(d: D) -> Result<Username, D::Error> {
//!     Username::factory().deserialize(d)
//! }
//!
//! // Invalid data fails deserialization
//! let result: Result<Signup, _> = serde_json::from_str(r#"{"name": ""}"#);
//! assert!(result.is_err());
//! ```

use std::fmt;

use serde::de::{DeserializeSeed, Error as _};
use serde::{Deserialize, Deserializer};

use crate::factory::ValueFactory;

impl<Boxed, Raw> ValueFactory<Boxed, Raw> {
    /// Deserialize a raw value and run it through [`create`](Self::create).
    ///
    /// A rejected value becomes a custom deserializer error carrying the
    /// [`ValidationError`](crate::ValidationError) message.
    pub fn deserialize<'de, D>(&self, deserializer: D) -> Result<Boxed, D::Error>
    where
        D: Deserializer<'de>,
        Raw: Deserialize<'de>,
    {
        let raw = Raw::deserialize(deserializer)?;
        self.create(raw).map_err(D::Error::custom)
    }

    /// A [`DeserializeSeed`] that deserializes through this factory.
    ///
    /// Use it when driving a deserializer by hand, for example inside a
    /// custom `Visitor`.
    pub fn seed(&self) -> FactorySeed<'_, Boxed, Raw> {
        FactorySeed { factory: self }
    }
}

/// Deserializes a `Boxed` value by validating the raw input with a factory.
pub struct FactorySeed<'a, Boxed, Raw> {
    factory: &'a ValueFactory<Boxed, Raw>,
}

impl<'de, Boxed, Raw> DeserializeSeed<'de> for FactorySeed<'_, Boxed, Raw>
where
    Raw: Deserialize<'de>,
{
    type Value = Boxed;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        self.factory.deserialize(deserializer)
    }
}

impl<Boxed, Raw> fmt::Debug for FactorySeed<'_, Boxed, Raw> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactorySeed")
            .field("factory", self.factory)
            .finish()
    }
}
