//! PowerSchool wraps every collection twice: an outer object keyed by the
//! plural resource name holding an inner object keyed by the singular name,
//! e.g. `{"sections": {"section": [...]}}`. Either level may be missing
//! (or null) on an empty result, which is absent data rather than an error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::client::PowerSchoolResult;

/// A record type that arrives inside a PowerSchool collection envelope.
pub trait Resource: DeserializeOwned {
    /// Outer wrapper key, e.g. `"sections"`.
    const COLLECTION_KEY: &'static str;
    /// Inner array key, e.g. `"section"`.
    const ITEM_KEY: &'static str;
}

#[derive(Debug)]
pub struct Envelope<T> {
    data: Option<Vec<T>>,
}

impl<T: Resource> Envelope<T> {
    pub fn from_slice(bytes: &[u8]) -> PowerSchoolResult<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Ok(Self::decode(value)?)
    }

    /// Records in original wire order, or `None` if either wrapper level
    /// was absent.
    pub fn data(&self) -> Option<&[T]> {
        self.data.as_deref()
    }

    pub fn into_data(self) -> Option<Vec<T>> {
        self.data
    }

    fn decode(value: Value) -> Result<Self, serde_json::Error> {
        let absent = Self { data: None };

        let mut root = match value {
            Value::Object(map) => map,
            other => return Err(type_mismatch("an object", &other)),
        };

        let mut wrapper = match root.remove(T::COLLECTION_KEY) {
            None | Some(Value::Null) => return Ok(absent),
            Some(Value::Object(map)) => map,
            Some(other) => return Err(type_mismatch("a wrapper object", &other)),
        };

        let items = match wrapper.remove(T::ITEM_KEY) {
            None | Some(Value::Null) => return Ok(absent),
            Some(items) => items,
        };

        // Any malformed element fails the whole decode; no partial arrays.
        let records: Vec<T> = serde_json::from_value(items)?;

        Ok(Self {
            data: Some(records),
        })
    }
}

impl<'de, T: Resource> Deserialize<'de> for Envelope<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::decode(value).map_err(serde::de::Error::custom)
    }
}

fn type_mismatch(expected: &str, found: &Value) -> serde_json::Error {
    let found = match found {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };

    serde::de::Error::custom(format!("expected {expected}, found {found}"))
}
