//! The binding machinery shared by every record.
//!
//! A record is built from a [`Raw`] view of whatever JSON the server sent back. Each record
//! lists its own fields in [`Hydrate::from_raw`], pulling every key out with an explicit
//! default, so building a record can never fail: missing keys default, unknown keys are
//! ignored and values of the wrong type are coerced where possible or dropped.

use std::any::type_name;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::lidarr::coerce;
use crate::lidarr::models::common::IdRefs;

/// A read-only view over a (possibly absent) JSON object.
///
/// Keys are matched exactly as the server spells them. A key holding `null` is treated the
/// same as a missing key.
#[derive(Clone, Copy, Debug, Default)]
pub struct Raw<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Raw<'a> {
    /// Any value that is not an object gives an empty view.
    pub fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.map_or(true, Map::is_empty)
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields?.get(key).filter(|value| !value.is_null())
    }

    pub fn string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(coerce::to_string)
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(coerce::to_int)
    }

    pub fn float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(coerce::to_float)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(coerce::to_bool)
    }

    pub fn datetime(&self, key: &str) -> Option<DateTime<Utc>> {
        self.get(key).and_then(coerce::to_datetime)
    }

    pub fn strings(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|value| coerce::to_list(value, coerce::to_string))
            .unwrap_or_default()
    }

    pub fn ints(&self, key: &str) -> Vec<i64> {
        self.get(key)
            .map(|value| coerce::to_list(value, coerce::to_int))
            .unwrap_or_default()
    }

    /// The raw value, untouched. Used for fields whose type depends on other fields.
    pub fn value(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }

    /// A nested record. Always returns an instance; an absent key gives the empty one.
    pub fn record<T: Hydrate>(&self, key: &str) -> T {
        T::hydrate_opt(self.get(key))
    }

    /// A list of nested records, in server order. Anything other than an array gives `[]`.
    pub fn records<T: Hydrate>(&self, key: &str) -> Vec<T> {
        match self.get(key) {
            Some(Value::Array(items)) => items.iter().map(T::hydrate).collect(),
            Some(other) => {
                debug!(
                    "Expected a list for `{key}` on `{}`, got `{other}`",
                    type_name::<T>()
                );
                vec![]
            }
            None => vec![],
        }
    }

    pub fn id_refs(&self, key: &str) -> IdRefs {
        IdRefs::hydrate(self.get(key))
    }
}

/// Construction of a typed record from loosely typed JSON.
pub trait Hydrate: Sized {
    /// Maps every declared field out of `raw`. Must not assume any key is present.
    fn from_raw(raw: Raw<'_>) -> Self;

    fn hydrate(value: &Value) -> Self {
        if !value.is_object() && !value.is_null() {
            debug!(
                "Expected an object for `{}`, got `{value}`; using defaults",
                type_name::<Self>()
            );
        }
        Self::from_raw(Raw::new(value))
    }

    fn hydrate_opt(value: Option<&Value>) -> Self {
        match value {
            Some(value) => Self::hydrate(value),
            None => Self::from_raw(Raw::empty()),
        }
    }

    /// Runs an already typed record back through hydration.
    fn rehydrate(&self) -> Self
    where
        Self: Serialize + Clone,
    {
        match serde_json::to_value(self) {
            Ok(value) => Self::hydrate(&value),
            Err(err) => {
                warn!("Unable to re-normalise `{}`: {err}", type_name::<Self>());
                self.clone()
            }
        }
    }
}
