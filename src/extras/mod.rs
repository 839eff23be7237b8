//! Parameter bags ("extras") handed between screens of an application.
//!
//! A bag maps string keys to an [`ExtraValue`]. Strings and integers are
//! first-class; everything else is an [`ExtraObject`] whose display conversion
//! may fail. [`ExtrasBag`] is the read-only view the log helpers need, so hosts
//! can plug in their own container; [`Extras`] is the stock implementation.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

mod json;
mod objects;

/// A value whose string form is produced on demand and may not be available.
pub trait ExtraObject: fmt::Debug + Send + Sync {
    fn to_display_string(&self) -> anyhow::Result<String>;
}

/// One value in a bag.
#[derive(Debug, Clone)]
pub enum ExtraValue {
    Str(String),
    Int(i32),
    /// Key present, value null.
    Null,
    Other(Arc<dyn ExtraObject>),
}

impl ExtraValue {
    pub fn other(value: impl ExtraObject + 'static) -> Self {
        ExtraValue::Other(Arc::new(value))
    }

    /// Generic string conversion. Fails for `Null` and for objects that
    /// cannot render themselves.
    pub fn to_display_string(&self) -> anyhow::Result<String> {
        match self {
            ExtraValue::Str(s) => Ok(s.clone()),
            ExtraValue::Int(i) => Ok(i.to_string()),
            ExtraValue::Null => anyhow::bail!("value is null"),
            ExtraValue::Other(object) => object.to_display_string(),
        }
    }
}

impl From<&str> for ExtraValue {
    fn from(value: &str) -> Self {
        ExtraValue::Str(value.to_string())
    }
}

impl From<String> for ExtraValue {
    fn from(value: String) -> Self {
        ExtraValue::Str(value)
    }
}

impl From<i32> for ExtraValue {
    fn from(value: i32) -> Self {
        ExtraValue::Int(value)
    }
}

/// Read-only access to a parameter bag.
pub trait ExtrasBag {
    /// Every key, in the bag's own iteration order.
    fn keys(&self) -> Vec<&str>;

    fn get(&self, key: &str) -> Option<&ExtraValue>;

    /// The value under `key` if it is a string.
    fn get_string(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(ExtraValue::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The value under `key` if it is an integer, else 0.
    fn get_int(&self, key: &str) -> i32 {
        match self.get(key) {
            Some(ExtraValue::Int(i)) => *i,
            _ => 0,
        }
    }

    fn len(&self) -> usize {
        self.keys().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Hash-ordered parameter bag.
#[derive(Debug, Clone, Default)]
pub struct Extras {
    entries: HashMap<String, ExtraValue>,
}

impl Extras {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ExtraValue>) -> Option<ExtraValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn put_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), ExtraValue::Str(value.into()));
    }

    pub fn put_int(&mut self, key: impl Into<String>, value: i32) {
        self.entries.insert(key.into(), ExtraValue::Int(value));
    }

    pub fn put_null(&mut self, key: impl Into<String>) {
        self.entries.insert(key.into(), ExtraValue::Null);
    }

    pub fn put_object(&mut self, key: impl Into<String>, value: impl ExtraObject + 'static) {
        self.entries.insert(key.into(), ExtraValue::other(value));
    }

    pub fn remove(&mut self, key: &str) -> Option<ExtraValue> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtraValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl ExtrasBag for Extras {
    fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    fn get(&self, key: &str) -> Option<&ExtraValue> {
        self.entries.get(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Into<String>, V: Into<ExtraValue>> FromIterator<(K, V)> for Extras {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/extras_tests.rs"]
mod tests;
