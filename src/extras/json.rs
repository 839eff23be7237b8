//! Building bags from JSON objects.
//!
//! Strings map to `Str`, numbers that fit in an `i32` map to `Int`, `null`
//! maps to `Null`, and everything else (booleans, wider numbers, arrays,
//! nested objects) is kept as an opaque `Other`.

use super::{ExtraValue, Extras};
use anyhow::{Context, Result};
use serde_json::Value;
use std::sync::Arc;

impl From<Value> for ExtraValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ExtraValue::Null,
            Value::String(s) => ExtraValue::Str(s),
            Value::Number(n) => match n.as_i64().and_then(|i| i32::try_from(i).ok()) {
                Some(i) => ExtraValue::Int(i),
                None => ExtraValue::Other(Arc::new(Value::Number(n))),
            },
            other => ExtraValue::Other(Arc::new(other)),
        }
    }
}

impl Extras {
    /// Builds a bag from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a JSON object.
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => anyhow::bail!("Extras must be a JSON object, got: {}", other),
        }
    }

    /// Parses `text` as JSON and builds a bag from the resulting object.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).context("Invalid extras JSON")?;
        Self::from_json(value)
    }
}
