//! The wire-level response envelope.
//!
//! Every response emitted by this crate, success or failure, shares one JSON
//! shape:
//!
//! ```json
//! { "isSuccess": true, "message": "Users fetched.", "data": { ... }, "meta": { ... } }
//! ```
//!
//! Optional keys (`data`, `meta`, `errors`) are omitted entirely when absent —
//! never serialized as `null`. Consumers distinguish "no data" from "empty
//! data" by key absence, so a supplied value that is empty (`null`, `{}`,
//! `[]`, `""`) is also left off the wire.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field-level validation errors, keyed by field name.
///
/// A `BTreeMap` keeps key order deterministic, so serializing the same
/// envelope twice yields byte-identical output.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// The envelope wrapping every response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Whether the request was handled successfully.
    pub is_success: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// Response payload. Only meaningful on success responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Auxiliary information such as pagination or counts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    /// Field-level errors. Only meaningful on failure responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl Envelope {
    /// Creates a success envelope carrying only a message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            message: message.into(),
            data: None,
            meta: None,
            errors: None,
        }
    }

    /// Creates a failure envelope carrying only a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            message: message.into(),
            data: None,
            meta: None,
            errors: None,
        }
    }

    /// Attaches a payload. Empty values are dropped, not serialized.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = meaningful(data);
        self
    }

    /// Attaches metadata. Empty values are dropped, not serialized.
    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = meaningful(meta);
        self
    }

    /// Attaches field errors. An empty map is dropped, not serialized.
    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = (!errors.is_empty()).then_some(errors);
        self
    }
}

/// Inclusion rule for optional envelope fields: present and non-empty.
///
/// Emptiness is judged on the top-level value only; `{"users": []}` is a
/// non-empty object and is kept as supplied.
fn meaningful(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(ref map) if map.is_empty() => None,
        Value::Array(ref items) if items.is_empty() => None,
        Value::String(ref s) if s.is_empty() => None,
        other => Some(other),
    }
}
