//! Normalizers for array-valued fields.
//!
//! Arrays never normalize to `Null`: absent or malformed input becomes the
//! empty array, and entries that fail their element transform are dropped.

use serde_json::Value;

use crate::{ident, string};

/// Normalize to an array of trimmed non-empty strings.
#[must_use]
pub fn string_array(raw: &Value) -> Value {
    filtered(raw, string::text)
}

/// Normalize to an array of canonical UUID strings, dropping entries that do
/// not parse.
#[must_use]
pub fn uuid_array(raw: &Value) -> Value {
    filtered(raw, ident::uuid)
}

fn filtered(raw: &Value, element: fn(&Value) -> Value) -> Value {
    match raw {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(element)
                .filter(|v| !v.is_null())
                .collect(),
        ),
        _ => Value::Array(Vec::new()),
    }
}
