//! Normalizer for UUID references.

use serde_json::Value;
use uuid::Uuid;

/// Canonicalize an RFC-4122 identifier to lowercase hyphenated form; anything
/// that does not parse becomes `Null`.
///
/// Braced, simple (no-hyphen), and URN spellings are accepted and rewritten to
/// the canonical form. Referential integrity is out of scope here; only the
/// format is checked.
#[must_use]
pub fn uuid(raw: &Value) -> Value {
    match raw {
        Value::String(s) => Uuid::try_parse(s.trim()).map_or(Value::Null, |parsed| {
            Value::String(parsed.hyphenated().to_string())
        }),
        _ => Value::Null,
    }
}
