//! Normalizer for form dates.

use chrono::NaiveDate;
use serde_json::Value;

/// Canonicalize an ISO `YYYY-MM-DD` date string; anything that does not parse
/// becomes `Null`.
///
/// Unpadded components are accepted (`2026-8-1` → `2026-08-01`).
#[must_use]
pub fn date(raw: &Value) -> Value {
    match raw {
        Value::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_or(Value::Null, |parsed| {
                Value::String(parsed.format("%Y-%m-%d").to_string())
            }),
        _ => Value::Null,
    }
}
