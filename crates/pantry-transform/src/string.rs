//! Normalizers for free-text, email, phone, and URL input.

use serde_json::Value;

/// Trim surrounding whitespace; empty or non-string input becomes `Null`.
#[must_use]
pub fn text(raw: &Value) -> Value {
    match raw {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Value::Null
            } else {
                Value::String(trimmed.to_string())
            }
        }
        _ => Value::Null,
    }
}

/// Trim and ASCII-lowercase an email address; empty input becomes `Null`.
///
/// Format is intentionally not checked here: a present-but-malformed address
/// must survive normalization so the check stage can report `invalid_format`
/// instead of the transform silently discarding what the user typed.
#[must_use]
pub fn email(raw: &Value) -> Value {
    match text(raw) {
        Value::String(s) => Value::String(s.to_ascii_lowercase()),
        other => other,
    }
}

/// Reduce a phone number to its digits; empty results become `Null`.
#[must_use]
pub fn phone(raw: &Value) -> Value {
    match raw {
        Value::String(s) => {
            let digits: String = s.chars().filter(char::is_ascii_digit).collect();
            if digits.is_empty() {
                Value::Null
            } else {
                Value::String(digits)
            }
        }
        _ => Value::Null,
    }
}

/// Trim a URL; empty or non-string input becomes `Null`.
///
/// Like [`email`], malformed-but-present values pass through for the check
/// stage to flag.
#[must_use]
pub fn url(raw: &Value) -> Value {
    text(raw)
}
