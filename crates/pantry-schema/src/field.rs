//! Per-field declarations: which transform a field gets and which checks run
//! on its normalized value.

/// The normalization and check behavior of a single field.
///
/// Each variant pairs one `pantry-transform` function with the format checks
/// the engine runs afterwards. Types whose transform already guarantees a
/// canonical value (`Uuid`, `Date`, `Boolean`, the arrays) carry no further
/// format checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldType {
    /// Trimmed free text, optionally capped at `max_len` characters.
    Text { max_len: Option<usize> },
    /// Lowercased email address, format-checked after normalization.
    Email,
    /// Digits-only phone number; digit count is bounded by engine options.
    Phone,
    /// Trimmed URL, format-checked after normalization.
    Url,
    /// RFC-4122 identifier, canonicalized or nulled by the transform.
    Uuid,
    /// Floating-point number with optional inclusive bounds.
    Number { min: Option<f64>, max: Option<f64> },
    /// Whole number with optional inclusive bounds.
    Integer { min: Option<i64>, max: Option<i64> },
    /// Boolean, with common string spellings coerced.
    Boolean,
    /// ISO `YYYY-MM-DD` date, canonicalized or nulled by the transform.
    Date,
    /// Membership in a fixed set of wire names.
    Enum(&'static [&'static str]),
    /// Array of trimmed non-empty strings; never null.
    StringArray,
    /// Array of canonical UUID strings; invalid entries dropped; never null.
    UuidArray,
}

/// A named field in an entity schema.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    /// Whether a `Null` normalized value is an error regardless of mode.
    pub required: bool,
}

impl FieldSpec {
    /// Human label for error messages: `postal_code` → `Postal code`.
    #[must_use]
    pub fn label(&self) -> String {
        let mut label = self.name.replace('_', " ");
        if let Some(first) = label.get_mut(..1) {
            first.make_ascii_uppercase();
        }
        label
    }
}
