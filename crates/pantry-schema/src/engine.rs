//! The two-stage validation engine: normalize, then check.
//!
//! Both stages are pure. `normalize` never fails: malformed input becomes the
//! canonical empty value for its field type. `check` collects every rule
//! failure for the submission; there is no fail-fast, so a caller always sees
//! the complete error list.

use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entity::EntitySchema;
use crate::field::{FieldSpec, FieldType};
use crate::rules::CrossRule;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)+$")
        .expect("email pattern is valid")
});

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s]+\.[^\s]+$").expect("url pattern is valid"));

/// Engine strictness knobs, fed from configuration.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Report input keys that match no schema field instead of dropping them.
    pub deny_unknown_fields: bool,
    /// Fewest digits a normalized phone number may have.
    pub phone_min_digits: usize,
    /// Most digits a normalized phone number may have.
    pub phone_max_digits: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            deny_unknown_fields: false,
            phone_min_digits: 7,
            phone_max_digits: 15,
        }
    }
}

/// Machine-readable failure category for a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Required,
    InvalidFormat,
    TooLong,
    OutOfRange,
    NotOneOf,
    MissingLink,
    UnknownField,
}

/// One rule failure, addressed by field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldError {
    pub path: String,
    pub code: ErrorCode,
    pub message: String,
}

impl FieldError {
    fn new(path: &str, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            code,
            message: message.into(),
        }
    }
}

/// Output of the normalize stage.
#[derive(Debug, Clone)]
pub struct Normalized {
    /// Canonical value for every schema field.
    pub values: Map<String, Value>,
    /// Input keys that matched no schema field.
    pub unknown: Vec<String>,
}

impl Normalized {
    fn get(&self, field: &str) -> &Value {
        self.values.get(field).unwrap_or(&Value::Null)
    }
}

/// Result of a full validation pass.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    pub entity: String,
    pub valid: bool,
    /// The normalized record; meaningful for handoff only when `valid`.
    pub normalized: Value,
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Normalize raw input against a schema.
///
/// Every schema field appears in the output, canonicalized by its field
/// type's transform; absent fields are `Null` (arrays: `[]`). Input keys
/// matching no field are collected in `unknown`, not copied through. A
/// non-object input is treated as the empty submission.
#[must_use]
pub fn normalize(schema: &EntitySchema, raw: &Value) -> Normalized {
    let empty = Map::new();
    let input = raw.as_object().unwrap_or(&empty);

    let mut values = Map::with_capacity(schema.fields.len());
    for spec in &schema.fields {
        let raw_value = input.get(spec.name).unwrap_or(&Value::Null);
        values.insert(spec.name.to_string(), apply_transform(spec.ty, raw_value));
    }

    let unknown = input
        .keys()
        .filter(|key| schema.field(key).is_none())
        .cloned()
        .collect();

    Normalized { values, unknown }
}

/// Evaluate all rules over a normalized record and collect every failure.
///
/// Order is deterministic: per-field rules in declaration order, then mode
/// switches, then cross rules, then unknown-field reports (strict mode only).
#[must_use]
pub fn check(
    schema: &EntitySchema,
    normalized: &Normalized,
    options: &EngineOptions,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for spec in &schema.fields {
        check_field(spec, normalized.get(spec.name), options, &mut errors);
    }

    for switch in &schema.mode_switches {
        let Some(tag) = normalized.get(switch.field).as_str() else {
            // Null discriminant: the required check above already reported it.
            continue;
        };
        let Some(variant) = switch.variant_for(tag) else {
            // Unknown tag: the membership check above already reported it.
            continue;
        };
        for req in &variant.requires {
            if normalized.get(req.field).is_null() {
                errors.push(FieldError::new(req.field, ErrorCode::Required, req.message));
            }
        }
    }

    for rule in &schema.cross_rules {
        check_cross_rule(rule, normalized, &mut errors);
    }

    if options.deny_unknown_fields {
        for key in &normalized.unknown {
            errors.push(FieldError::new(
                key,
                ErrorCode::UnknownField,
                format!("Unknown field: {key}"),
            ));
        }
    }

    errors
}

/// Normalize and check in one pass.
#[must_use]
pub fn validate(schema: &EntitySchema, raw: &Value, options: &EngineOptions) -> ValidationReport {
    let normalized = normalize(schema, raw);

    if !options.deny_unknown_fields && !normalized.unknown.is_empty() {
        tracing::debug!(
            entity = schema.name,
            dropped = ?normalized.unknown,
            "dropped unknown input fields during normalization"
        );
    }

    let errors = check(schema, &normalized, options);
    ValidationReport {
        entity: schema.name.to_string(),
        valid: errors.is_empty(),
        normalized: Value::Object(normalized.values),
        errors,
    }
}

fn apply_transform(ty: FieldType, raw: &Value) -> Value {
    match ty {
        FieldType::Text { .. } | FieldType::Enum(_) => pantry_transform::text(raw),
        FieldType::Email => pantry_transform::email(raw),
        FieldType::Phone => pantry_transform::phone(raw),
        FieldType::Url => pantry_transform::url(raw),
        FieldType::Uuid => pantry_transform::uuid(raw),
        FieldType::Number { .. } => pantry_transform::number(raw),
        FieldType::Integer { .. } => pantry_transform::integer(raw),
        FieldType::Boolean => pantry_transform::boolean(raw),
        FieldType::Date => pantry_transform::date(raw),
        FieldType::StringArray => pantry_transform::string_array(raw),
        FieldType::UuidArray => pantry_transform::uuid_array(raw),
    }
}

fn check_field(
    spec: &FieldSpec,
    value: &Value,
    options: &EngineOptions,
    errors: &mut Vec<FieldError>,
) {
    if value.is_null() {
        if spec.required {
            errors.push(FieldError::new(
                spec.name,
                ErrorCode::Required,
                format!("{} is required", spec.label()),
            ));
        }
        return;
    }

    match spec.ty {
        FieldType::Text { max_len } => {
            if let (Some(max), Some(s)) = (max_len, value.as_str())
                && s.chars().count() > max
            {
                errors.push(FieldError::new(
                    spec.name,
                    ErrorCode::TooLong,
                    format!("{} must be at most {max} characters", spec.label()),
                ));
            }
        }
        FieldType::Email => {
            if value.as_str().is_some_and(|s| !EMAIL_RE.is_match(s)) {
                errors.push(FieldError::new(
                    spec.name,
                    ErrorCode::InvalidFormat,
                    format!("{} must be a valid email address", spec.label()),
                ));
            }
        }
        FieldType::Url => {
            if value.as_str().is_some_and(|s| !URL_RE.is_match(s)) {
                errors.push(FieldError::new(
                    spec.name,
                    ErrorCode::InvalidFormat,
                    format!("{} must be a valid http(s) URL", spec.label()),
                ));
            }
        }
        FieldType::Phone => {
            let digits = value.as_str().map_or(0, str::len);
            if digits < options.phone_min_digits || digits > options.phone_max_digits {
                errors.push(FieldError::new(
                    spec.name,
                    ErrorCode::InvalidFormat,
                    format!(
                        "{} must contain {} to {} digits",
                        spec.label(),
                        options.phone_min_digits,
                        options.phone_max_digits
                    ),
                ));
            }
        }
        FieldType::Number { min, max } => {
            if let Some(n) = value.as_f64()
                && (min.is_some_and(|m| n < m) || max.is_some_and(|m| n > m))
            {
                errors.push(out_of_range(spec, min, max));
            }
        }
        FieldType::Integer { min, max } => {
            if let Some(n) = value.as_i64()
                && (min.is_some_and(|m| n < m) || max.is_some_and(|m| n > m))
            {
                errors.push(out_of_range(spec, min, max));
            }
        }
        FieldType::Enum(allowed) => {
            if value.as_str().is_some_and(|s| !allowed.contains(&s)) {
                errors.push(FieldError::new(
                    spec.name,
                    ErrorCode::NotOneOf,
                    format!("{} must be one of: {}", spec.label(), allowed.join(", ")),
                ));
            }
        }
        // Transforms for these already guarantee a canonical value.
        FieldType::Uuid | FieldType::Boolean | FieldType::Date => {}
        FieldType::StringArray | FieldType::UuidArray => {}
    }
}

fn out_of_range<T: std::fmt::Display>(
    spec: &FieldSpec,
    min: Option<T>,
    max: Option<T>,
) -> FieldError {
    let bounds = match (min, max) {
        (Some(min), Some(max)) => format!("between {min} and {max}"),
        (Some(min), None) => format!("at least {min}"),
        (None, Some(max)) => format!("at most {max}"),
        (None, None) => "in range".to_string(),
    };
    FieldError::new(
        spec.name,
        ErrorCode::OutOfRange,
        format!("{} must be {bounds}", spec.label()),
    )
}

fn check_cross_rule(rule: &CrossRule, normalized: &Normalized, errors: &mut Vec<FieldError>) {
    match rule {
        CrossRule::AtLeastOne {
            fields,
            report_on,
            message,
        } => {
            if fields.iter().all(|f| normalized.get(f).is_null()) {
                errors.push(FieldError::new(report_on, ErrorCode::MissingLink, *message));
            }
        }
        CrossRule::RequiredWhenTrue {
            gate,
            required,
            message,
        } => {
            if normalized.get(gate) == &Value::Bool(true) && normalized.get(required).is_null() {
                errors.push(FieldError::new(required, ErrorCode::Required, *message));
            }
        }
    }
}
