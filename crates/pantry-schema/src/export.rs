//! JSON Schema export adapter.
//!
//! Renders an [`EntitySchema`] as a draft 2020-12 document describing the
//! *normalized* record shape: every field present, optional fields nullable,
//! mode variants as `if`/`then` clauses, at-least-one rules as `anyOf`. The
//! internal representation stays the single source of truth; this adapter is
//! the only place that knows the external schema language.

use serde_json::{Map, Value, json};

use crate::engine::EngineOptions;
use crate::entity::EntitySchema;
use crate::field::{FieldSpec, FieldType};
use crate::rules::CrossRule;

const UUID_PATTERN: &str =
    "^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$";
const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

/// Render `schema` as a JSON Schema document.
///
/// Phone digit bounds come from `options` so the exported document agrees
/// with what the engine enforces.
#[must_use]
pub fn json_schema(schema: &EntitySchema, options: &EngineOptions) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for spec in &schema.fields {
        properties.insert(spec.name.to_string(), property(spec, options));
        if spec.required {
            required.push(json!(spec.name));
        }
    }

    let mut conditions = Vec::new();
    for switch in &schema.mode_switches {
        for variant in &switch.variants {
            let fields: Vec<&str> = variant.requires.iter().map(|r| r.field).collect();
            conditions.push(json!({
                "if": discriminant_is(switch.field, json!(variant.tag)),
                "then": non_null_all(&fields)
            }));
        }
    }

    for rule in &schema.cross_rules {
        match rule {
            CrossRule::AtLeastOne { fields, .. } => {
                let branches: Vec<Value> =
                    fields.iter().map(|f| non_null_all(&[*f])).collect();
                conditions.push(json!({ "anyOf": branches }));
            }
            CrossRule::RequiredWhenTrue { gate, required, .. } => {
                conditions.push(json!({
                    "if": discriminant_is(gate, json!(true)),
                    "then": non_null_all(&[*required])
                }));
            }
        }
    }

    let mut document = json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": schema.name,
        "type": "object",
        "additionalProperties": false,
        "properties": properties,
        "required": required,
    });
    if !conditions.is_empty() {
        document["allOf"] = Value::Array(conditions);
    }
    document
}

/// `{"properties": {field: {"const": tag}}, "required": [field]}` — matches
/// when the discriminant holds `tag`.
fn discriminant_is(field: &str, tag: Value) -> Value {
    let mut properties = Map::new();
    properties.insert(field.to_string(), json!({ "const": tag }));
    json!({ "properties": properties, "required": [field] })
}

/// `{"properties": {f: {"not": {"type": "null"}}}, "required": [f...]}` for
/// every listed field.
fn non_null_all(fields: &[&str]) -> Value {
    let mut properties = Map::new();
    for field in fields {
        properties.insert((*field).to_string(), json!({ "not": { "type": "null" } }));
    }
    json!({
        "properties": properties,
        "required": fields.iter().map(|f| json!(f)).collect::<Vec<_>>()
    })
}

fn property(spec: &FieldSpec, options: &EngineOptions) -> Value {
    let mut prop = match spec.ty {
        FieldType::Text { max_len } => {
            let mut p = json!({ "type": "string" });
            if let Some(max) = max_len {
                p["maxLength"] = json!(max);
            }
            p
        }
        FieldType::Email => json!({ "type": "string", "format": "email" }),
        FieldType::Url => json!({ "type": "string", "format": "uri" }),
        FieldType::Phone => json!({
            "type": "string",
            "pattern": format!("^[0-9]{{{},{}}}$", options.phone_min_digits, options.phone_max_digits)
        }),
        FieldType::Uuid => json!({ "type": "string", "pattern": UUID_PATTERN }),
        FieldType::Number { min, max } => bounded(json!({ "type": "number" }), min, max),
        FieldType::Integer { min, max } => bounded(json!({ "type": "integer" }), min, max),
        FieldType::Boolean => json!({ "type": "boolean" }),
        FieldType::Date => json!({ "type": "string", "pattern": DATE_PATTERN }),
        FieldType::Enum(allowed) => json!({ "enum": allowed }),
        FieldType::StringArray => json!({
            "type": "array",
            "items": { "type": "string", "minLength": 1 }
        }),
        FieldType::UuidArray => json!({
            "type": "array",
            "items": { "type": "string", "pattern": UUID_PATTERN }
        }),
    };

    if !spec.required {
        nullable(&mut prop);
    }
    prop
}

fn bounded<T: Into<Value>>(mut prop: Value, min: Option<T>, max: Option<T>) -> Value {
    if let Some(min) = min {
        prop["minimum"] = min.into();
    }
    if let Some(max) = max {
        prop["maximum"] = max.into();
    }
    prop
}

/// Widen a property schema to also accept `null`.
fn nullable(prop: &mut Value) {
    if let Some(values) = prop.get_mut("enum").and_then(Value::as_array_mut) {
        values.push(Value::Null);
        return;
    }
    if let Some(ty) = prop.get("type").cloned() {
        prop["type"] = json!([ty, "null"]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::engine::{EngineOptions, validate};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn compiled(schema: &EntitySchema) -> jsonschema::Validator {
        let document = json_schema(schema, &EngineOptions::default());
        jsonschema::validator_for(&document).expect("exported schema should compile")
    }

    fn errors(validator: &jsonschema::Validator, instance: &Value) -> Vec<String> {
        validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect()
    }

    #[test]
    fn every_catalog_schema_compiles() {
        for schema in catalog::all() {
            let _ = compiled(&schema);
        }
    }

    #[test]
    fn exported_schema_accepts_engine_valid_output() {
        let schema = catalog::contact();
        let raw = json!({
            "first_name": "Maria",
            "last_name": "Santos",
            "organization_mode": "existing",
            "organization_id": "550e8400-e29b-41d4-a716-446655440000",
            "email": "maria.santos@harborfoods.example",
            "phone": "(503) 555-1234",
            "tags": ["west-region"]
        });
        let report = validate(&schema, &raw, &EngineOptions::default());
        assert!(report.valid, "unexpected errors: {:?}", report.errors);

        let validator = compiled(&schema);
        assert_eq!(errors(&validator, &report.normalized), Vec::<String>::new());
    }

    #[test]
    fn exported_schema_rejects_missing_mode_sibling() {
        let schema = catalog::contact();
        let raw = json!({
            "first_name": "Dev",
            "last_name": "Patel",
            "organization_mode": "new"
        });
        let report = validate(&schema, &raw, &EngineOptions::default());
        assert!(!report.valid);

        let validator = compiled(&schema);
        assert!(!errors(&validator, &report.normalized).is_empty());
    }

    #[test]
    fn exported_schema_rejects_all_null_links() {
        let schema = catalog::interaction();
        let raw = json!({
            "interaction_type": "call",
            "subject": "Intro call",
            "occurred_on": "2026-08-01"
        });
        let report = validate(&schema, &raw, &EngineOptions::default());
        assert!(!report.valid);

        let validator = compiled(&schema);
        assert!(!errors(&validator, &report.normalized).is_empty());
    }

    #[test]
    fn exported_schema_rejects_unknown_keys() {
        let schema = catalog::organization();
        let validator = compiled(&schema);
        let mut instance = validate(
            &schema,
            &json!({"name": "Harbor Foods", "organization_type": "customer"}),
            &EngineOptions::default(),
        )
        .normalized;
        instance["fax"] = json!("none");
        assert!(!errors(&validator, &instance).is_empty());
    }

    #[test]
    fn engine_and_export_agree_on_normalized_records() {
        let schema = catalog::opportunity();
        let validator = compiled(&schema);
        let cases = [
            json!({
                "name": "Cold brew line",
                "organization_mode": "existing",
                "organization_id": "550e8400-e29b-41d4-a716-446655440000",
                "principal_mode": "existing",
                "principal_id": "550e8400-e29b-41d4-a716-446655440003",
                "stage": "new_lead"
            }),
            json!({
                "name": "Cold brew line",
                "organization_mode": "new",
                "principal_mode": "existing",
                "principal_id": "550e8400-e29b-41d4-a716-446655440003",
                "stage": "new_lead"
            }),
            json!({
                "name": "Cold brew line",
                "organization_mode": "existing",
                "organization_id": "550e8400-e29b-41d4-a716-446655440000",
                "principal_mode": "new",
                "principal_name": "Summit Roasters",
                "stage": "demo_scheduled",
                "probability": 80
            }),
        ];
        for raw in cases {
            let report = validate(&schema, &raw, &EngineOptions::default());
            let external_ok = errors(&validator, &report.normalized).is_empty();
            assert_eq!(
                report.valid, external_ok,
                "engine and exported schema disagree for {raw}"
            );
        }
    }
}
