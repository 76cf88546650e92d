//! # pantry-resolver
//!
//! The adapter between Pantry schemas and a form-binding caller: raw input
//! goes in, and either a fully typed record or a field-indexed error map
//! comes out. Nothing here panics on bad input; shape drift between a schema
//! and its record type surfaces as a [`ResolverError`].

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use pantry_core::entities::{Contact, Interaction, Opportunity, Organization, Product};
use pantry_core::enums::EntityKind;
use pantry_schema::{EngineOptions, EntitySchema, SchemaRegistry, engine};
use thiserror::Error;

/// First error message per field path, in path order.
pub type FieldErrors = BTreeMap<String, String>;

/// Outcome of resolving raw input against a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    /// Every rule passed; the normalized record, typed.
    Values(T),
    /// One or more rules failed; no typed value is produced.
    Errors(FieldErrors),
}

impl<T> Resolution<T> {
    /// The typed record, if resolution succeeded.
    pub fn values(self) -> Option<T> {
        match self {
            Self::Values(values) => Some(values),
            Self::Errors(_) => None,
        }
    }
}

/// Failures of the resolver itself, as opposed to failures of the input.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// The schema accepted the record but the target type would not: the
    /// schema and the type have drifted apart.
    #[error("Schema '{entity}' and its record type disagree: {source}")]
    Shape {
        entity: String,
        #[source]
        source: serde_json::Error,
    },

    /// Typed resolution was requested for a name outside the catalog.
    #[error(transparent)]
    UnknownEntity(#[from] pantry_core::errors::CoreError),
}

/// Resolve raw input to a typed record, or collect its field errors.
///
/// The full error list lives on the underlying
/// [`pantry_schema::ValidationReport`]; this adapter keeps the first message
/// per field, which is what a form binding displays.
///
/// # Errors
///
/// Returns [`ResolverError::Shape`] when the normalized record passes
/// validation but does not deserialize into `T`.
pub fn resolve<T: DeserializeOwned>(
    schema: &EntitySchema,
    raw: &Value,
    options: &EngineOptions,
) -> Result<Resolution<T>, ResolverError> {
    let report = engine::validate(schema, raw, options);
    if !report.is_valid() {
        let mut errors = FieldErrors::new();
        for error in report.errors {
            errors.entry(error.path).or_insert(error.message);
        }
        return Ok(Resolution::Errors(errors));
    }

    match serde_json::from_value(report.normalized) {
        Ok(values) => Ok(Resolution::Values(values)),
        Err(source) => Err(ResolverError::Shape {
            entity: report.entity,
            source,
        }),
    }
}

/// A typed record of any of the five built-in kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum KnownRecord {
    Contact(Box<Contact>),
    Organization(Box<Organization>),
    Product(Box<Product>),
    Opportunity(Box<Opportunity>),
    Interaction(Box<Interaction>),
}

/// Resolve raw input for a named built-in entity.
///
/// # Errors
///
/// Returns [`ResolverError::UnknownEntity`] for names outside the catalog and
/// [`ResolverError::Shape`] on schema/type drift.
pub fn resolve_known(
    registry: &SchemaRegistry,
    entity: &str,
    raw: &Value,
) -> Result<Resolution<KnownRecord>, ResolverError> {
    let kind = EntityKind::from_name(entity)?;
    let schema = registry.get(kind.as_str()).ok_or_else(|| {
        pantry_core::errors::CoreError::UnknownEntity(entity.to_string())
    })?;
    let options = registry.options();

    Ok(match kind {
        EntityKind::Contact => map_resolution(resolve(schema, raw, options)?, |v| {
            KnownRecord::Contact(Box::new(v))
        }),
        EntityKind::Organization => map_resolution(resolve(schema, raw, options)?, |v| {
            KnownRecord::Organization(Box::new(v))
        }),
        EntityKind::Product => map_resolution(resolve(schema, raw, options)?, |v| {
            KnownRecord::Product(Box::new(v))
        }),
        EntityKind::Opportunity => map_resolution(resolve(schema, raw, options)?, |v| {
            KnownRecord::Opportunity(Box::new(v))
        }),
        EntityKind::Interaction => map_resolution(resolve(schema, raw, options)?, |v| {
            KnownRecord::Interaction(Box::new(v))
        }),
    })
}

fn map_resolution<T, U>(resolution: Resolution<T>, wrap: impl FnOnce(T) -> U) -> Resolution<U> {
    match resolution {
        Resolution::Values(values) => Resolution::Values(wrap(values)),
        Resolution::Errors(errors) => Resolution::Errors(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::enums::{OpportunityStage, RecordMode};
    use pantry_schema::catalog;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn resolves_typed_contact() {
        let schema = catalog::contact();
        let raw = json!({
            "first_name": "  Maria ",
            "last_name": "Santos",
            "organization_mode": "existing",
            "organization_id": "550E8400-E29B-41D4-A716-446655440000",
            "email": "Maria.Santos@Example.COM",
            "phone": "(503) 555-1234"
        });

        let resolution: Resolution<Contact> =
            resolve(&schema, &raw, &EngineOptions::default()).unwrap();
        let contact = resolution.values().expect("contact should resolve");
        assert_eq!(contact.first_name, "Maria");
        assert_eq!(contact.organization_mode, RecordMode::Existing);
        assert_eq!(
            contact.organization_id.unwrap().to_string(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
        assert_eq!(contact.email.as_deref(), Some("maria.santos@example.com"));
        assert_eq!(contact.phone.as_deref(), Some("5035551234"));
        assert!(contact.tags.is_empty());
    }

    #[test]
    fn collects_first_message_per_path() {
        let schema = catalog::contact();
        let raw = json!({
            "organization_mode": "new",
            "email": "nope"
        });

        let resolution: Resolution<Contact> =
            resolve(&schema, &raw, &EngineOptions::default()).unwrap();
        let Resolution::Errors(errors) = resolution else {
            panic!("expected errors");
        };
        assert_eq!(
            errors.keys().collect::<Vec<_>>(),
            ["email", "first_name", "last_name", "organization_name"]
        );
        assert_eq!(
            errors["organization_name"],
            "Organization name is required when creating a new organization"
        );
    }

    #[test]
    fn resolve_known_dispatches_by_name() {
        let registry = SchemaRegistry::new();
        let raw = json!({
            "name": "Harbor Foods — cold brew line",
            "organization_mode": "existing",
            "organization_id": "550e8400-e29b-41d4-a716-446655440000",
            "principal_mode": "new",
            "principal_name": "Summit Roasters",
            "stage": "demo_scheduled",
            "probability": "80"
        });

        let resolution = resolve_known(&registry, "opportunity", &raw).unwrap();
        let Resolution::Values(KnownRecord::Opportunity(opportunity)) = resolution else {
            panic!("expected a typed opportunity");
        };
        assert_eq!(opportunity.stage, OpportunityStage::DemoScheduled);
        assert_eq!(opportunity.probability, Some(80));
        assert!(opportunity.product_ids.is_empty());
    }

    #[test]
    fn resolve_known_rejects_unknown_names() {
        let registry = SchemaRegistry::new();
        let result = resolve_known(&registry, "supplier", &json!({}));
        assert!(matches!(result, Err(ResolverError::UnknownEntity(_))));
    }

    #[test]
    fn invalid_input_never_yields_values() {
        let registry = SchemaRegistry::new();
        let raw = json!({
            "interaction_type": "call",
            "subject": "Intro call",
            "occurred_on": "2026-08-01"
        });
        let resolution = resolve_known(&registry, "interaction", &raw).unwrap();
        let Resolution::Errors(errors) = resolution else {
            panic!("expected errors");
        };
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("organization_id"));
    }
}
