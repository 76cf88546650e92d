//! Built-in schemas for the five CRM record kinds.
//!
//! Field lists mirror the record structs in `pantry-core`; enum membership
//! rules are built from the `VALUES` slices there so the wire names are
//! declared once.

use pantry_core::enums::{
    EntityKind, InteractionType, OpportunityStage, OrganizationType, Priority, ProductCategory,
    RecordMode,
};

use crate::entity::EntitySchema;
use crate::field::FieldType;
use crate::rules::{CrossRule, ModeSwitch, ModeVariant};

const NAME_LEN: usize = 255;
const PLACE_LEN: usize = 100;
const NOTES_LEN: usize = 2000;

/// Schema for [`pantry_core::entities::Contact`].
#[must_use]
pub fn contact() -> EntitySchema {
    EntitySchema::new(EntityKind::Contact.as_str())
        .required("first_name", FieldType::Text { max_len: Some(NAME_LEN) })
        .required("last_name", FieldType::Text { max_len: Some(NAME_LEN) })
        .required("organization_mode", FieldType::Enum(RecordMode::VALUES))
        .optional("organization_id", FieldType::Uuid)
        .optional("organization_name", FieldType::Text { max_len: Some(NAME_LEN) })
        .optional("position", FieldType::Text { max_len: Some(PLACE_LEN) })
        .optional("email", FieldType::Email)
        .optional("phone", FieldType::Phone)
        .optional("address", FieldType::Text { max_len: Some(NAME_LEN) })
        .optional("city", FieldType::Text { max_len: Some(PLACE_LEN) })
        .optional("state", FieldType::Text { max_len: Some(PLACE_LEN) })
        .optional("postal_code", FieldType::Text { max_len: Some(20) })
        .optional("notes", FieldType::Text { max_len: Some(NOTES_LEN) })
        .optional("is_primary", FieldType::Boolean)
        .optional("tags", FieldType::StringArray)
        .mode_switch(organization_switch())
}

/// Schema for [`pantry_core::entities::Organization`].
#[must_use]
pub fn organization() -> EntitySchema {
    EntitySchema::new(EntityKind::Organization.as_str())
        .required("name", FieldType::Text { max_len: Some(NAME_LEN) })
        .required("organization_type", FieldType::Enum(OrganizationType::VALUES))
        .optional("priority", FieldType::Enum(Priority::VALUES))
        .optional("segment", FieldType::Text { max_len: Some(PLACE_LEN) })
        .optional("distributor_id", FieldType::Uuid)
        .optional("phone", FieldType::Phone)
        .optional("email", FieldType::Email)
        .optional("website", FieldType::Url)
        .optional("address", FieldType::Text { max_len: Some(NAME_LEN) })
        .optional("city", FieldType::Text { max_len: Some(PLACE_LEN) })
        .optional("state", FieldType::Text { max_len: Some(PLACE_LEN) })
        .optional("postal_code", FieldType::Text { max_len: Some(20) })
        .optional("notes", FieldType::Text { max_len: Some(NOTES_LEN) })
        .optional("is_active", FieldType::Boolean)
}

/// Schema for [`pantry_core::entities::Product`].
#[must_use]
pub fn product() -> EntitySchema {
    EntitySchema::new(EntityKind::Product.as_str())
        .required("name", FieldType::Text { max_len: Some(NAME_LEN) })
        .required("principal_mode", FieldType::Enum(RecordMode::VALUES))
        .optional("principal_id", FieldType::Uuid)
        .optional("principal_name", FieldType::Text { max_len: Some(NAME_LEN) })
        .optional("category", FieldType::Enum(ProductCategory::VALUES))
        .optional("sku", FieldType::Text { max_len: Some(64) })
        .optional("unit_cost", FieldType::Number { min: Some(0.0), max: None })
        .optional("description", FieldType::Text { max_len: Some(NOTES_LEN) })
        .mode_switch(principal_switch())
}

/// Schema for [`pantry_core::entities::Opportunity`].
#[must_use]
pub fn opportunity() -> EntitySchema {
    EntitySchema::new(EntityKind::Opportunity.as_str())
        .required("name", FieldType::Text { max_len: Some(NAME_LEN) })
        .required("organization_mode", FieldType::Enum(RecordMode::VALUES))
        .optional("organization_id", FieldType::Uuid)
        .optional("organization_name", FieldType::Text { max_len: Some(NAME_LEN) })
        .required("principal_mode", FieldType::Enum(RecordMode::VALUES))
        .optional("principal_id", FieldType::Uuid)
        .optional("principal_name", FieldType::Text { max_len: Some(NAME_LEN) })
        .optional("contact_id", FieldType::Uuid)
        .required("stage", FieldType::Enum(OpportunityStage::VALUES))
        .optional("probability", FieldType::Integer { min: Some(0), max: Some(100) })
        .optional("expected_close_date", FieldType::Date)
        .optional("product_ids", FieldType::UuidArray)
        .optional("notes", FieldType::Text { max_len: Some(NOTES_LEN) })
        .mode_switch(organization_switch())
        .mode_switch(principal_switch())
}

/// Schema for [`pantry_core::entities::Interaction`].
#[must_use]
pub fn interaction() -> EntitySchema {
    EntitySchema::new(EntityKind::Interaction.as_str())
        .required("interaction_type", FieldType::Enum(InteractionType::VALUES))
        .required("subject", FieldType::Text { max_len: Some(NAME_LEN) })
        .required("occurred_on", FieldType::Date)
        .optional("organization_id", FieldType::Uuid)
        .optional("contact_id", FieldType::Uuid)
        .optional("opportunity_id", FieldType::Uuid)
        .optional("duration_minutes", FieldType::Integer { min: Some(0), max: Some(1440) })
        .optional("follow_up_required", FieldType::Boolean)
        .optional("follow_up_date", FieldType::Date)
        .optional("notes", FieldType::Text { max_len: Some(NOTES_LEN) })
        .cross_rule(CrossRule::AtLeastOne {
            fields: &["organization_id", "contact_id", "opportunity_id"],
            report_on: "organization_id",
            message: "An interaction must reference an organization, contact, or opportunity",
        })
        .cross_rule(CrossRule::RequiredWhenTrue {
            gate: "follow_up_required",
            required: "follow_up_date",
            message: "Follow-up date is required when a follow-up is requested",
        })
}

/// All built-in schemas, in catalog order.
#[must_use]
pub fn all() -> Vec<EntitySchema> {
    vec![
        contact(),
        organization(),
        product(),
        opportunity(),
        interaction(),
    ]
}

fn organization_switch() -> ModeSwitch {
    ModeSwitch::new(
        "organization_mode",
        vec![
            ModeVariant::new(RecordMode::Existing.as_str()).requires(
                "organization_id",
                "Organization is required when linking an existing organization",
            ),
            ModeVariant::new(RecordMode::New.as_str()).requires(
                "organization_name",
                "Organization name is required when creating a new organization",
            ),
        ],
    )
}

fn principal_switch() -> ModeSwitch {
    ModeSwitch::new(
        "principal_mode",
        vec![
            ModeVariant::new(RecordMode::Existing.as_str()).requires(
                "principal_id",
                "Principal is required when linking an existing principal",
            ),
            ModeVariant::new(RecordMode::New.as_str()).requires(
                "principal_name",
                "Principal name is required when creating a new principal",
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineOptions, ErrorCode, validate};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn options() -> EngineOptions {
        EngineOptions::default()
    }

    fn paths(report: &crate::engine::ValidationReport) -> Vec<&str> {
        report.errors.iter().map(|e| e.path.as_str()).collect()
    }

    fn valid_contact() -> Value {
        json!({
            "first_name": "Maria",
            "last_name": "Santos",
            "organization_mode": "existing",
            "organization_id": "550e8400-e29b-41d4-a716-446655440000",
            "email": "maria.santos@harborfoods.example",
            "phone": "503-555-1234"
        })
    }

    #[test]
    fn catalog_covers_all_entity_kinds() {
        let names: Vec<&str> = all().iter().map(|s| s.name).collect();
        assert_eq!(names, EntityKind::VALUES);
    }

    #[test]
    fn contact_happy_path() {
        let report = validate(&contact(), &valid_contact(), &options());
        assert!(report.valid, "unexpected errors: {:?}", report.errors);
        assert_eq!(report.normalized["phone"], json!("5035551234"));
        assert_eq!(report.normalized["tags"], json!([]));
        assert_eq!(report.normalized["notes"], Value::Null);
    }

    #[rstest]
    #[case::new_mode_needs_name("new", true)]
    #[case::existing_mode_does_not("existing", false)]
    fn organization_name_gated_by_mode(#[case] mode: &str, #[case] expect_error: bool) {
        let raw = json!({
            "first_name": "Maria",
            "last_name": "Santos",
            "organization_mode": mode,
            "organization_id": "550e8400-e29b-41d4-a716-446655440000",
            "organization_name": ""
        });
        let report = validate(&contact(), &raw, &options());
        let on_name = report
            .errors
            .iter()
            .find(|e| e.path == "organization_name");
        if expect_error {
            let err = on_name.expect("organization_name error expected");
            assert_eq!(
                err.message,
                "Organization name is required when creating a new organization"
            );
        } else {
            assert!(on_name.is_none(), "unexpected error: {on_name:?}");
        }
    }

    #[test]
    fn organization_website_format_is_checked() {
        let raw = json!({
            "name": "Harbor Foods",
            "organization_type": "customer",
            "website": "harborfoods",
        });
        let report = validate(&organization(), &raw, &options());
        assert_eq!(paths(&report), ["website"]);
        assert_eq!(report.errors[0].code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn organization_rejects_unknown_type() {
        let raw = json!({"name": "Harbor Foods", "organization_type": "supplier"});
        let report = validate(&organization(), &raw, &options());
        assert_eq!(paths(&report), ["organization_type"]);
        assert_eq!(report.errors[0].code, ErrorCode::NotOneOf);
    }

    #[test]
    fn product_inline_principal_requires_name() {
        let raw = json!({
            "name": "Cold-Brew Concentrate 32oz",
            "principal_mode": "new"
        });
        let report = validate(&product(), &raw, &options());
        assert_eq!(paths(&report), ["principal_name"]);
    }

    #[test]
    fn product_unit_cost_must_be_non_negative() {
        let raw = json!({
            "name": "Cold-Brew Concentrate 32oz",
            "principal_mode": "existing",
            "principal_id": "550e8400-e29b-41d4-a716-446655440003",
            "unit_cost": -1.5
        });
        let report = validate(&product(), &raw, &options());
        assert_eq!(paths(&report), ["unit_cost"]);
        assert_eq!(report.errors[0].code, ErrorCode::OutOfRange);
    }

    #[test]
    fn opportunity_both_switches_apply_independently() {
        let raw = json!({
            "name": "Harbor Foods — cold brew line",
            "organization_mode": "new",
            "principal_mode": "existing",
            "stage": "new_lead"
        });
        let report = validate(&opportunity(), &raw, &options());
        assert_eq!(paths(&report), ["organization_name", "principal_id"]);
    }

    #[test]
    fn opportunity_probability_bounds() {
        let raw = json!({
            "name": "Harbor Foods — cold brew line",
            "organization_mode": "existing",
            "organization_id": "550e8400-e29b-41d4-a716-446655440000",
            "principal_mode": "existing",
            "principal_id": "550e8400-e29b-41d4-a716-446655440003",
            "stage": "awaiting_response",
            "probability": 120
        });
        let report = validate(&opportunity(), &raw, &options());
        assert_eq!(paths(&report), ["probability"]);
    }

    #[test]
    fn opportunity_product_ids_drop_invalid_entries() {
        let raw = json!({
            "name": "Harbor Foods — cold brew line",
            "organization_mode": "existing",
            "organization_id": "550e8400-e29b-41d4-a716-446655440000",
            "principal_mode": "existing",
            "principal_id": "550e8400-e29b-41d4-a716-446655440003",
            "stage": "new_lead",
            "product_ids": ["550e8400-e29b-41d4-a716-446655440005", "junk"]
        });
        let report = validate(&opportunity(), &raw, &options());
        assert!(report.valid, "unexpected errors: {:?}", report.errors);
        assert_eq!(
            report.normalized["product_ids"],
            json!(["550e8400-e29b-41d4-a716-446655440005"])
        );
    }

    #[test]
    fn interaction_needs_at_least_one_link() {
        let raw = json!({
            "interaction_type": "call",
            "subject": "Intro call",
            "occurred_on": "2026-08-01",
            "organization_id": null,
            "contact_id": null,
            "opportunity_id": null
        });
        let report = validate(&interaction(), &raw, &options());
        assert_eq!(paths(&report), ["organization_id"]);
        assert_eq!(report.errors[0].code, ErrorCode::MissingLink);
    }

    #[rstest]
    #[case::organization("organization_id")]
    #[case::contact("contact_id")]
    #[case::opportunity("opportunity_id")]
    fn any_single_link_satisfies_the_rule(#[case] link: &str) {
        let mut raw = json!({
            "interaction_type": "call",
            "subject": "Intro call",
            "occurred_on": "2026-08-01"
        });
        raw[link] = json!("550e8400-e29b-41d4-a716-446655440000");
        let report = validate(&interaction(), &raw, &options());
        assert!(report.valid, "unexpected errors: {:?}", report.errors);
    }

    #[test]
    fn malformed_link_uuid_normalizes_to_null_and_trips_the_rule() {
        let raw = json!({
            "interaction_type": "email",
            "subject": "Price sheet",
            "occurred_on": "2026-08-03",
            "organization_id": "not-a-uuid"
        });
        let report = validate(&interaction(), &raw, &options());
        assert_eq!(paths(&report), ["organization_id"]);
        assert_eq!(report.errors[0].code, ErrorCode::MissingLink);
        assert_eq!(report.normalized["organization_id"], Value::Null);
    }

    #[rstest]
    #[case::requested_and_missing(json!(true), Value::Null, true)]
    #[case::requested_and_present(json!(true), json!("2026-08-15"), false)]
    #[case::not_requested(json!(false), Value::Null, false)]
    fn follow_up_date_gated_by_flag(
        #[case] flag: Value,
        #[case] date: Value,
        #[case] expect_error: bool,
    ) {
        let raw = json!({
            "interaction_type": "demo",
            "subject": "Tasting",
            "occurred_on": "2026-08-01",
            "organization_id": "550e8400-e29b-41d4-a716-446655440000",
            "follow_up_required": flag,
            "follow_up_date": date
        });
        let report = validate(&interaction(), &raw, &options());
        assert_eq!(
            report.errors.iter().any(|e| e.path == "follow_up_date"),
            expect_error,
            "errors: {:?}",
            report.errors
        );
    }
}
