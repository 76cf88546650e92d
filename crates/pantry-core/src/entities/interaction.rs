use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::InteractionType;

/// A logged touchpoint: call, email, visit, demo, quote, or follow-up.
///
/// At least one of `organization_id`, `contact_id`, `opportunity_id` must be
/// set so the interaction is attached to something; the validation layer
/// reports a missing link on `organization_id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Interaction {
    pub interaction_type: InteractionType,
    pub subject: String,
    pub occurred_on: NaiveDate,
    pub organization_id: Option<Uuid>,
    pub contact_id: Option<Uuid>,
    pub opportunity_id: Option<Uuid>,
    pub duration_minutes: Option<i64>,
    pub follow_up_required: Option<bool>,
    pub follow_up_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
