use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{OpportunityStage, RecordMode};

/// A potential sale of a principal's products into a customer account.
///
/// The multi-step opportunity form can create the organization and the
/// principal inline, so both references carry their own mode discriminant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Opportunity {
    pub name: String,
    pub organization_mode: RecordMode,
    pub organization_id: Option<Uuid>,
    pub organization_name: Option<String>,
    pub principal_mode: RecordMode,
    pub principal_id: Option<Uuid>,
    pub principal_name: Option<String>,
    pub contact_id: Option<Uuid>,
    pub stage: OpportunityStage,
    /// Win probability in percent. When absent, callers may fall back to
    /// [`OpportunityStage::default_probability`].
    pub probability: Option<u8>,
    pub expected_close_date: Option<NaiveDate>,
    #[serde(default)]
    pub product_ids: Vec<Uuid>,
    pub notes: Option<String>,
}
