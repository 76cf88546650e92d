use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::RecordMode;

/// A person at a customer, principal, or distributor organization.
///
/// `organization_mode` selects how the organization reference is supplied:
/// `existing` requires `organization_id`, `new` requires `organization_name`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub organization_mode: RecordMode,
    pub organization_id: Option<Uuid>,
    pub organization_name: Option<String>,
    pub position: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub notes: Option<String>,
    pub is_primary: Option<bool>,
    #[serde(default)]
    pub tags: Vec<String>,
}
