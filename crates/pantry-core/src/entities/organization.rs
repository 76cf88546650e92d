use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{OrganizationType, Priority};

/// A customer, principal, distributor, prospect, or vendor account.
///
/// `distributor_id` records which distributor services a customer account;
/// it is format-checked only, never resolved against storage here.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Organization {
    pub name: String,
    pub organization_type: OrganizationType,
    pub priority: Option<Priority>,
    pub segment: Option<String>,
    pub distributor_id: Option<Uuid>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub notes: Option<String>,
    pub is_active: Option<bool>,
}
