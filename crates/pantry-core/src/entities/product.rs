use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{ProductCategory, RecordMode};

/// A product line brokered on behalf of a principal.
///
/// `principal_mode` selects how the principal is supplied: `existing`
/// requires `principal_id`, `new` requires `principal_name`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Product {
    pub name: String,
    pub principal_mode: RecordMode,
    pub principal_id: Option<Uuid>,
    pub principal_name: Option<String>,
    pub category: Option<ProductCategory>,
    pub sku: Option<String>,
    pub unit_cost: Option<f64>,
    pub description: Option<String>,
}
