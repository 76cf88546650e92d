//! Record structs for the five Pantry CRM entities.
//!
//! These model validated form submissions, not persisted rows: optional
//! descriptive fields are `None` when the user left them empty, arrays
//! default to empty, and there are no storage-assigned timestamps. All
//! structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod contact;
mod interaction;
mod opportunity;
mod organization;
mod product;

pub use contact::Contact;
pub use interaction::Interaction;
pub use opportunity::Opportunity;
pub use organization::Organization;
pub use product::Product;
