//! Record modes, entity kinds, and status enums for Pantry.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Each enum exposes `as_str()` plus a `VALUES` slice of wire names so the
//! schema layer can build membership rules without duplicating the literals.
//! `OpportunityStage` additionally provides `allowed_next_stages()` to enforce
//! valid transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// The five record kinds Pantry validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Contact,
    Organization,
    Product,
    Opportunity,
    Interaction,
}

impl EntityKind {
    /// Wire names of every entity kind, in catalog order.
    pub const VALUES: &'static [&'static str] = &[
        "contact",
        "organization",
        "product",
        "opportunity",
        "interaction",
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Organization => "organization",
            Self::Product => "product",
            Self::Opportunity => "opportunity",
            Self::Interaction => "interaction",
        }
    }

    /// Resolve a wire name to an entity kind.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::CoreError::UnknownEntity`] when `name` is not
    /// one of the five known kinds.
    pub fn from_name(name: &str) -> Result<Self, crate::errors::CoreError> {
        match name {
            "contact" => Ok(Self::Contact),
            "organization" => Ok(Self::Organization),
            "product" => Ok(Self::Product),
            "opportunity" => Ok(Self::Opportunity),
            "interaction" => Ok(Self::Interaction),
            other => Err(crate::errors::CoreError::UnknownEntity(other.to_string())),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RecordMode
// ---------------------------------------------------------------------------

/// Discriminant for reference-or-create form sections.
///
/// `existing` means the record points at an already-persisted row by id;
/// `new` means the sibling name fields describe a row to create inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecordMode {
    Existing,
    New,
}

impl RecordMode {
    pub const VALUES: &'static [&'static str] = &["existing", "new"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Existing => "existing",
            Self::New => "new",
        }
    }
}

impl fmt::Display for RecordMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OrganizationType
// ---------------------------------------------------------------------------

/// Role of an organization in the brokerage relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationType {
    Customer,
    Principal,
    Distributor,
    Prospect,
    Vendor,
}

impl OrganizationType {
    pub const VALUES: &'static [&'static str] =
        &["customer", "principal", "distributor", "prospect", "vendor"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Principal => "principal",
            Self::Distributor => "distributor",
            Self::Prospect => "prospect",
            Self::Vendor => "vendor",
        }
    }
}

impl fmt::Display for OrganizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Account priority band, A (highest) through D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    A,
    B,
    C,
    D,
}

impl Priority {
    pub const VALUES: &'static [&'static str] = &["a", "b", "c", "d"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProductCategory
// ---------------------------------------------------------------------------

/// Broad food-service category a product is brokered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Beverages,
    Dairy,
    Frozen,
    DryGoods,
    Snacks,
    MeatSeafood,
    Produce,
    Other,
}

impl ProductCategory {
    pub const VALUES: &'static [&'static str] = &[
        "beverages",
        "dairy",
        "frozen",
        "dry_goods",
        "snacks",
        "meat_seafood",
        "produce",
        "other",
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beverages => "beverages",
            Self::Dairy => "dairy",
            Self::Frozen => "frozen",
            Self::DryGoods => "dry_goods",
            Self::Snacks => "snacks",
            Self::MeatSeafood => "meat_seafood",
            Self::Produce => "produce",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OpportunityStage
// ---------------------------------------------------------------------------

/// Stage of an opportunity through the brokerage sales funnel.
///
/// ```text
/// new_lead → initial_outreach → sample_visit_offered → awaiting_response
///          → feedback_logged → demo_scheduled → closed_won
///                                             → closed_lost
/// ```
///
/// `closed_lost` is reachable from every open stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityStage {
    NewLead,
    InitialOutreach,
    SampleVisitOffered,
    AwaitingResponse,
    FeedbackLogged,
    DemoScheduled,
    ClosedWon,
    ClosedLost,
}

impl OpportunityStage {
    pub const VALUES: &'static [&'static str] = &[
        "new_lead",
        "initial_outreach",
        "sample_visit_offered",
        "awaiting_response",
        "feedback_logged",
        "demo_scheduled",
        "closed_won",
        "closed_lost",
    ];

    /// Valid next stages from the current stage.
    #[must_use]
    pub const fn allowed_next_stages(self) -> &'static [Self] {
        match self {
            Self::NewLead => &[Self::InitialOutreach, Self::ClosedLost],
            Self::InitialOutreach => &[Self::SampleVisitOffered, Self::ClosedLost],
            Self::SampleVisitOffered => &[Self::AwaitingResponse, Self::ClosedLost],
            Self::AwaitingResponse => &[Self::FeedbackLogged, Self::ClosedLost],
            Self::FeedbackLogged => &[Self::DemoScheduled, Self::ClosedLost],
            Self::DemoScheduled => &[Self::ClosedWon, Self::ClosedLost],
            Self::ClosedWon | Self::ClosedLost => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_stages().contains(&next)
    }

    /// Transition to `next`, or report why that is not allowed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::CoreError::InvalidTransition`] when `next` is
    /// not reachable from the current stage.
    pub fn transition_to(self, next: Self) -> Result<Self, crate::errors::CoreError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(crate::errors::CoreError::InvalidTransition {
                entity: "opportunity".to_string(),
                from: self.as_str().to_string(),
                to: next.as_str().to_string(),
            })
        }
    }

    /// Default win probability (percent) assumed for the stage.
    #[must_use]
    pub const fn default_probability(self) -> u8 {
        match self {
            Self::NewLead => 5,
            Self::InitialOutreach => 10,
            Self::SampleVisitOffered => 25,
            Self::AwaitingResponse => 40,
            Self::FeedbackLogged => 60,
            Self::DemoScheduled => 80,
            Self::ClosedWon => 100,
            Self::ClosedLost => 0,
        }
    }

    /// Whether the stage is terminal.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::ClosedWon | Self::ClosedLost)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewLead => "new_lead",
            Self::InitialOutreach => "initial_outreach",
            Self::SampleVisitOffered => "sample_visit_offered",
            Self::AwaitingResponse => "awaiting_response",
            Self::FeedbackLogged => "feedback_logged",
            Self::DemoScheduled => "demo_scheduled",
            Self::ClosedWon => "closed_won",
            Self::ClosedLost => "closed_lost",
        }
    }
}

impl fmt::Display for OpportunityStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// InteractionType
// ---------------------------------------------------------------------------

/// Channel of a logged interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    Call,
    Email,
    InPerson,
    Demo,
    Quote,
    FollowUp,
}

impl InteractionType {
    pub const VALUES: &'static [&'static str] =
        &["call", "email", "in_person", "demo", "quote", "follow_up"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Email => "email",
            Self::InPerson => "in_person",
            Self::Demo => "demo",
            Self::Quote => "quote",
            Self::FollowUp => "follow_up",
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CoreError;

    #[test]
    fn entity_kind_from_name_roundtrips() {
        for name in EntityKind::VALUES {
            let kind = EntityKind::from_name(name).unwrap();
            assert_eq!(kind.as_str(), *name);
        }
    }

    #[test]
    fn entity_kind_from_name_rejects_unknown() {
        let err = EntityKind::from_name("supplier").unwrap_err();
        assert!(matches!(err, CoreError::UnknownEntity(name) if name == "supplier"));
    }

    #[test]
    fn enums_serialize_to_wire_names() {
        assert_eq!(
            serde_json::to_value(RecordMode::Existing).unwrap(),
            serde_json::json!("existing")
        );
        assert_eq!(
            serde_json::to_value(OpportunityStage::SampleVisitOffered).unwrap(),
            serde_json::json!("sample_visit_offered")
        );
        assert_eq!(
            serde_json::to_value(InteractionType::InPerson).unwrap(),
            serde_json::json!("in_person")
        );
        assert_eq!(
            serde_json::to_value(ProductCategory::MeatSeafood).unwrap(),
            serde_json::json!("meat_seafood")
        );
    }

    #[test]
    fn values_slices_match_serde() {
        for (stage, name) in [
            (OpportunityStage::NewLead, "new_lead"),
            (OpportunityStage::ClosedWon, "closed_won"),
        ] {
            assert_eq!(serde_json::to_value(stage).unwrap(), name);
            assert!(OpportunityStage::VALUES.contains(&name));
        }
    }

    #[test]
    fn stage_machine_happy_path() {
        let mut stage = OpportunityStage::NewLead;
        for next in [
            OpportunityStage::InitialOutreach,
            OpportunityStage::SampleVisitOffered,
            OpportunityStage::AwaitingResponse,
            OpportunityStage::FeedbackLogged,
            OpportunityStage::DemoScheduled,
            OpportunityStage::ClosedWon,
        ] {
            stage = stage.transition_to(next).unwrap();
        }
        assert!(stage.is_closed());
        assert_eq!(stage.default_probability(), 100);
    }

    #[test]
    fn closed_lost_reachable_from_every_open_stage() {
        for stage in [
            OpportunityStage::NewLead,
            OpportunityStage::InitialOutreach,
            OpportunityStage::SampleVisitOffered,
            OpportunityStage::AwaitingResponse,
            OpportunityStage::FeedbackLogged,
            OpportunityStage::DemoScheduled,
        ] {
            assert!(stage.can_transition_to(OpportunityStage::ClosedLost));
        }
    }

    #[test]
    fn closed_stages_are_terminal() {
        let err = OpportunityStage::ClosedWon
            .transition_to(OpportunityStage::NewLead)
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));
        assert!(OpportunityStage::ClosedLost.allowed_next_stages().is_empty());
    }

    #[test]
    fn skipping_stages_is_rejected() {
        assert!(!OpportunityStage::NewLead.can_transition_to(OpportunityStage::DemoScheduled));
    }
}
