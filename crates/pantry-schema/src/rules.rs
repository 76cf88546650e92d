//! Conditional rules: mode-gated requiredness and cross-field constraints.
//!
//! Mode gating is expressed as exhaustive tagged variants rather than
//! per-field conditionals: a [`ModeSwitch`] names its discriminant field and
//! one [`ModeVariant`] per tag, each carrying the complete set of siblings
//! that tag makes required. The normalized discriminant value selects exactly
//! one variant per validation pass.

/// A sibling made required by a mode variant, with the message reported when
/// it is missing.
#[derive(Debug, Clone)]
pub struct RequiredField {
    pub field: &'static str,
    pub message: &'static str,
}

/// One branch of a mode switch: the discriminant tag and the siblings it
/// requires.
#[derive(Debug, Clone)]
pub struct ModeVariant {
    pub tag: &'static str,
    pub requires: Vec<RequiredField>,
}

impl ModeVariant {
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            requires: Vec::new(),
        }
    }

    #[must_use]
    pub fn requires(mut self, field: &'static str, message: &'static str) -> Self {
        self.requires.push(RequiredField { field, message });
        self
    }
}

/// A discriminant field and its variants.
///
/// The discriminant itself is declared as a required `Enum` field on the
/// entity schema; an unrecognized tag therefore surfaces as a membership
/// error on the discriminant and no variant is applied.
#[derive(Debug, Clone)]
pub struct ModeSwitch {
    pub field: &'static str,
    pub variants: Vec<ModeVariant>,
}

impl ModeSwitch {
    #[must_use]
    pub fn new(field: &'static str, variants: Vec<ModeVariant>) -> Self {
        Self { field, variants }
    }

    /// The variant selected by a discriminant tag, if the tag is known.
    #[must_use]
    pub fn variant_for(&self, tag: &str) -> Option<&ModeVariant> {
        self.variants.iter().find(|v| v.tag == tag)
    }
}

/// A constraint spanning more than one field.
#[derive(Debug, Clone)]
pub enum CrossRule {
    /// At least one of `fields` must be non-null. The error is reported once,
    /// on `report_on`.
    AtLeastOne {
        fields: &'static [&'static str],
        report_on: &'static str,
        message: &'static str,
    },
    /// `required` must be non-null whenever the boolean `gate` is true.
    RequiredWhenTrue {
        gate: &'static str,
        required: &'static str,
        message: &'static str,
    },
}
