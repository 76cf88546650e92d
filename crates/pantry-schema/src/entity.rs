//! Entity schema: the ordered field list plus conditional rules for one
//! record kind.

use crate::field::{FieldSpec, FieldType};
use crate::rules::{CrossRule, ModeSwitch};

/// Validation schema for one entity kind.
///
/// Fields are kept in declaration order; errors are reported in that order so
/// output is deterministic.
#[derive(Debug, Clone)]
pub struct EntitySchema {
    pub name: &'static str,
    pub fields: Vec<FieldSpec>,
    pub mode_switches: Vec<ModeSwitch>,
    pub cross_rules: Vec<CrossRule>,
}

impl EntitySchema {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
            mode_switches: Vec::new(),
            cross_rules: Vec::new(),
        }
    }

    /// Declare a field whose `Null` normalized value is always an error.
    #[must_use]
    pub fn required(mut self, name: &'static str, ty: FieldType) -> Self {
        self.fields.push(FieldSpec {
            name,
            ty,
            required: true,
        });
        self
    }

    /// Declare a field that may normalize to `Null` (unless a mode variant or
    /// cross rule demands it).
    #[must_use]
    pub fn optional(mut self, name: &'static str, ty: FieldType) -> Self {
        self.fields.push(FieldSpec {
            name,
            ty,
            required: false,
        });
        self
    }

    #[must_use]
    pub fn mode_switch(mut self, switch: ModeSwitch) -> Self {
        self.mode_switches.push(switch);
        self
    }

    #[must_use]
    pub fn cross_rule(mut self, rule: CrossRule) -> Self {
        self.cross_rules.push(rule);
        self
    }

    /// Look up a field spec by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
