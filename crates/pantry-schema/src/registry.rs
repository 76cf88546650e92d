//! Central schema registry for all Pantry record kinds.
//!
//! The `SchemaRegistry` builds the catalog schemas at construction time and
//! provides lookup and validation by entity name.

use std::collections::HashMap;

use serde_json::Value;

use crate::catalog;
use crate::engine::{self, EngineOptions, ValidationReport};
use crate::entity::EntitySchema;
use crate::error::SchemaError;

/// Central store of all entity schemas in the Pantry system.
///
/// Built from the [`catalog`] definitions. Provides lookup by name and
/// validation of arbitrary JSON values against registered schemas.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, EntitySchema>,
    options: EngineOptions,
}

impl SchemaRegistry {
    /// Build a registry containing the five built-in entity schemas with
    /// default engine options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    /// Build a registry that validates with the supplied engine options.
    #[must_use]
    pub fn with_options(options: EngineOptions) -> Self {
        let schemas = catalog::all()
            .into_iter()
            .map(|schema| (schema.name, schema))
            .collect();
        Self { schemas, options }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EntitySchema> {
        self.schemas.get(name)
    }

    /// The engine options this registry validates with.
    #[must_use]
    pub const fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Validate a JSON value against a named schema.
    ///
    /// A failed validation is a successful call: the report carries the full
    /// error list.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown.
    pub fn validate(&self, name: &str, raw: &Value) -> Result<ValidationReport, SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;
        Ok(engine::validate(schema, raw, &self.options))
    }

    /// List all registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
