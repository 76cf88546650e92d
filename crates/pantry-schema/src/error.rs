//! Schema lookup error types.

use thiserror::Error;

/// Errors from the schema registry.
///
/// A failed validation is not an error: the engine always completes and
/// returns a [`crate::ValidationReport`] carrying the full error list.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),
}
