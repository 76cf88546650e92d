//! Cross-cutting error types for Pantry.
//!
//! This module defines errors that can originate from any crate in the
//! workspace. Domain-specific errors (e.g., `SchemaError`, `ResolverError`)
//! are defined in their respective crates and converge at the CLI boundary.

use thiserror::Error;

/// Errors that can be raised by any Pantry crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A name did not match any of the five known entity kinds.
    #[error("Unknown entity kind: {0}")]
    UnknownEntity(String),

    /// A stage transition was attempted that is not allowed.
    #[error("Invalid stage transition: {entity} from {from} to {to}")]
    InvalidTransition {
        entity: String,
        from: String,
        to: String,
    },

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
