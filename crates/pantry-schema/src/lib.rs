//! # pantry-schema
//!
//! Schema representation, conditional validation engine, and registry for
//! Pantry.
//!
//! This crate provides:
//! - `FieldSpec`/`FieldType`: per-field normalization and check declarations
//! - `ModeSwitch`: mode-gated requiredness as exhaustive tagged variants
//! - `CrossRule`: multi-field constraints (at-least-one, boolean gates)
//! - The two-stage engine: a pure `normalize` pass followed by a pure
//!   `check` pass, composed by `validate`
//! - `catalog`: the built-in schemas for the five CRM record kinds
//! - `SchemaRegistry`: central store with lookup and validation by name
//! - `export`: rendering the internal representation as JSON Schema
//!
//! ## Architecture
//!
//! The internal representation is the single source of truth. External schema
//! languages (JSON Schema today) are adapters over it, so swapping or adding
//! one never touches call sites. Record types live in `pantry-core`; the
//! transforms applied during the normalize pass live in `pantry-transform`.

pub mod catalog;
pub mod engine;
pub mod entity;
pub mod error;
pub mod export;
pub mod field;
pub mod registry;
pub mod rules;

pub use engine::{EngineOptions, ErrorCode, FieldError, Normalized, ValidationReport};
pub use entity::EntitySchema;
pub use error::SchemaError;
pub use field::{FieldSpec, FieldType};
pub use registry::SchemaRegistry;
pub use rules::{CrossRule, ModeSwitch, ModeVariant, RequiredField};
