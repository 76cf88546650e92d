//! # pantry-core
//!
//! Core types and error types for Pantry, the validation and normalization
//! layer of a food-brokerage CRM.
//!
//! This crate provides the foundational types shared across all Pantry crates:
//! - Record structs for the five CRM entities (contacts, organizations,
//!   products, opportunities, interactions)
//! - Mode, type, priority, and stage enums with wire names
//! - The opportunity stage state machine
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
