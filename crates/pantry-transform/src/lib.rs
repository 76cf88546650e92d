//! # pantry-transform
//!
//! Pure normalization functions applied to raw form input before validation.
//!
//! Every function here is total over [`serde_json::Value`]: it always returns
//! a value, never panics, and has no side effects. Malformed input normalizes
//! to the canonical empty value (`Null`, or `[]` for arrays) instead of
//! erroring; only the downstream check stage decides whether an empty value is
//! acceptable. Each function is idempotent on its own output, so running the
//! pipeline twice is a no-op.

pub mod collection;
pub mod ident;
pub mod scalar;
pub mod string;
pub mod temporal;

pub use collection::{string_array, uuid_array};
pub use ident::uuid;
pub use scalar::{boolean, integer, number};
pub use string::{email, phone, text, url};
pub use temporal::date;
