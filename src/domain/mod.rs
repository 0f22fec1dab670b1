//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep entity, fact, and report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — entities, entity store, report rows, run phases.
//! - `constants.rs` — policy class tags and fixed field values.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.

pub mod constants;
pub mod models;
