//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `analyse.rs` — the archive → classify → walk → aggregate pipeline.
//!
//! ## Principles
//! - Thread the entity store and diagnostic sink through explicitly.
//! - Delegate the actual work to `services/*`.
//! - Keep behavior and output schema stable.

pub mod analyse;

pub use analyse::run_analysis;
