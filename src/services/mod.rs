//! Service layer containing the analysis pipeline and side-effect helpers.
//!
//! ## Service map
//! - `archive.rs` — materializes the gzip tar backup into named byte blobs.
//! - `classifier.rs` — routes decoded documents by their policy root key.
//! - `walker.rs` — recursive class-tag dispatch over policy trees.
//! - `resolver.rs` — VLAN namespace reference parsing.
//! - `aggregator.rs` — flattens entities and facts into report rows.
//! - `report.rs` — CSV report writing.
//! - `diagnostics.rs` — append-only analysis trail.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Recoverable conditions become diagnostics, never panics.

pub mod aggregator;
pub mod archive;
pub mod classifier;
pub mod diagnostics;
pub mod report;
pub mod resolver;
pub mod walker;
