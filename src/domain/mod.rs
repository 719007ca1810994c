//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep row/bundle/report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — rows, unit bundles, warnings, report/output structs.
//! - `constants.rs` — compiled-in default catalog and ignorable item list.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.

pub mod constants;
pub mod models;
