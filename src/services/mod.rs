//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `catalog.rs` — ordered product/price catalog, currency parsing, TOML overrides.
//! - `ingest.rs` — CSV reading, column validation, Group forward-fill.
//! - `reconstruct.rs` — flat rows -> per-(building, unit) room-segment bundles.
//! - `assemble.rs` — bundles + catalog -> priced per-building report documents.
//! - `storage.rs` — report persistence, file naming, audit log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod assemble;
pub mod catalog;
pub mod ingest;
pub mod output;
pub mod reconstruct;
pub mod storage;
