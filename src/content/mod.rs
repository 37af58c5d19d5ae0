//! Word content system: tier/pack file handling and word sources.
//!
//! This module provides infrastructure for:
//! - **Pack files**: the JSON containers tiers and named packs ship in
//! - **Sources**: where the registry fetches tiers, packs, and dialect
//!   override tables from
//! - **Dialect tables**: per-word regional spelling overrides
//!
//! # Data Layout
//!
//! - Tiers: `{data_dir}/tier{n}.json`
//! - Named packs: `{data_dir}/packs/{id}.json`
//! - Dialect tables: `{data_dir}/dialects/{tag}.json`

pub mod dialect;
pub mod packs;
pub mod source;

pub use dialect::{DialectOverride, DialectTable};
pub use packs::{PackLoadError, PackSaveError, WordPackData, load_pack_file, save_pack_file};
pub use source::{JsonFileSource, SourceError, WordSource};
