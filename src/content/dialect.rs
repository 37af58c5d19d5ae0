//! Dialect override tables.
//!
//! A table maps canonical word strings to per-field overrides. A missing
//! entry means the canonical record passes through unchanged; a missing
//! field keeps the canonical value.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::WordRecord;

/// Override table for one dialect, keyed by canonical word.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialectTable {
    #[serde(default)]
    pub overrides: HashMap<String, DialectOverride>,
}

/// Per-word dialect override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialectOverride {
    /// Alternate spelling shown in place of the canonical word
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation_guide: Option<String>,
    /// Replacement distractor list (baked against the alternate spelling)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distractors: Option<Vec<String>>,
}

impl DialectOverride {
    /// Produce the dialect view of a canonical record. The input is never
    /// mutated; dialect switches must round-trip exactly.
    pub fn apply(&self, record: &WordRecord) -> WordRecord {
        let mut view = record.clone();
        if let Some(spelling) = &self.spelling {
            view.word = spelling.clone();
        }
        if let Some(guide) = &self.pronunciation_guide {
            view.pronunciation_guide = guide.clone();
        }
        if let Some(distractors) = &self.distractors {
            view.distractors = distractors.clone();
        }
        view
    }
}
