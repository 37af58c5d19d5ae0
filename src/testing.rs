//! Test utilities: an in-memory word source with sample data.
//!
//! Provides fixtures that exercise the full registry surface (tiers,
//! packs, dialect overrides) without touching the filesystem.

use std::collections::HashMap;

use crate::content::dialect::{DialectOverride, DialectTable};
use crate::content::source::{SourceError, WordSource};
use crate::domain::{Dialect, PartOfSpeech, WordRecord};

/// In-memory [`WordSource`] backed by hash maps. Anything absent from the
/// maps behaves as an unavailable source, which makes failure paths easy
/// to drive in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pub tiers: HashMap<u8, Vec<WordRecord>>,
    pub packs: HashMap<String, Vec<WordRecord>>,
    pub dialects: HashMap<Dialect, DialectTable>,
}

impl WordSource for StaticSource {
    async fn fetch_tier(&self, tier: u8) -> Result<Vec<WordRecord>, SourceError> {
        self.tiers
            .get(&tier)
            .cloned()
            .ok_or_else(|| SourceError::Unavailable(format!("tier {}", tier)))
    }

    async fn fetch_pack(&self, pack_id: &str) -> Result<Vec<WordRecord>, SourceError> {
        self.packs
            .get(pack_id)
            .cloned()
            .ok_or_else(|| SourceError::Unavailable(format!("pack '{}'", pack_id)))
    }

    async fn fetch_dialect(&self, dialect: Dialect) -> Result<DialectTable, SourceError> {
        self.dialects
            .get(&dialect)
            .cloned()
            .ok_or_else(|| SourceError::Unavailable(format!("dialect {}", dialect)))
    }
}

/// Minimal word record for tests; metadata fields carry placeholders.
pub fn record(word: &str, difficulty: u8, pattern: &str) -> WordRecord {
    WordRecord {
        word: word.to_string(),
        definition: format!("Definition of {}", word),
        example_sentence: format!("Use {} in a sentence.", word),
        pronunciation_guide: word.to_uppercase(),
        part_of_speech: PartOfSpeech::Noun,
        difficulty,
        pattern: pattern.to_string(),
        secondary_patterns: Vec::new(),
        theme: None,
        lists: Vec::new(),
        etymology: None,
        distractors: Vec::new(),
    }
}

/// Two tiers, one pack, and an en-GB override table.
///
/// Tier 1 holds easy themed words including "harbor" (which the en-GB
/// table respells); tier 2 holds harder words including "separate" with a
/// full baked distractor set.
pub fn sample_source() -> StaticSource {
    let mut source = StaticSource::default();

    let mut cat = record("cat", 1, "cvc");
    cat.theme = Some("animals".to_string());

    let mut dog = record("dog", 1, "cvc");
    dog.theme = Some("animals".to_string());

    let mut ship = record("ship", 2, "digraph-sh");
    ship.theme = Some("transport".to_string());

    let mut harbor = record("harbor", 2, "r-controlled");
    harbor.theme = Some("transport".to_string());
    harbor.distractors = vec!["harber".into(), "harbur".into(), "harbore".into()];

    source.tiers.insert(1, vec![cat, dog, ship, harbor]);

    let mut separate = record("separate", 4, "schwa");
    separate.secondary_patterns = vec!["suffix-ate".to_string()];
    separate.theme = Some("school".to_string());
    separate.lists = vec!["regional-2019".to_string()];
    separate.etymology = Some("Latin separatus".to_string());
    separate.distractors = vec!["seperate".into(), "separete".into(), "separat".into()];

    let mut believe = record("believe", 4, "ie-ei");
    believe.theme = Some("school".to_string());
    believe.etymology = Some("Old English belefan".to_string());
    believe.distractors = vec!["beleive".into(), "believ".into(), "beleave".into()];

    let mut necessary = record("necessary", 5, "double-consonant");
    necessary.etymology = Some("Latin necessarius".to_string());

    source.tiers.insert(2, vec![separate, believe, necessary]);

    let mut champion = record("onomatopoeia", 9, "vowel-team");
    champion.lists = vec!["nationals-2019".to_string()];
    source
        .packs
        .insert("nationals".to_string(), vec![champion]);

    let mut en_gb = DialectTable::default();
    en_gb.overrides.insert(
        "harbor".to_string(),
        DialectOverride {
            spelling: Some("harbour".to_string()),
            pronunciation_guide: Some("HAH-buh".to_string()),
            distractors: Some(vec!["harbor".into(), "harbuor".into(), "harbore".into()]),
        },
    );
    source.dialects.insert(Dialect::EnGb, en_gb);

    source
}
