//! In-memory word registry: progressive tier/pack loading, dialect
//! overlay, and O(1) indexed lookup.
//!
//! The registry is the single owner of the loaded word set. Loads and
//! dialect switches take `&mut self`; reads go through version-keyed
//! index cells that rebuild lazily after any mutation. One registry is
//! created per process and never torn down.

pub mod cache;

use std::collections::{HashMap, HashSet};

use crate::content::dialect::DialectTable;
use crate::content::source::WordSource;
use crate::domain::{Dialect, WordRecord};

use cache::IndexCell;

/// Result of one tier or pack load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Number of new words merged
    pub added: usize,
    /// Number of words skipped (canonical spelling already loaded)
    pub skipped: usize,
}

pub struct WordRegistry<S: WordSource> {
    source: S,

    /// Canonical records in load order; append-only
    canonical: Vec<WordRecord>,
    canonical_keys: HashSet<String>,
    loaded_tiers: HashSet<u8>,
    loaded_packs: HashSet<String>,

    dialect: Dialect,
    /// Override tables fetched so far, kept across switches
    dialect_tables: HashMap<Dialect, DialectTable>,
    /// Active view: canonical records, dialect-transformed where an
    /// override exists. Same length as `canonical` always.
    active: Vec<WordRecord>,
    /// Alternate spelling -> canonical key, for the active dialect
    reverse: HashMap<String, String>,

    version: u64,
    by_word: IndexCell<HashMap<String, usize>>,
    by_pattern: IndexCell<HashMap<String, Vec<usize>>>,
    by_theme: IndexCell<HashMap<String, Vec<usize>>>,
    by_list: IndexCell<HashMap<String, Vec<usize>>>,
}

impl<S: WordSource> WordRegistry<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            canonical: Vec::new(),
            canonical_keys: HashSet::new(),
            loaded_tiers: HashSet::new(),
            loaded_packs: HashSet::new(),
            dialect: Dialect::default(),
            dialect_tables: HashMap::new(),
            active: Vec::new(),
            reverse: HashMap::new(),
            version: 1,
            by_word: IndexCell::new(),
            by_pattern: IndexCell::new(),
            by_theme: IndexCell::new(),
            by_list: IndexCell::new(),
        }
    }

    // ==================== Loading ====================

    /// Load a difficulty tier. Idempotent: a tier that already loaded is a
    /// no-op (no version bump). An unavailable source is logged and
    /// tolerated; the tier stays not-yet-loaded.
    pub async fn load_tier(&mut self, tier: u8) -> LoadOutcome {
        if self.loaded_tiers.contains(&tier) {
            tracing::debug!("tier {} already loaded", tier);
            return LoadOutcome::default();
        }

        match self.source.fetch_tier(tier).await {
            Ok(records) => {
                let outcome = self.merge(records);
                self.loaded_tiers.insert(tier);
                tracing::info!(
                    "loaded tier {}: {} words added, {} skipped",
                    tier,
                    outcome.added,
                    outcome.skipped
                );
                outcome
            }
            Err(e) => {
                tracing::warn!("tier {} unavailable: {}", tier, e);
                LoadOutcome::default()
            }
        }
    }

    /// Load an optional named pack. Same contract as [`load_tier`].
    ///
    /// [`load_tier`]: WordRegistry::load_tier
    pub async fn load_pack(&mut self, pack_id: &str) -> LoadOutcome {
        if self.loaded_packs.contains(pack_id) {
            tracing::debug!("pack '{}' already loaded", pack_id);
            return LoadOutcome::default();
        }

        match self.source.fetch_pack(pack_id).await {
            Ok(records) => {
                let outcome = self.merge(records);
                self.loaded_packs.insert(pack_id.to_string());
                tracing::info!(
                    "loaded pack '{}': {} words added, {} skipped",
                    pack_id,
                    outcome.added,
                    outcome.skipped
                );
                outcome
            }
            Err(e) => {
                tracing::warn!("pack '{}' unavailable: {}", pack_id, e);
                LoadOutcome::default()
            }
        }
    }

    fn merge(&mut self, records: Vec<WordRecord>) -> LoadOutcome {
        let mut outcome = LoadOutcome::default();

        for record in records {
            if self.canonical_keys.contains(&record.word) {
                outcome.skipped += 1;
                continue;
            }
            self.canonical_keys.insert(record.word.clone());
            self.canonical.push(record);
            outcome.added += 1;
        }

        if outcome.added > 0 {
            self.rebuild_active();
        }
        outcome
    }

    // ==================== Dialect ====================

    /// Switch the active dialect. No-op when already active. The override
    /// table is fetched lazily on first use of a non-default dialect; if
    /// that fetch fails the switch is abandoned and the current dialect
    /// stays active.
    pub async fn set_dialect(&mut self, target: Dialect) {
        if target == self.dialect {
            return;
        }

        if target != Dialect::default() && !self.dialect_tables.contains_key(&target) {
            match self.source.fetch_dialect(target).await {
                Ok(table) => {
                    self.dialect_tables.insert(target, table);
                }
                Err(e) => {
                    tracing::warn!("dialect {} unavailable: {}", target, e);
                    return;
                }
            }
        }

        self.dialect = target;
        self.rebuild_active();
        tracing::info!("dialect switched to {} ({} words)", target, self.active.len());
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Resolve a UI-facing spelling back to its canonical key.
    pub fn canonical_key(&self, spelling: &str) -> Option<String> {
        let key = spelling.to_lowercase();
        if let Some(canonical) = self.reverse.get(&key) {
            return Some(canonical.clone());
        }
        if self.canonical_keys.contains(&key) {
            return Some(key);
        }
        None
    }

    /// Rebuild the active view for the current dialect and bump the
    /// version, invalidating every index.
    fn rebuild_active(&mut self) {
        let table = self.dialect_tables.get(&self.dialect);

        let mut active = Vec::with_capacity(self.canonical.len());
        let mut reverse = HashMap::new();

        for record in &self.canonical {
            match table.and_then(|t| t.overrides.get(&record.word)) {
                Some(over) => {
                    let view = over.apply(record);
                    if view.word != record.word {
                        reverse.insert(view.word.clone(), record.word.clone());
                    }
                    active.push(view);
                }
                None => active.push(record.clone()),
            }
        }

        self.active = active;
        self.reverse = reverse;
        self.version += 1;
    }

    // ==================== Reads ====================

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// All records in the active (dialect-transformed) view.
    pub fn records(&self) -> &[WordRecord] {
        &self.active
    }

    pub fn get_by_word(&self, word: &str) -> Option<WordRecord> {
        let key = word.to_lowercase();
        self.by_word.with(
            self.version,
            || build_word_index(&self.active),
            |index| index.get(&key).map(|&i| self.active[i].clone()),
        )
    }

    /// Records tagged with a phonics pattern (primary or secondary).
    /// Unknown patterns yield an empty list.
    pub fn get_by_pattern(&self, pattern: &str) -> Vec<WordRecord> {
        let key = pattern.to_lowercase();
        self.by_pattern.with(
            self.version,
            || build_pattern_index(&self.active),
            |index| self.collect(index.get(&key)),
        )
    }

    pub fn get_by_theme(&self, theme: &str) -> Vec<WordRecord> {
        let key = theme.to_lowercase();
        self.by_theme.with(
            self.version,
            || build_theme_index(&self.active),
            |index| self.collect(index.get(&key)),
        )
    }

    pub fn get_by_list(&self, list: &str) -> Vec<WordRecord> {
        let key = list.to_lowercase();
        self.by_list.with(
            self.version,
            || build_list_index(&self.active),
            |index| self.collect(index.get(&key)),
        )
    }

    fn collect(&self, ids: Option<&Vec<usize>>) -> Vec<WordRecord> {
        ids.map(|ids| ids.iter().map(|&i| self.active[i].clone()).collect())
            .unwrap_or_default()
    }
}

// ==================== Index builders ====================

fn build_word_index(records: &[WordRecord]) -> HashMap<String, usize> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| (r.word.clone(), i))
        .collect()
}

fn build_pattern_index(records: &[WordRecord]) -> HashMap<String, Vec<usize>> {
    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, record) in records.iter().enumerate() {
        index.entry(record.pattern.to_lowercase()).or_default().push(i);
        for pattern in &record.secondary_patterns {
            index.entry(pattern.to_lowercase()).or_default().push(i);
        }
    }
    index
}

fn build_theme_index(records: &[WordRecord]) -> HashMap<String, Vec<usize>> {
    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, record) in records.iter().enumerate() {
        if let Some(theme) = &record.theme {
            index.entry(theme.to_lowercase()).or_default().push(i);
        }
    }
    index
}

fn build_list_index(records: &[WordRecord]) -> HashMap<String, Vec<usize>> {
    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, record) in records.iter().enumerate() {
        for list in &record.lists {
            index.entry(list.to_lowercase()).or_default().push(i);
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_source, StaticSource};

    async fn loaded_registry() -> WordRegistry<StaticSource> {
        let mut registry = WordRegistry::new(sample_source());
        registry.load_tier(1).await;
        registry.load_tier(2).await;
        registry
    }

    #[tokio::test]
    async fn test_load_tier_merges_words() {
        let mut registry = WordRegistry::new(sample_source());
        let outcome = registry.load_tier(1).await;

        assert!(outcome.added > 0);
        assert_eq!(outcome.skipped, 0);
        assert_eq!(registry.len(), outcome.added);
    }

    #[tokio::test]
    async fn test_load_tier_idempotent() {
        let mut registry = WordRegistry::new(sample_source());
        registry.load_tier(1).await;

        let len = registry.len();
        let version = registry.version();

        let outcome = registry.load_tier(1).await;
        assert_eq!(outcome, LoadOutcome::default());
        assert_eq!(registry.len(), len);
        assert_eq!(registry.version(), version);
    }

    #[tokio::test]
    async fn test_load_unavailable_tier_is_noop() {
        let mut registry = WordRegistry::new(sample_source());
        registry.load_tier(1).await;
        let len = registry.len();
        let version = registry.version();

        let outcome = registry.load_tier(9).await;
        assert_eq!(outcome, LoadOutcome::default());
        assert_eq!(registry.len(), len);
        assert_eq!(registry.version(), version);
    }

    #[tokio::test]
    async fn test_unavailable_tier_can_be_retried() {
        // A failed load must not mark the tier as loaded
        let mut registry = WordRegistry::new(sample_source());
        registry.load_tier(9).await;
        assert!(!registry.loaded_tiers.contains(&9));
    }

    #[tokio::test]
    async fn test_duplicate_words_across_loads_are_skipped() {
        let mut source = sample_source();
        // Pack repeating a tier-1 word plus one new word
        let mut dup = crate::testing::record("cat", 1, "cvc");
        dup.definition = "A different definition".to_string();
        let fresh = crate::testing::record("fox", 2, "cvc");
        source.packs.insert("extras".to_string(), vec![dup, fresh]);

        let mut registry = WordRegistry::new(source);
        registry.load_tier(1).await;
        let outcome = registry.load_pack("extras").await;

        assert_eq!(outcome.added, 1);
        assert_eq!(outcome.skipped, 1);
        // The original record wins
        assert_ne!(
            registry.get_by_word("cat").unwrap().definition,
            "A different definition"
        );
    }

    #[tokio::test]
    async fn test_get_by_word_unique_per_canonical_key() {
        let registry = loaded_registry().await;
        for record in registry.records().to_vec() {
            let found = registry.get_by_word(&record.word).unwrap();
            assert_eq!(found.word, record.word);
        }
    }

    #[tokio::test]
    async fn test_get_by_word_unknown_is_none() {
        let registry = loaded_registry().await;
        assert!(registry.get_by_word("zyzzyva").is_none());
    }

    #[tokio::test]
    async fn test_get_by_pattern_includes_secondary() {
        let registry = loaded_registry().await;
        let primary = registry.get_by_pattern("schwa");
        assert!(primary.iter().any(|r| r.word == "separate"));

        let secondary = registry.get_by_pattern("suffix-ate");
        assert!(secondary.iter().any(|r| r.word == "separate"));
    }

    #[tokio::test]
    async fn test_get_by_theme_and_list() {
        let registry = loaded_registry().await;

        let animals = registry.get_by_theme("animals");
        assert!(!animals.is_empty());
        assert!(animals.iter().all(|r| r.theme.as_deref() == Some("animals")));

        let listed = registry.get_by_list("regional-2019");
        assert!(listed.iter().any(|r| r.word == "separate"));
    }

    #[tokio::test]
    async fn test_unknown_keys_return_empty() {
        let registry = loaded_registry().await;
        assert!(registry.get_by_pattern("no-such-pattern").is_empty());
        assert!(registry.get_by_theme("no-such-theme").is_empty());
        assert!(registry.get_by_list("no-such-list").is_empty());
    }

    #[tokio::test]
    async fn test_dialect_switch_swaps_spellings() {
        let mut registry = loaded_registry().await;
        let count = registry.len();

        registry.set_dialect(Dialect::EnGb).await;

        assert_eq!(registry.len(), count);
        assert!(registry.get_by_word("harbor").is_none());

        let harbour = registry.get_by_word("harbour").unwrap();
        assert_eq!(harbour.distractors.len(), 3);
        assert!(!harbour.distractors.contains(&"harbour".to_string()));
    }

    #[tokio::test]
    async fn test_dialect_round_trip_restores_word_set() {
        let mut registry = loaded_registry().await;
        let mut before: Vec<String> =
            registry.records().iter().map(|r| r.word.clone()).collect();
        before.sort();

        registry.set_dialect(Dialect::EnGb).await;
        registry.set_dialect(Dialect::EnUs).await;

        let mut after: Vec<String> =
            registry.records().iter().map(|r| r.word.clone()).collect();
        after.sort();

        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_dialect_switch_is_noop_when_active() {
        let mut registry = loaded_registry().await;
        let version = registry.version();
        registry.set_dialect(Dialect::EnUs).await;
        assert_eq!(registry.version(), version);
    }

    #[tokio::test]
    async fn test_reverse_lookup_maps_alternate_to_canonical() {
        let mut registry = loaded_registry().await;
        registry.set_dialect(Dialect::EnGb).await;

        assert_eq!(registry.canonical_key("harbour").as_deref(), Some("harbor"));
        // Canonical keys resolve to themselves
        assert_eq!(registry.canonical_key("cat").as_deref(), Some("cat"));
        assert!(registry.canonical_key("nonexistent").is_none());
    }

    #[tokio::test]
    async fn test_load_while_dialect_active_applies_overlay() {
        let mut registry = WordRegistry::new(sample_source());
        registry.load_tier(1).await;
        registry.set_dialect(Dialect::EnGb).await;

        // Tier 2 loads after the switch; its records see the overlay too
        registry.load_tier(2).await;
        assert!(registry.get_by_word("harbour").is_some());
        assert!(registry.get_by_word("separate").is_some());
    }

    #[tokio::test]
    async fn test_version_bumps_on_mutation() {
        let mut registry = WordRegistry::new(sample_source());
        let v0 = registry.version();

        registry.load_tier(1).await;
        let v1 = registry.version();
        assert!(v1 > v0);

        registry.set_dialect(Dialect::EnGb).await;
        assert!(registry.version() > v1);
    }
}
