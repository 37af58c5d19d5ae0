//! Candidate pool selection with fallback broadening.
//!
//! Selection never returns an empty pool while the registry has words:
//! when a category/difficulty intersection comes up empty the filter is
//! progressively relaxed - dimension only, difficulty only, everything.

use crate::config;
use crate::content::source::WordSource;
use crate::domain::WordRecord;
use crate::registry::WordRegistry;

/// One selectable quiz category. Exactly one dimension is active; the
/// variants make the dimensions mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
  /// No dimension filter; difficulty only
  Any,
  /// Words whose etymology mentions this origin
  Origin(String),
  Theme(String),
  Pattern(String),
}

/// Select candidate records for `category` within a difficulty range.
///
/// Hard mode narrows a pool of more than 3 records to its hardest 30%
/// (by difficulty, then word length), never below 3. The caller performs
/// the final random pick with its own RNG.
pub fn select_pool<S: WordSource>(
  registry: &WordRegistry<S>,
  category: &Category,
  min_difficulty: u8,
  max_difficulty: u8,
  hard_mode: bool,
) -> Vec<WordRecord> {
  let in_range =
    |r: &WordRecord| r.difficulty >= min_difficulty && r.difficulty <= max_difficulty;

  let dimension: Vec<WordRecord> = match category {
    Category::Any => registry.records().to_vec(),
    Category::Theme(theme) => registry.get_by_theme(theme),
    Category::Pattern(pattern) => registry.get_by_pattern(pattern),
    Category::Origin(origin) => {
      let needle = origin.to_lowercase();
      registry
        .records()
        .iter()
        .filter(|r| {
          r.etymology
            .as_ref()
            .is_some_and(|e| e.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
    }
  };

  let mut pool: Vec<WordRecord> = dimension.iter().filter(|r| in_range(r)).cloned().collect();

  // Broadening chain: dimension only, difficulty only, whole registry.
  if pool.is_empty() {
    pool = dimension;
  }
  if pool.is_empty() {
    pool = registry
      .records()
      .iter()
      .filter(|r| in_range(r))
      .cloned()
      .collect();
  }
  if pool.is_empty() {
    pool = registry.records().to_vec();
  }

  if hard_mode && pool.len() > config::HARD_MODE_MIN_POOL {
    pool.sort_by(|a, b| {
      (b.difficulty, b.word.len()).cmp(&(a.difficulty, a.word.len()))
    });
    let keep = ((pool.len() as f64) * config::HARD_MODE_KEEP_RATIO).ceil() as usize;
    pool.truncate(keep.max(config::HARD_MODE_MIN_POOL));
  }

  pool
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::{record, sample_source, StaticSource};

  async fn loaded_registry() -> WordRegistry<StaticSource> {
    let mut registry = WordRegistry::new(sample_source());
    registry.load_tier(1).await;
    registry.load_tier(2).await;
    registry
  }

  #[tokio::test]
  async fn test_any_category_with_range_includes_separate() {
    let registry = loaded_registry().await;
    let pool = select_pool(&registry, &Category::Any, 3, 6, false);

    assert!(pool.iter().any(|r| r.word == "separate"));
    assert!(pool.iter().all(|r| r.difficulty >= 3 && r.difficulty <= 6));
  }

  #[tokio::test]
  async fn test_theme_intersected_with_difficulty() {
    let registry = loaded_registry().await;
    let pool = select_pool(&registry, &Category::Theme("animals".into()), 1, 2, false);

    assert!(!pool.is_empty());
    assert!(pool.iter().all(|r| r.theme.as_deref() == Some("animals")));
  }

  #[tokio::test]
  async fn test_origin_matches_etymology_substring() {
    let registry = loaded_registry().await;
    let pool = select_pool(&registry, &Category::Origin("latin".into()), 1, 10, false);

    assert!(pool.iter().any(|r| r.word == "separate"));
    assert!(pool
      .iter()
      .all(|r| r.etymology.as_ref().unwrap().to_lowercase().contains("latin")));
  }

  #[tokio::test]
  async fn test_empty_intersection_falls_back_to_dimension() {
    let registry = loaded_registry().await;
    // No animal words at difficulty 9-10; fallback keeps the theme
    let pool = select_pool(&registry, &Category::Theme("animals".into()), 9, 10, false);

    assert!(!pool.is_empty());
    assert!(pool.iter().all(|r| r.theme.as_deref() == Some("animals")));
  }

  #[tokio::test]
  async fn test_unknown_theme_falls_back_to_difficulty() {
    let registry = loaded_registry().await;
    let pool = select_pool(&registry, &Category::Theme("volcanoes".into()), 1, 2, false);

    assert!(!pool.is_empty());
    assert!(pool.iter().all(|r| r.difficulty <= 2));
  }

  #[tokio::test]
  async fn test_unknown_theme_and_range_fall_back_to_everything() {
    let registry = loaded_registry().await;
    // Neither the theme nor the difficulty band matches anything
    let pool = select_pool(&registry, &Category::Theme("volcanoes".into()), 9, 10, false);

    assert_eq!(pool.len(), registry.len());
  }

  #[tokio::test]
  async fn test_empty_registry_yields_empty_pool() {
    let registry = WordRegistry::new(StaticSource::default());
    let pool = select_pool(&registry, &Category::Any, 1, 10, false);
    assert!(pool.is_empty());
  }

  #[tokio::test]
  async fn test_hard_mode_keeps_hardest_third() {
    let mut source = StaticSource::default();
    let words: Vec<_> = (1..=10)
      .map(|d| {
        let name = format!("{}word{}", "x".repeat(d as usize), d);
        record(&name, d, "cvc")
      })
      .collect();
    source.tiers.insert(1, words);

    let mut registry = WordRegistry::new(source);
    registry.load_tier(1).await;

    let pool = select_pool(&registry, &Category::Any, 1, 10, true);
    assert_eq!(pool.len(), 3);
    // Sorted descending by difficulty
    assert_eq!(pool[0].difficulty, 10);
    assert_eq!(pool[1].difficulty, 9);
    assert_eq!(pool[2].difficulty, 8);
  }

  #[tokio::test]
  async fn test_hard_mode_never_narrows_below_minimum() {
    let mut source = StaticSource::default();
    source.tiers.insert(
      1,
      vec![
        record("cat", 1, "cvc"),
        record("dog", 1, "cvc"),
        record("hen", 2, "cvc"),
        record("fox", 2, "cvc"),
      ],
    );

    let mut registry = WordRegistry::new(source);
    registry.load_tier(1).await;

    // 30% of 4 rounds up to 2, but the floor is 3
    let pool = select_pool(&registry, &Category::Any, 1, 10, true);
    assert_eq!(pool.len(), 3);
  }

  #[tokio::test]
  async fn test_hard_mode_skips_small_pools() {
    let mut source = StaticSource::default();
    source.tiers.insert(
      1,
      vec![record("cat", 1, "cvc"), record("dog", 1, "cvc")],
    );

    let mut registry = WordRegistry::new(source);
    registry.load_tier(1).await;

    let pool = select_pool(&registry, &Category::Any, 1, 10, true);
    assert_eq!(pool.len(), 2);
  }
}
