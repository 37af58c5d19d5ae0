//! Quiz item assembly: pool selection, record pick, distractor pick, and
//! the final shuffled option set.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::content::source::WordSource;
use crate::domain::{ItemMeta, QuizItem, WordRecord};
use crate::registry::WordRegistry;

use super::picker;
use super::pool::{self, Category};

/// Compose a quiz item from a record and two distractors.
///
/// Precondition carried from the picker: the correct word and both
/// distractors are pairwise distinct. Not re-checked here.
pub fn assemble_item<R: Rng + ?Sized>(
  record: &WordRecord,
  first: String,
  second: String,
  rng: &mut R,
) -> QuizItem {
  let mut options = [record.word.clone(), first, second];
  options.shuffle(rng);

  let correct_index = options
    .iter()
    .position(|o| *o == record.word)
    .unwrap_or(0);

  QuizItem {
    id: record.word.clone(),
    prompt: record.definition.clone(),
    answer: record.word.clone(),
    options,
    correct_index,
    meta: ItemMeta {
      definition: record.definition.clone(),
      example_sentence: record.example_sentence.clone(),
      pronunciation_guide: record.pronunciation_guide.clone(),
      part_of_speech: record.part_of_speech,
      pattern: record.pattern.clone(),
      difficulty: record.difficulty,
      etymology: record.etymology.clone(),
    },
  }
}

/// Produce one quiz item for a category and difficulty band.
///
/// Returns None only when the registry is empty, or when a degenerate
/// record with incomplete baked data defeats the inline fallback.
pub fn generate_item<S: WordSource, R: Rng + ?Sized>(
  registry: &WordRegistry<S>,
  category: &Category,
  difficulty: RangeInclusive<u8>,
  hard_mode: bool,
  rng: &mut R,
) -> Option<QuizItem> {
  let pool = pool::select_pool(
    registry,
    category,
    *difficulty.start(),
    *difficulty.end(),
    hard_mode,
  );
  if pool.is_empty() {
    return None;
  }

  let record = &pool[rng.random_range(0..pool.len())];
  let picked = picker::pick_distractors(record, hard_mode, rng);

  let mut picked = picked.into_iter();
  let (Some(first), Some(second)) = (picked.next(), picked.next()) else {
    tracing::warn!("'{}' could not supply 2 distractors", record.word);
    return None;
  };

  Some(assemble_item(record, first, second, rng))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::registry::WordRegistry;
  use crate::testing::{sample_source, StaticSource};
  use rand::SeedableRng;
  use rand::rngs::StdRng;

  async fn loaded_registry() -> WordRegistry<StaticSource> {
    let mut registry = WordRegistry::new(sample_source());
    registry.load_tier(1).await;
    registry.load_tier(2).await;
    registry
  }

  #[test]
  fn test_assemble_item_options_and_index() {
    let record = crate::testing::record("separate", 4, "schwa");

    for seed in 0..20 {
      let mut rng = StdRng::seed_from_u64(seed);
      let item = assemble_item(&record, "seperate".into(), "separete".into(), &mut rng);

      assert_eq!(item.options.len(), 3);
      assert_eq!(item.options[item.correct_index], "separate");
      assert_eq!(item.answer, "separate");

      let mut sorted = item.options.to_vec();
      sorted.sort();
      sorted.dedup();
      assert_eq!(sorted.len(), 3, "options not pairwise distinct");
    }
  }

  #[tokio::test]
  async fn test_generate_item_for_separate() {
    let registry = loaded_registry().await;

    // Deterministic pool of one: difficulty band only "separate" occupies
    let mut rng = StdRng::seed_from_u64(17);
    let item = generate_item(&registry, &Category::Origin("separatus".into()), 3..=6, false, &mut rng)
      .unwrap();

    assert_eq!(item.answer, "separate");
    assert_eq!(item.options[item.correct_index], "separate");
    assert_eq!(item.meta.difficulty, 4);
  }

  #[tokio::test]
  async fn test_generate_item_any_category() {
    let registry = loaded_registry().await;

    for seed in 0..10 {
      let mut rng = StdRng::seed_from_u64(seed);
      let item = generate_item(&registry, &Category::Any, 1..=10, false, &mut rng);
      let item = item.expect("registry is non-empty");
      assert!(registry.get_by_word(&item.answer).is_some());
    }
  }

  #[tokio::test]
  async fn test_generate_item_empty_registry() {
    let registry = WordRegistry::new(StaticSource::default());
    let mut rng = StdRng::seed_from_u64(1);
    assert!(generate_item(&registry, &Category::Any, 1..=10, false, &mut rng).is_none());
  }
}
