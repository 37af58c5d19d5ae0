//! Runtime distractor picking over pre-baked data.
//!
//! The primary path draws 2 of a record's baked distractors. Records that
//! arrive with fewer than 2 (incomplete data) fall back to a narrower
//! inline generator - vowel substitution, silent-e toggle, and consonant
//! confusion, without the pronounceability filter. That asymmetry with the
//! offline baker is deliberate and load-bearing for reproducibility of the
//! baked data; don't unify the two paths casually.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config;
use crate::domain::WordRecord;
use crate::misspell::strategies::{self, Strategy};

const INLINE_STRATEGIES: [Strategy; 3] = [
  Strategy::VowelConfusion,
  Strategy::SilentE,
  Strategy::ConsonantConfusion,
];

/// Pick 2 distractors for a quiz item.
///
/// Hard mode prefers distractors with the word's exact length when at
/// least 2 such exist. May return fewer than 2 only for degenerate words
/// with incomplete baked data.
pub fn pick_distractors<R: Rng + ?Sized>(
  record: &WordRecord,
  hard_mode: bool,
  rng: &mut R,
) -> Vec<String> {
  let needed = config::ITEM_CHOICES - 1;

  if record.distractors.len() >= needed {
    if hard_mode {
      let word_len = record.word.chars().count();
      let same_len: Vec<String> = record
        .distractors
        .iter()
        .filter(|d| d.chars().count() == word_len)
        .cloned()
        .collect();
      if same_len.len() >= needed {
        let mut pool = same_len;
        pool.shuffle(rng);
        pool.truncate(needed);
        return pool;
      }
    }

    let mut pool = record.distractors.clone();
    pool.shuffle(rng);
    pool.truncate(needed);
    return pool;
  }

  // Resilience path for incomplete data, not a quality guarantee.
  tracing::debug!(
    "'{}' has {} baked distractors; generating inline",
    record.word,
    record.distractors.len()
  );

  let mut picked = record.distractors.clone();
  let mut attempts = 0;
  while picked.len() < needed && attempts < config::INLINE_FALLBACK_ATTEMPTS {
    attempts += 1;
    let strategy = INLINE_STRATEGIES[rng.random_range(0..INLINE_STRATEGIES.len())];
    let Some(candidate) = strategies::apply(strategy, &record.word, rng) else {
      continue;
    };
    if candidate.is_empty() || candidate == record.word || picked.contains(&candidate) {
      continue;
    }
    picked.push(candidate);
  }

  picked
}
