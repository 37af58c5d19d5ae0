//! Misspelling pipeline: shuffled strategy attempts, then a progressive
//! fallback ladder for words the strategies cannot crack.
//!
//! The generator is a pure function of `(word, rng)` and never consults an
//! ambient random source; [`bake_records`] seeds a fresh RNG per word from
//! a hash of its characters so offline runs are reproducible.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use sha2::{Digest, Sha256};

use crate::config;
use crate::domain::WordRecord;

use super::phonotactics::{is_pronounceable, is_vowel};
use super::strategies::{self, ALL_STRATEGIES, consonant_confusions};

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Generate up to 3 distinct plausible misspellings of `word`.
///
/// Output contract: no result equals the input, no duplicates, 0-3 entries;
/// fewer than 3 only for degenerate inputs. Never fails.
pub fn generate_distractors<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Vec<String> {
  let mut found: Vec<String> = Vec::new();
  if word.is_empty() {
    return found;
  }

  let mut attempts = 0;
  while attempts < config::MAX_GENERATION_ATTEMPTS && found.len() < config::DISTRACTOR_COUNT {
    let mut order = ALL_STRATEGIES;
    order.shuffle(rng);

    for strategy in order {
      if attempts >= config::MAX_GENERATION_ATTEMPTS {
        break;
      }
      attempts += 1;

      let Some(candidate) = strategies::apply(strategy, word, rng) else {
        continue;
      };
      if accept(&candidate, word, &found, true) {
        found.push(candidate);
        break;
      }
    }
  }

  if found.len() < config::DISTRACTOR_COUNT {
    vowel_scan(word, true, &mut found);
  }
  if found.len() < config::DISTRACTOR_COUNT {
    consonant_scan(word, &mut found);
  }
  if found.len() < config::DISTRACTOR_COUNT {
    vowel_scan(word, false, &mut found);
  }
  if found.len() < config::DISTRACTOR_COUNT {
    toggle_trailing_e(word, &mut found);
  }

  found
}

fn accept(candidate: &str, word: &str, found: &[String], filtered: bool) -> bool {
  !candidate.is_empty()
    && candidate != word
    && !found.iter().any(|f| f == candidate)
    && (!filtered || is_pronounceable(candidate))
}

/// Fallback (a)/(c): substitute every vowel position with every other vowel.
fn vowel_scan(word: &str, filtered: bool, found: &mut Vec<String>) {
  let chars: Vec<char> = word.chars().collect();
  for i in 0..chars.len() {
    if !is_vowel(chars[i]) {
      continue;
    }
    for v in VOWELS {
      if v == chars[i] {
        continue;
      }
      let mut out = chars.clone();
      out[i] = v;
      let candidate: String = out.into_iter().collect();
      if accept(&candidate, word, found, filtered) {
        found.push(candidate);
        if found.len() >= config::DISTRACTOR_COUNT {
          return;
        }
      }
    }
  }
}

/// Fallback (b): substitute every confusable consonant position.
fn consonant_scan(word: &str, found: &mut Vec<String>) {
  let chars: Vec<char> = word.chars().collect();
  for i in 0..chars.len() {
    for partner in consonant_confusions(chars[i]) {
      let mut out = chars.clone();
      out[i] = partner;
      let candidate: String = out.into_iter().collect();
      if accept(&candidate, word, found, true) {
        found.push(candidate);
        if found.len() >= config::DISTRACTOR_COUNT {
          return;
        }
      }
    }
  }
}

/// Fallback (d): last resort trailing-e toggle, unfiltered.
fn toggle_trailing_e(word: &str, found: &mut Vec<String>) {
  let candidate = match word.strip_suffix('e') {
    Some(stem) => stem.to_string(),
    None => format!("{}e", word),
  };
  if accept(&candidate, word, found, false) {
    found.push(candidate);
  }
}

/// Deterministic per-word seed: first 8 bytes of the SHA-256 of the word.
pub fn seed_for(word: &str) -> u64 {
  let digest = Sha256::digest(word.as_bytes());
  let mut bytes = [0u8; 8];
  bytes.copy_from_slice(&digest[..8]);
  u64::from_be_bytes(bytes)
}

/// Outcome of one offline bake pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct BakeReport {
  /// Words that were (re)generated
  pub baked: usize,
  /// Baked words that ended with a full distractor set
  pub complete: usize,
  /// Baked words that ended short
  pub short: usize,
}

/// Fill in `distractors` for every record that doesn't already carry a full
/// set. Seeded per word, so repeated runs produce identical data.
pub fn bake_records(records: &mut [WordRecord]) -> BakeReport {
  let mut report = BakeReport::default();

  for record in records.iter_mut() {
    if record.distractors.len() >= config::DISTRACTOR_COUNT {
      continue;
    }

    let mut rng = StdRng::seed_from_u64(seed_for(&record.word));
    record.distractors = generate_distractors(&record.word, &mut rng);

    report.baked += 1;
    if record.distractors.len() < config::DISTRACTOR_COUNT {
      report.short += 1;
      tracing::debug!(
        "'{}' baked short: {} of {} distractors",
        record.word,
        record.distractors.len(),
        config::DISTRACTOR_COUNT
      );
    } else {
      report.complete += 1;
    }
  }

  if report.short > 0 {
    tracing::warn!(
      "{} of {} baked words ended with fewer than {} distractors",
      report.short,
      report.baked,
      config::DISTRACTOR_COUNT
    );
  }

  report
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::PartOfSpeech;

  fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
  }

  fn contract_holds(word: &str, distractors: &[String]) {
    assert!(distractors.len() <= 3, "{}: more than 3", word);
    for d in distractors {
      assert_ne!(d, word);
      assert!(!d.is_empty());
    }
    for (i, d) in distractors.iter().enumerate() {
      assert!(!distractors[i + 1..].contains(d), "{}: duplicate {}", word, d);
    }
  }

  #[test]
  fn test_output_contract() {
    for word in ["cat", "separate", "necessary", "knight", "rhythm", "believe", "a", "it"] {
      let mut rng = seeded(42);
      let distractors = generate_distractors(word, &mut rng);
      contract_holds(word, &distractors);
    }
  }

  #[test]
  fn test_empty_input_yields_nothing() {
    let mut rng = seeded(1);
    assert!(generate_distractors("", &mut rng).is_empty());
  }

  #[test]
  fn test_common_words_get_full_sets() {
    for word in ["cat", "separate", "necessary", "believe", "basket"] {
      let mut rng = seeded(99);
      let distractors = generate_distractors(word, &mut rng);
      assert_eq!(distractors.len(), 3, "{} got {:?}", word, distractors);
    }
  }

  #[test]
  fn test_determinism_same_seed_same_output() {
    for word in ["separate", "cat", "rhythm"] {
      let mut a = seeded(seed_for(word));
      let mut b = seeded(seed_for(word));
      assert_eq!(
        generate_distractors(word, &mut a),
        generate_distractors(word, &mut b)
      );
    }
  }

  #[test]
  fn test_cat_never_returns_zero_across_seeds() {
    for seed in 0..100 {
      let mut rng = seeded(seed);
      let distractors = generate_distractors("cat", &mut rng);
      assert!(!distractors.is_empty(), "seed {} gave nothing", seed);
      contract_holds("cat", &distractors);
    }
  }

  #[test]
  fn test_seed_for_is_stable() {
    assert_eq!(seed_for("cat"), seed_for("cat"));
    assert_ne!(seed_for("cat"), seed_for("dog"));
  }

  fn bare_record(word: &str) -> WordRecord {
    WordRecord {
      word: word.to_string(),
      definition: String::new(),
      example_sentence: String::new(),
      pronunciation_guide: String::new(),
      part_of_speech: PartOfSpeech::Noun,
      difficulty: 1,
      pattern: "cvc".to_string(),
      secondary_patterns: Vec::new(),
      theme: None,
      lists: Vec::new(),
      etymology: None,
      distractors: Vec::new(),
    }
  }

  #[test]
  fn test_bake_fills_missing_distractors() {
    let mut records = vec![bare_record("cat"), bare_record("basket")];
    let report = bake_records(&mut records);

    assert_eq!(report.baked, 2);
    assert_eq!(report.complete, 2);
    assert_eq!(report.short, 0);
    for record in &records {
      assert_eq!(record.distractors.len(), 3);
    }
  }

  #[test]
  fn test_bake_skips_full_records() {
    let mut record = bare_record("cat");
    record.distractors = vec!["kat".into(), "cet".into(), "catt".into()];
    let before = record.distractors.clone();

    let mut records = vec![record];
    let report = bake_records(&mut records);

    assert_eq!(report.baked, 0);
    assert_eq!(records[0].distractors, before);
  }

  #[test]
  fn test_bake_is_reproducible() {
    let mut first = vec![bare_record("separate"), bare_record("necessary")];
    let mut second = vec![bare_record("separate"), bare_record("necessary")];
    bake_records(&mut first);
    bake_records(&mut second);

    for (a, b) in first.iter().zip(&second) {
      assert_eq!(a.distractors, b.distractors);
    }
  }
}
