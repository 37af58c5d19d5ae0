//! Pronounceability heuristics for candidate misspellings.
//!
//! A candidate is rejected when it could not plausibly be read aloud as an
//! English word: no vowel at all, a 4+ consonant run, or an edge consonant
//! cluster that no real English word uses.

// ============================================================================
// Legal cluster tables
// ============================================================================

/// Word-initial consonant clusters that occur in English spelling.
static LEGAL_ONSETS: &[&str] = &[
  "bl", "br", "ch", "chr", "cl", "cr", "dr", "dw", "fl", "fr", "gh", "gl",
  "gn", "gr", "kn", "ph", "phl", "phr", "pl", "pr", "ps", "pn", "rh", "sc",
  "sch", "scr", "sh", "shr", "sk", "sl", "sm", "sn", "sp", "sph", "spl",
  "spr", "sq", "st", "str", "sw", "th", "thr", "tr", "tw", "wh", "wr",
];

/// Word-final consonant clusters that occur in English spelling.
static LEGAL_CODAS: &[&str] = &[
  "bs", "ch", "ck", "cks", "ct", "cts", "ff", "ft", "fts", "gh", "ght",
  "ld", "lds", "lf", "lk", "ll", "lls", "lm", "lp", "lt", "lts", "mb",
  "mn", "mp", "mps", "mpt", "nch", "nct", "nd", "nds", "ng", "ngs", "nk",
  "nks", "ns", "nt", "nth", "nts", "pt", "pts", "rb", "rc", "rch", "rd",
  "rds", "rf", "rg", "rk", "rl", "rm", "rn", "rns", "rp", "rs", "rst",
  "rt", "rth", "rts", "sh", "sk", "sm", "sp", "ss", "st", "sts", "tch",
  "th", "ths", "ts", "xt", "zz",
];

// ============================================================================
// Character classes
// ============================================================================

pub fn is_vowel(c: char) -> bool {
  matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Vowel for run-splitting purposes; 'y' carries a vowel sound in words
/// like "gym" and "rhythm".
pub fn is_vowel_like(c: char) -> bool {
  matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

pub fn is_consonant(c: char) -> bool {
  c.is_ascii_alphabetic() && !is_vowel_like(c)
}

// ============================================================================
// Filter
// ============================================================================

/// Check whether a candidate misspelling is plausibly pronounceable.
///
/// Rejects when any of:
/// - no vowel-like character anywhere
/// - a run of 4+ consecutive consonants (also covers internal clusters
///   flanked by vowels, which may be at most 3 long)
/// - a word-initial consonant cluster of length 2+ outside [`LEGAL_ONSETS`]
/// - a word-final consonant cluster of length 2+ outside [`LEGAL_CODAS`]
pub fn is_pronounceable(candidate: &str) -> bool {
  let chars: Vec<char> = candidate.chars().collect();
  if chars.is_empty() {
    return false;
  }

  if !chars.iter().any(|&c| is_vowel_like(c)) {
    return false;
  }

  let mut run = 0;
  for &c in &chars {
    if is_consonant(c) {
      run += 1;
      if run >= 4 {
        return false;
      }
    } else {
      run = 0;
    }
  }

  let onset: String = chars.iter().take_while(|&&c| is_consonant(c)).collect();
  if onset.len() >= 2 && !LEGAL_ONSETS.contains(&onset.as_str()) {
    return false;
  }

  let coda: String = chars
    .iter()
    .rev()
    .take_while(|&&c| is_consonant(c))
    .collect::<Vec<_>>()
    .into_iter()
    .rev()
    .collect();
  if coda.len() >= 2 && !LEGAL_CODAS.contains(&coda.as_str()) {
    return false;
  }

  true
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rejects_all_consonants() {
    assert!(!is_pronounceable("xxxxx"));
    assert!(!is_pronounceable("bcdfg"));
  }

  #[test]
  fn test_rejects_empty() {
    assert!(!is_pronounceable(""));
  }

  #[test]
  fn test_rejects_long_consonant_run() {
    assert!(!is_pronounceable("antsch"));
    assert!(!is_pronounceable("abcdfge"));
  }

  #[test]
  fn test_rejects_illegal_onset() {
    assert!(!is_pronounceable("tsack"));
    assert!(!is_pronounceable("bkat"));
  }

  #[test]
  fn test_rejects_illegal_coda() {
    assert!(!is_pronounceable("catb"));
    assert!(!is_pronounceable("calz"));
  }

  #[test]
  fn test_accepts_real_words() {
    for word in ["cat", "separate", "shrimp", "gym", "knight", "psalm"] {
      assert!(is_pronounceable(word), "rejected {}", word);
    }
  }

  #[test]
  fn test_accepts_plausible_misspellings() {
    assert!(is_pronounceable("seperate"));
    assert!(is_pronounceable("cet"));
    assert!(is_pronounceable("harbour"));
  }

  #[test]
  fn test_y_counts_as_vowel_like() {
    assert!(is_pronounceable("myth"));
    assert!(!is_pronounceable("mth"));
  }
}
