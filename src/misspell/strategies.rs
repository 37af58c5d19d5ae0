//! Mutation strategies: each turns a correct spelling into one candidate
//! misspelling, or reports "not applicable" for this word.
//!
//! The tables below are curated spelling-mistake data, not a phonological
//! model. Every strategy is a pure function of `(word, rng)`.

use rand::Rng;

use super::phonotactics::{is_consonant, is_vowel};

// ============================================================================
// Confusion tables
// ============================================================================

/// Commonly confused vowel pairs, applied in both directions.
static VOWEL_PAIRS: &[(char, char)] = &[
  ('a', 'e'),
  ('e', 'i'),
  ('i', 'o'),
  ('o', 'u'),
  ('a', 'u'),
];

/// Acoustically or visually confused consonant pairs, both directions.
static CONSONANT_PAIRS: &[(char, char)] = &[
  ('b', 'd'),
  ('p', 'b'),
  ('m', 'n'),
  ('s', 'z'),
  ('f', 'v'),
  ('t', 'd'),
  ('g', 'k'),
  ('c', 'k'),
];

/// Digraph substitutions, applied left to right.
static DIGRAPH_SUBS: &[(&str, &str)] = &[
  ("sh", "ch"),
  ("ch", "sh"),
  ("th", "f"),
  ("wh", "w"),
  ("ck", "k"),
  ("ph", "f"),
];

/// Confusable suffix pairs, longest first; either side maps to the other.
static SUFFIX_PAIRS: &[(&str, &str)] = &[
  ("cious", "tious"),
  ("eous", "ious"),
  ("ible", "able"),
  ("ance", "ence"),
  ("tion", "sion"),
  ("ment", "mant"),
  ("ant", "ent"),
  ("ary", "ery"),
  ("ise", "ize"),
  ("ful", "full"),
  ("ous", "us"),
  ("al", "el"),
  ("er", "or"),
  ("ar", "er"),
  ("ie", "ei"),
];

/// Silent-letter spellings and their phonetically reduced forms.
static SILENT_CLUSTERS: &[(&str, &str)] = &[
  ("kn", "n"),
  ("wr", "r"),
  ("gn", "n"),
  ("mb", "m"),
  ("mn", "n"),
  ("ps", "s"),
  ("pn", "n"),
];

// ============================================================================
// Strategy dispatch
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
  Transposition,
  VowelConfusion,
  DoublingToggle,
  ConsonantConfusion,
  DigraphConfusion,
  SilentE,
  SuffixConfusion,
  SilentCluster,
}

pub const ALL_STRATEGIES: [Strategy; 8] = [
  Strategy::Transposition,
  Strategy::VowelConfusion,
  Strategy::DoublingToggle,
  Strategy::ConsonantConfusion,
  Strategy::DigraphConfusion,
  Strategy::SilentE,
  Strategy::SuffixConfusion,
  Strategy::SilentCluster,
];

/// Apply one strategy to `word`, returning a candidate or None when the
/// strategy does not apply.
pub fn apply<R: Rng + ?Sized>(strategy: Strategy, word: &str, rng: &mut R) -> Option<String> {
  match strategy {
    Strategy::Transposition => transpose_same_class(word, rng),
    Strategy::VowelConfusion => confuse_vowel(word, rng),
    Strategy::DoublingToggle => toggle_doubling(word, rng),
    Strategy::ConsonantConfusion => confuse_consonant(word, rng),
    Strategy::DigraphConfusion => confuse_digraph(word, rng),
    Strategy::SilentE => toggle_silent_e(word),
    Strategy::SuffixConfusion => confuse_suffix(word),
    Strategy::SilentCluster => reduce_silent_cluster(word, rng),
  }
}

// ============================================================================
// Strategies
// ============================================================================

/// Swap two adjacent interior letters of the same class (both vowels or
/// both consonants).
pub fn transpose_same_class<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Option<String> {
  let chars: Vec<char> = word.chars().collect();
  if chars.len() < 4 {
    return None;
  }

  let eligible: Vec<usize> = (1..chars.len() - 2)
    .filter(|&i| {
      let (a, b) = (chars[i], chars[i + 1]);
      a != b && ((is_vowel(a) && is_vowel(b)) || (is_consonant(a) && is_consonant(b)))
    })
    .collect();

  let &i = pick(&eligible, rng)?;
  let mut out = chars;
  out.swap(i, i + 1);
  Some(out.into_iter().collect())
}

/// Replace one vowel with a commonly confused partner.
pub fn confuse_vowel<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Option<String> {
  let chars: Vec<char> = word.chars().collect();
  let positions: Vec<usize> = (0..chars.len()).filter(|&i| is_vowel(chars[i])).collect();
  let &i = pick(&positions, rng)?;

  let partners = vowel_partners(chars[i]);
  let &replacement = pick(&partners, rng)?;

  let mut out = chars;
  out[i] = replacement;
  Some(out.into_iter().collect())
}

/// Remove an existing doubled consonant, or double a random interior
/// consonant that isn't already doubled.
pub fn toggle_doubling<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Option<String> {
  let chars: Vec<char> = word.chars().collect();
  if chars.len() < 3 {
    return None;
  }

  let doubled: Vec<usize> = (0..chars.len() - 1)
    .filter(|&i| chars[i] == chars[i + 1] && is_consonant(chars[i]))
    .collect();

  if let Some(&i) = pick(&doubled, rng) {
    let mut out = chars;
    out.remove(i);
    return Some(out.into_iter().collect());
  }

  let singles: Vec<usize> = (1..chars.len() - 1)
    .filter(|&i| {
      is_consonant(chars[i]) && chars[i - 1] != chars[i] && chars[i + 1] != chars[i]
    })
    .collect();
  let &i = pick(&singles, rng)?;

  let mut out = chars;
  out.insert(i, out[i]);
  Some(out.into_iter().collect())
}

/// Substitute one consonant using the confusion table.
pub fn confuse_consonant<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Option<String> {
  let chars: Vec<char> = word.chars().collect();
  let positions: Vec<usize> = (0..chars.len())
    .filter(|&i| !consonant_confusions(chars[i]).is_empty())
    .collect();
  let &i = pick(&positions, rng)?;

  let partners = consonant_confusions(chars[i]);
  let &replacement = pick(&partners, rng)?;

  let mut out = chars;
  out[i] = replacement;
  Some(out.into_iter().collect())
}

/// Substitute one digraph occurrence with its confused counterpart.
pub fn confuse_digraph<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Option<String> {
  let mut occurrences: Vec<(usize, &str, &str)> = Vec::new();
  for &(from, to) in DIGRAPH_SUBS {
    for (start, _) in word.match_indices(from) {
      occurrences.push((start, from, to));
    }
  }

  let &(start, from, to) = pick(&occurrences, rng)?;
  let mut out = String::with_capacity(word.len());
  out.push_str(&word[..start]);
  out.push_str(to);
  out.push_str(&word[start + from.len()..]);
  Some(out)
}

/// Drop a trailing silent e, or append one to a word ending in a consonant.
pub fn toggle_silent_e(word: &str) -> Option<String> {
  let chars: Vec<char> = word.chars().collect();
  let &last = chars.last()?;

  if last == 'e' && chars.len() >= 3 && is_consonant(chars[chars.len() - 2]) {
    return Some(chars[..chars.len() - 1].iter().collect());
  }
  if is_consonant(last) {
    return Some(format!("{}e", word));
  }
  None
}

/// Swap a confusable suffix for its paired counterpart.
pub fn confuse_suffix(word: &str) -> Option<String> {
  for &(a, b) in SUFFIX_PAIRS {
    if word.len() > a.len() && word.ends_with(a) {
      return Some(format!("{}{}", &word[..word.len() - a.len()], b));
    }
    if word.len() > b.len() && word.ends_with(b) {
      return Some(format!("{}{}", &word[..word.len() - b.len()], a));
    }
  }
  None
}

/// Replace a silent-letter spelling with its phonetically reduced form.
pub fn reduce_silent_cluster<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Option<String> {
  let mut occurrences: Vec<(usize, &str, &str)> = Vec::new();
  for &(cluster, reduced) in SILENT_CLUSTERS {
    for (start, _) in word.match_indices(cluster) {
      occurrences.push((start, cluster, reduced));
    }
  }

  let &(start, cluster, reduced) = pick(&occurrences, rng)?;
  let mut out = String::with_capacity(word.len());
  out.push_str(&word[..start]);
  out.push_str(reduced);
  out.push_str(&word[start + cluster.len()..]);
  Some(out)
}

// ============================================================================
// Table lookups
// ============================================================================

fn vowel_partners(v: char) -> Vec<char> {
  let mut partners = Vec::new();
  for &(a, b) in VOWEL_PAIRS {
    if v == a {
      partners.push(b);
    } else if v == b {
      partners.push(a);
    }
  }
  partners
}

/// Confusion-table partners for a consonant (empty when the table has none).
pub fn consonant_confusions(c: char) -> Vec<char> {
  let mut partners = Vec::new();
  for &(a, b) in CONSONANT_PAIRS {
    if c == a {
      partners.push(b);
    } else if c == b {
      partners.push(a);
    }
  }
  partners
}

fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
  if items.is_empty() {
    None
  } else {
    Some(&items[rng.random_range(0..items.len())])
  }
}
