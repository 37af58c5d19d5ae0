use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
  Noun,
  Verb,
  Adjective,
  Adverb,
  Preposition,
  Conjunction,
  Pronoun,
  Interjection,
}

impl PartOfSpeech {
  pub fn from_str(s: &str) -> Option<Self> {
    match s.to_lowercase().as_str() {
      "noun" => Some(Self::Noun),
      "verb" => Some(Self::Verb),
      "adjective" => Some(Self::Adjective),
      "adverb" => Some(Self::Adverb),
      "preposition" => Some(Self::Preposition),
      "conjunction" => Some(Self::Conjunction),
      "pronoun" => Some(Self::Pronoun),
      "interjection" => Some(Self::Interjection),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Noun => "noun",
      Self::Verb => "verb",
      Self::Adjective => "adjective",
      Self::Adverb => "adverb",
      Self::Preposition => "preposition",
      Self::Conjunction => "conjunction",
      Self::Pronoun => "pronoun",
      Self::Interjection => "interjection",
    }
  }
}

/// Regional spelling variant of the active word set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Dialect {
  #[default]
  #[serde(rename = "en-us")]
  EnUs,
  #[serde(rename = "en-gb")]
  EnGb,
}

impl Dialect {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::EnUs => "en-us",
      Self::EnGb => "en-gb",
    }
  }
}

impl std::fmt::Display for Dialect {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for Dialect {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "en-us" => Ok(Self::EnUs),
      "en-gb" => Ok(Self::EnGb),
      _ => Err(format!("Invalid dialect: {}", s)),
    }
  }
}

/// A single word-bank entry as shipped in tier and pack files.
///
/// Records are immutable once loaded. Dialect switches never edit a record
/// in place; they produce transformed copies in the registry's active view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordRecord {
  /// Canonical lowercase spelling
  pub word: String,
  pub definition: String,
  pub example_sentence: String,
  pub pronunciation_guide: String,
  pub part_of_speech: PartOfSpeech,
  /// Difficulty tier 1-10
  pub difficulty: u8,
  /// Primary phonics pattern tag
  pub pattern: String,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub secondary_patterns: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub theme: Option<String>,
  /// Competition-list tags this word appears on
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub lists: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub etymology: Option<String>,
  /// Pre-baked plausible misspellings (0-3, written by the offline baker)
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub distractors: Vec<String>,
}
