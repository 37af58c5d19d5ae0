use serde::{Deserialize, Serialize};

use super::word::PartOfSpeech;

/// One assembled multiple-choice question.
///
/// The three options are pairwise distinct; that precondition is owned by
/// the distractor picker upstream and is not re-checked here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizItem {
  /// Canonical word string (records carry no other stable key)
  pub id: String,
  /// Textual cue read to the player; never leaks the spelling
  pub prompt: String,
  pub answer: String,
  pub options: [String; 3],
  pub correct_index: usize,
  pub meta: ItemMeta,
}

/// Display metadata carried alongside a quiz item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemMeta {
  pub definition: String,
  pub example_sentence: String,
  pub pronunciation_guide: String,
  pub part_of_speech: PartOfSpeech,
  pub pattern: String,
  pub difficulty: u8,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub etymology: Option<String>,
}
