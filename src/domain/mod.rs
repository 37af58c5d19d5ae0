pub mod item;
pub mod word;

pub use item::{ItemMeta, QuizItem};
pub use word::{Dialect, PartOfSpeech, WordRecord};
