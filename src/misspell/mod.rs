//! Misspelling generation: strategy-based phonetic mutation with a
//! pronounceability gate and a progressive fallback ladder.
//!
//! The offline baker drives [`generator::bake_records`] over the static
//! word data; the quiz layer uses a narrower inline subset of the
//! strategies when a record arrives with incomplete baked data.

pub mod generator;
pub mod phonotactics;
pub mod strategies;

pub use generator::{BakeReport, bake_records, generate_distractors, seed_for};
pub use phonotactics::is_pronounceable;
pub use strategies::Strategy;
