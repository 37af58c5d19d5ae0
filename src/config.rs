//! Crate configuration constants and data-directory resolution.
//!
//! This module centralizes the tunables of the word bank and the
//! misspelling engine, plus the lookup of where word data lives on disk.

use serde::Deserialize;
use std::path::PathBuf;

// ==================== Data Directory ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    data: Option<DataConfig>,
}

#[derive(Debug, Deserialize)]
struct DataConfig {
    dir: Option<String>,
}

/// Load word-data directory with priority: config.toml > .env > default
pub fn load_data_dir() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Priority 1: config.toml
    if let Ok(contents) = std::fs::read_to_string("config.toml") {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            if let Some(data) = config.data {
                if let Some(dir) = data.dir {
                    tracing::info!("Using word data from config.toml: {}", dir);
                    return PathBuf::from(dir);
                }
            }
        }
    }

    // Priority 2: .env WORDBANK_DATA_DIR
    if let Ok(dir) = std::env::var("WORDBANK_DATA_DIR") {
        tracing::info!("Using word data from WORDBANK_DATA_DIR env: {}", dir);
        return PathBuf::from(dir);
    }

    // Default
    let default = PathBuf::from("data/words");
    tracing::info!("Using default word data path: {}", default.display());
    default
}

// ==================== Tier Configuration ====================

/// Tier information struct
pub struct TierInfo {
    pub tier: u8,
    pub name: &'static str,
    pub min_difficulty: u8,
    pub max_difficulty: u8,
}

/// All tier definitions
pub const TIERS: [TierInfo; 5] = [
    TierInfo {
        tier: 1,
        name: "Tier 1: Everyday Words",
        min_difficulty: 1,
        max_difficulty: 2,
    },
    TierInfo {
        tier: 2,
        name: "Tier 2: Stretch Words",
        min_difficulty: 3,
        max_difficulty: 4,
    },
    TierInfo {
        tier: 3,
        name: "Tier 3: Challenge Words",
        min_difficulty: 5,
        max_difficulty: 6,
    },
    TierInfo {
        tier: 4,
        name: "Tier 4: Competition Words",
        min_difficulty: 7,
        max_difficulty: 8,
    },
    TierInfo {
        tier: 5,
        name: "Tier 5: Champion Words",
        min_difficulty: 9,
        max_difficulty: 10,
    },
];

/// Get tier info by tier number
pub fn get_tier_info(tier: u8) -> Option<&'static TierInfo> {
    TIERS.iter().find(|t| t.tier == tier)
}

/// Get the tier whose difficulty band contains a given difficulty
pub fn tier_for_difficulty(difficulty: u8) -> Option<&'static TierInfo> {
    TIERS
        .iter()
        .find(|t| difficulty >= t.min_difficulty && difficulty <= t.max_difficulty)
}

// ==================== Difficulty ====================

pub const MIN_DIFFICULTY: u8 = 1;

pub const MAX_DIFFICULTY: u8 = 10;

// ==================== Generation Configuration ====================

/// Pre-baked misspellings per word
pub const DISTRACTOR_COUNT: usize = 3;

/// Options per quiz item (1 correct + 2 distractors)
pub const ITEM_CHOICES: usize = 3;

/// Strategy applications before the generator falls back to exhaustive scans
pub const MAX_GENERATION_ATTEMPTS: usize = 60;

/// Attempt bound for the inline runtime fallback generator
pub const INLINE_FALLBACK_ATTEMPTS: usize = 20;

// ==================== Hard Mode ====================

/// Fraction of the sorted pool hard mode keeps
pub const HARD_MODE_KEEP_RATIO: f64 = 0.3;

/// Hard mode never narrows a pool below this many records
pub const HARD_MODE_MIN_POOL: usize = 3;
