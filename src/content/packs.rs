//! Word pack files - reads and writes the tier/pack JSON containers.
//!
//! A pack file holds `{"words": [...]}` plus an optional `baked_at` stamp
//! written by the offline baker. The registry trusts this data; schema
//! validation at runtime is an explicit non-goal.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::domain::WordRecord;

/// Container for words in a tier or pack JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordPackData {
    pub words: Vec<WordRecord>,
    /// RFC 3339 stamp of the last offline bake, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baked_at: Option<String>,
}

/// Parse a pack container from raw JSON. `origin` names the source in errors.
pub fn parse_pack(json: &str, origin: &str) -> Result<WordPackData, PackLoadError> {
    serde_json::from_str(json)
        .map_err(|e| PackLoadError::ParseError(origin.to_string(), e.to_string()))
}

/// Load a pack container from a JSON file.
pub fn load_pack_file(path: &Path) -> Result<WordPackData, PackLoadError> {
    if !path.exists() {
        return Err(PackLoadError::FileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| PackLoadError::IoError(path.display().to_string(), e.to_string()))?;

    parse_pack(&content, &path.display().to_string())
}

/// Write a pack container back to disk atomically (temp file + rename), so
/// a crashed bake never leaves a half-written data file behind.
pub fn save_pack_file(path: &Path, pack: &WordPackData) -> Result<(), PackSaveError> {
    let json = serde_json::to_string_pretty(pack)
        .map_err(|e| PackSaveError::EncodeError(path.display().to_string(), e.to_string()))?;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| PackSaveError::IoError(path.display().to_string(), e.to_string()))?;

    tmp.write_all(json.as_bytes())
        .map_err(|e| PackSaveError::IoError(path.display().to_string(), e.to_string()))?;

    tmp.persist(path)
        .map_err(|e| PackSaveError::IoError(path.display().to_string(), e.to_string()))?;

    Ok(())
}

/// Pack loading errors.
#[derive(Debug)]
pub enum PackLoadError {
    FileNotFound(String),
    IoError(String, String),
    ParseError(String, String),
}

impl std::fmt::Display for PackLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackLoadError::FileNotFound(path) => write!(f, "Pack file not found: {}", path),
            PackLoadError::IoError(path, err) => write!(f, "IO error reading {}: {}", path, err),
            PackLoadError::ParseError(path, err) => write!(f, "Parse error in {}: {}", path, err),
        }
    }
}

impl std::error::Error for PackLoadError {}

/// Pack saving errors.
#[derive(Debug)]
pub enum PackSaveError {
    EncodeError(String, String),
    IoError(String, String),
}

impl std::fmt::Display for PackSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackSaveError::EncodeError(path, err) => {
                write!(f, "Encode error for {}: {}", path, err)
            }
            PackSaveError::IoError(path, err) => write!(f, "IO error writing {}: {}", path, err),
        }
    }
}

impl std::error::Error for PackSaveError {}
