//! Word sources - where tiers, packs, and dialect tables come from.
//!
//! The registry depends only on the [`WordSource`] trait; the embedding
//! application decides how the data is actually fetched. Fetching is the
//! one suspending operation in this core.

use std::path::PathBuf;

use crate::domain::{Dialect, WordRecord};

use super::dialect::DialectTable;
use super::packs::{self, PackLoadError};

/// Why a fetch produced nothing. The registry logs these and carries on;
/// they never propagate past the loaders.
#[derive(Debug)]
pub enum SourceError {
    /// The tier/pack/dialect has no backing data here
    Unavailable(String),
    /// Backing data exists but could not be decoded
    Malformed(String, String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Unavailable(what) => write!(f, "Source unavailable: {}", what),
            SourceError::Malformed(what, err) => write!(f, "Malformed source {}: {}", what, err),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<PackLoadError> for SourceError {
    fn from(e: PackLoadError) -> Self {
        match e {
            PackLoadError::FileNotFound(path) => SourceError::Unavailable(path),
            PackLoadError::IoError(path, err) => SourceError::Malformed(path, err),
            PackLoadError::ParseError(path, err) => SourceError::Malformed(path, err),
        }
    }
}

/// Supplier of word data for the registry.
pub trait WordSource {
    async fn fetch_tier(&self, tier: u8) -> Result<Vec<WordRecord>, SourceError>;
    async fn fetch_pack(&self, pack_id: &str) -> Result<Vec<WordRecord>, SourceError>;
    async fn fetch_dialect(&self, dialect: Dialect) -> Result<DialectTable, SourceError>;
}

/// File-backed source reading the standard data-directory layout:
/// `tier{n}.json`, `packs/{id}.json`, `dialects/{tag}.json`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    data_dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn tier_path(&self, tier: u8) -> PathBuf {
        self.data_dir.join(format!("tier{}.json", tier))
    }

    fn pack_path(&self, pack_id: &str) -> PathBuf {
        self.data_dir.join("packs").join(format!("{}.json", pack_id))
    }

    fn dialect_path(&self, dialect: Dialect) -> PathBuf {
        self.data_dir
            .join("dialects")
            .join(format!("{}.json", dialect.as_str()))
    }

    async fn read_words(&self, path: PathBuf) -> Result<Vec<WordRecord>, SourceError> {
        let origin = path.display().to_string();
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|_| SourceError::Unavailable(origin.clone()))?;
        let pack = packs::parse_pack(&content, &origin)?;
        Ok(pack.words)
    }
}

impl WordSource for JsonFileSource {
    async fn fetch_tier(&self, tier: u8) -> Result<Vec<WordRecord>, SourceError> {
        self.read_words(self.tier_path(tier)).await
    }

    async fn fetch_pack(&self, pack_id: &str) -> Result<Vec<WordRecord>, SourceError> {
        self.read_words(self.pack_path(pack_id)).await
    }

    async fn fetch_dialect(&self, dialect: Dialect) -> Result<DialectTable, SourceError> {
        let path = self.dialect_path(dialect);
        let origin = path.display().to_string();
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|_| SourceError::Unavailable(origin.clone()))?;
        serde_json::from_str(&content)
            .map_err(|e| SourceError::Malformed(origin, e.to_string()))
    }
}
