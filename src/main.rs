use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spellbank::content::{self, PackLoadError};
use spellbank::misspell::{self, BakeReport};
use spellbank::{config, registry};

/// Offline baker: fills in the `distractors` field of every tier and pack
/// file under the data directory, then rewrites the files atomically.
/// Baking is seeded per word, so reruns are byte-for-byte reproducible.
#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "spellbank=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let data_dir = config::load_data_dir();
  if !data_dir.exists() {
    tracing::error!("word data directory {} does not exist", data_dir.display());
    std::process::exit(1);
  }

  let mut files = Vec::new();
  for tier in &config::TIERS {
    files.push(data_dir.join(format!("tier{}.json", tier.tier)));
  }
  if let Ok(entries) = std::fs::read_dir(data_dir.join("packs")) {
    for entry in entries.filter_map(|e| e.ok()) {
      let path = entry.path();
      if path.extension().is_some_and(|ext| ext == "json") {
        files.push(path);
      }
    }
  }

  let mut totals = BakeReport::default();
  for path in files {
    let mut pack = match content::load_pack_file(&path) {
      Ok(pack) => pack,
      Err(PackLoadError::FileNotFound(_)) => {
        tracing::debug!("{} not present, skipping", path.display());
        continue;
      }
      Err(e) => {
        tracing::error!("{}", e);
        continue;
      }
    };

    let report = misspell::bake_records(&mut pack.words);
    if report.baked == 0 {
      tracing::debug!("{}: all words already baked", path.display());
      continue;
    }

    pack.baked_at = Some(chrono::Utc::now().to_rfc3339());
    match content::save_pack_file(&path, &pack) {
      Ok(()) => tracing::info!(
        "{}: baked {} words ({} short)",
        path.display(),
        report.baked,
        report.short
      ),
      Err(e) => tracing::error!("{}", e),
    }

    totals.baked += report.baked;
    totals.complete += report.complete;
    totals.short += report.short;
  }

  tracing::info!(
    "bake finished: {} words baked, {} complete, {} short",
    totals.baked,
    totals.complete,
    totals.short
  );

  // Smoke-load the freshly baked data the way the game will
  let source = content::JsonFileSource::new(&data_dir);
  let mut registry = registry::WordRegistry::new(source);
  for tier in &config::TIERS {
    registry.load_tier(tier.tier).await;
  }
  tracing::info!("registry smoke load: {} words", registry.len());
}
