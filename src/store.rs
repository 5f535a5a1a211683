//! On-disk JSON layout for raw per-source files and the final dataset.
//!
//! ```text
//! <data_dir>/raw/openrouter_models.json
//! <data_dir>/raw/<source file>.json
//! <data_dir>/processed/final_dataset.json
//! ```

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::data::{PricingSeed, Provenance, SourceRecord, UnifiedModel};
use crate::dataset::Dataset;
use crate::sources::BenchmarkSource;

pub const PRICING_FILENAME: &str = "openrouter_models.json";
const DATASET_FILENAME: &str = "final_dataset.json";

const FALLBACK_ARENA: &str = include_str!("../data/fallback/arena_elo.json");
const FALLBACK_SWE_BENCH: &str = include_str!("../data/fallback/swe_bench_full.json");
const FALLBACK_INTELLIGENCE: &str = include_str!("../data/fallback/intelligence_score.json");

/// Envelope every collector writes around its records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFile<T> {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub collected_at: Option<String>,
    #[serde(default)]
    pub total_models: usize,
    pub models: Vec<T>,
}

/// Stored dataset as read back from disk. Rankings are not trusted and are
/// recomputed from `models`.
#[derive(Debug, Deserialize)]
struct StoredDataset {
    #[serde(default)]
    updated_at: Option<String>,
    models: Vec<UnifiedModel>,
}

pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn default_root() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("llm-value"))
    }

    pub fn raw_path(&self, file: &str) -> PathBuf {
        self.root.join("raw").join(file)
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.root.join("processed").join(DATASET_FILENAME)
    }

    pub fn load_pricing(&self) -> Result<Vec<PricingSeed>> {
        let path = self.raw_path(PRICING_FILENAME);
        if !path.exists() {
            anyhow::bail!(
                "No pricing data at {} (run `llm-value fetch` first)",
                path.display()
            );
        }
        let raw: RawFile<PricingSeed> = read_json(&path)?;
        Ok(raw.models)
    }

    pub fn save_pricing(&self, seeds: &[PricingSeed], collected_at: &str) -> Result<PathBuf> {
        let path = self.raw_path(PRICING_FILENAME);
        let raw = RawFile {
            source: "openrouter".to_string(),
            collected_at: Some(collected_at.to_string()),
            total_models: seeds.len(),
            models: seeds.to_vec(),
        };
        write_json(&path, &raw)?;
        Ok(path)
    }

    /// Records for one benchmark source. A missing file degrades to the
    /// embedded fallback leaderboard (or nothing) instead of failing the run.
    pub fn load_source(
        &self,
        source: &BenchmarkSource,
        use_fallback: bool,
    ) -> Result<Vec<SourceRecord>> {
        let path = self.raw_path(&source.file);
        if !path.exists() {
            if use_fallback {
                let records = fallback_records(&source.key);
                warn!(
                    source = %source.key,
                    path = %path.display(),
                    records = records.len(),
                    "source file missing, using fallback leaderboard"
                );
                return Ok(records);
            }
            warn!(source = %source.key, path = %path.display(), "source file missing, skipping");
            return Ok(Vec::new());
        }

        let raw: RawFile<SourceRecord> = read_json(&path)?;
        let records = raw
            .models
            .into_iter()
            .map(|mut r| {
                if r.source.is_empty() {
                    r.source = raw.source.clone();
                }
                if r.collected_at.is_none() {
                    r.collected_at = raw.collected_at.clone();
                }
                r
            })
            .collect::<Vec<_>>();
        info!(source = %source.key, records = records.len(), "loaded source");
        Ok(records)
    }

    pub fn save_dataset(&self, dataset: &Dataset, path: Option<&Path>) -> Result<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(|| self.dataset_path());
        write_json(&path, dataset)?;
        Ok(path)
    }
}

pub fn load_dataset(path: &Path, limit: usize) -> Result<Dataset> {
    let stored: StoredDataset = read_json(path)?;
    let dataset = Dataset::build(stored.models, limit);
    Ok(Dataset {
        updated_at: stored.updated_at,
        ..dataset
    })
}

/// Placeholder leaderboards shipped with the binary, tagged as fallback.
pub fn fallback_records(key: &str) -> Vec<SourceRecord> {
    let json = match key {
        "arena_elo" => FALLBACK_ARENA,
        "swe_bench_full" => FALLBACK_SWE_BENCH,
        "intelligence_score" => FALLBACK_INTELLIGENCE,
        _ => return Vec::new(),
    };
    let records: Vec<SourceRecord> = serde_json::from_str(json).unwrap_or_default();
    records
        .into_iter()
        .map(|r| SourceRecord {
            provenance: Provenance::Fallback,
            ..r
        })
        .collect()
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create dir: {}", parent.display()))?;
    }
    let contents = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
