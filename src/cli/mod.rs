pub mod fetch;
pub mod merge;
pub mod rank;
pub mod show;

use std::path::PathBuf;

use anyhow::{bail, Result};
use llm_value::config::Config;
use llm_value::dataset::Dataset;
use llm_value::store;

fn resolve_limit(arg: Option<usize>, config: &Config) -> Result<usize> {
    match arg {
        Some(0) => bail!("--limit must be a positive integer"),
        Some(n) => Ok(n),
        None => Ok(config.ranking.limit),
    }
}

fn load_dataset(config: &Config, path: Option<PathBuf>, limit: usize) -> Result<Dataset> {
    let path = match path {
        Some(p) => p,
        None => config.data_dir(None)?.dataset_path(),
    };
    if !path.exists() {
        bail!(
            "No dataset at {} (run `llm-value merge` first)",
            path.display()
        );
    }
    store::load_dataset(&path, limit)
}
