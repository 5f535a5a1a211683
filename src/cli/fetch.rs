use std::path::PathBuf;

use anyhow::Result;
use chrono::{SecondsFormat, Utc};

use llm_value::api;
use llm_value::config::Config;

pub fn run(config: &Config, data_dir: Option<PathBuf>) -> Result<()> {
    let store = config.data_dir(data_dir)?;

    eprintln!("Fetching OpenRouter pricing...");
    let seeds = api::fetch_pricing()?;

    let collected_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let path = store.save_pricing(&seeds, &collected_at)?;

    println!("Saved {} models to {}", seeds.len(), path.display());
    Ok(())
}
