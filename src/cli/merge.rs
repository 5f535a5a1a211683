use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};

use llm_value::config::Config;
use llm_value::data::{Provenance, SourceRecord};
use llm_value::dataset::Dataset;
use llm_value::merge::merge_with_report;

use super::resolve_limit;

pub fn run(
    config: &Config,
    data_dir: Option<PathBuf>,
    out: Option<PathBuf>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let limit = resolve_limit(limit, config)?;
    let store = config.data_dir(data_dir)?;

    let seeds = store.load_pricing()?;
    let mut records: BTreeMap<String, Vec<SourceRecord>> = BTreeMap::new();
    for source in &config.sources {
        let loaded = store.load_source(source, config.data.use_fallback)?;
        records.insert(source.key.clone(), loaded);
    }

    let outcome = merge_with_report(&seeds, &config.sources, &records);
    let dataset = Dataset::build(outcome.models, limit).stamp(Utc::now());
    let path = store.save_dataset(&dataset, out.as_deref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dataset)?);
        return Ok(());
    }

    println!(
        "Merged {} models into {}\n",
        dataset.total_models,
        path.display()
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Source", "Records", "Data", "Matched models"]);
    for source in &config.sources {
        let list = records.get(&source.key).map(Vec::as_slice).unwrap_or(&[]);
        let data = if list.iter().any(|r| r.provenance == Provenance::Fallback) {
            "fallback"
        } else if list.is_empty() {
            "-"
        } else {
            "live"
        };
        let matched = outcome
            .report
            .matched
            .get(&source.key)
            .copied()
            .unwrap_or(0);
        table.add_row(vec![
            source.key.clone(),
            list.len().to_string(),
            data.to_string(),
            matched.to_string(),
        ]);
    }
    println!("{table}");

    if outcome.report.duplicate_ids > 0 {
        println!(
            "\nSkipped {} pricing entries with an id already in the catalog",
            outcome.report.duplicate_ids
        );
    }

    let ambiguities = &outcome.report.ambiguities;
    if !ambiguities.is_empty() {
        println!(
            "\n{} matches had more than one plausible candidate (first match kept):\n",
            ambiguities.len()
        );
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec!["Model", "Source", "Chosen", "Other candidates"]);
        for a in ambiguities {
            table.add_row(vec![
                a.model_id.clone(),
                a.source.clone(),
                a.chosen.clone(),
                a.rivals.to_string(),
            ]);
        }
        println!("{table}");
    }

    Ok(())
}
