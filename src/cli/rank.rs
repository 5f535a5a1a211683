use std::path::PathBuf;

use anyhow::Result;
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};

use llm_value::config::Config;
use llm_value::ranking::{rank, Dimension};

use super::{load_dataset, resolve_limit};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DimensionArg {
    /// Cheapest input price first
    Price,
    /// Best coding benchmark per dollar
    Coding,
    /// Best general intelligence per dollar
    General,
    /// Largest context window
    Context,
}

impl From<DimensionArg> for Dimension {
    fn from(arg: DimensionArg) -> Self {
        match arg {
            DimensionArg::Price => Dimension::Price,
            DimensionArg::Coding => Dimension::CodingCostBenefit,
            DimensionArg::General => Dimension::GeneralCostBenefit,
            DimensionArg::Context => Dimension::ContextWindow,
        }
    }
}

pub fn run(
    config: &Config,
    dimension: Dimension,
    limit: Option<usize>,
    dataset: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let limit = resolve_limit(limit, config)?;
    let dataset = load_dataset(config, dataset, limit)?;
    let entries = rank(&dataset.models, dimension, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No models have a {} value", dimension.label());
        return Ok(());
    }

    if let Some(updated) = &dataset.updated_at {
        println!("{} ({} models, updated {})\n", dimension.key(), entries.len(), updated);
    } else {
        println!("{} ({} models)\n", dimension.key(), entries.len());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "ID", "Name", "Cost (in/out)", dimension.label()]);

    for entry in entries {
        let (name, cost) = dataset
            .find(&entry.model_id)
            .map(|m| (m.name.clone(), m.cost_str()))
            .unwrap_or_default();
        table.add_row(vec![
            entry.rank.to_string(),
            entry.model_id,
            name,
            cost,
            entry.value.to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
