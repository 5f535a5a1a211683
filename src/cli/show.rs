use std::path::PathBuf;

use anyhow::Result;

use llm_value::config::Config;
use llm_value::data::UnifiedModel;
use llm_value::ranking::Dimension;

use super::{load_dataset, resolve_limit};

pub fn model(config: &Config, model_id: &str, dataset: Option<PathBuf>, json: bool) -> Result<()> {
    let limit = resolve_limit(None, config)?;
    let dataset = load_dataset(config, dataset, limit)?;

    let model = dataset
        .find(model_id)
        .ok_or_else(|| anyhow::anyhow!("Model '{}' not found", model_id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(model)?);
        return Ok(());
    }

    print_detail(model);

    println!("Rankings");
    println!("--------");
    for dimension in Dimension::ALL {
        let position = dataset
            .rankings
            .get(dimension)
            .iter()
            .find(|e| e.model_id == model.id)
            .map(|e| format!("#{}", e.rank))
            .unwrap_or_else(|| "-".to_string());
        println!("{:<14} {}", format!("{}:", dimension.label()), position);
    }

    Ok(())
}

fn print_detail(m: &UnifiedModel) {
    println!("{}", m.name);
    println!("{}", "=".repeat(m.name.len()));
    println!();
    println!("ID:          {}", m.id);
    println!("Provider:    {}", m.provider);
    println!("Context:     {} tokens", m.context_str());
    println!();

    println!("Pricing (per million tokens)");
    println!("----------------------------");
    println!("Prompt:      ${:.2}", m.pricing.prompt);
    println!("Completion:  ${:.2}", m.pricing.completion);
    if let Some(image) = m.pricing.image {
        println!("Image:       ${}", image);
    }
    if let Some(request) = m.pricing.request {
        println!("Request:     ${}", request);
    }
    println!();

    println!("Benchmarks");
    println!("----------");
    for (key, value) in &m.benchmarks {
        match value {
            Some(v) => println!("{:<20} {}", key, v),
            None => println!("{:<20} -", key),
        }
    }
    println!();

    println!("Cost-benefit");
    println!("------------");
    println!("Coding:      {:.2}", m.cost_benefit_scores.coding);
    println!("General:     {:.2}", m.cost_benefit_scores.general);
    println!();
}
