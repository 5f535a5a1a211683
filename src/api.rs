use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::data::{Pricing, PricingSeed};

const API_URL: &str = "https://openrouter.ai/api/v1/models";

const TOKENS_PER_PRICE_UNIT: f64 = 1_000_000.0;

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    #[serde(default)]
    data: Vec<ApiModel>,
}

#[derive(Debug, Deserialize)]
struct ApiModel {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    context_length: Option<u64>,
    #[serde(default)]
    pricing: ApiPricing,
}

/// OpenRouter quotes prices as decimal strings per single token.
#[derive(Debug, Default, Deserialize)]
struct ApiPricing {
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    completion: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    request: Option<String>,
}

pub fn fetch_pricing() -> Result<Vec<PricingSeed>> {
    let client = reqwest::blocking::Client::builder()
        .user_agent("llm-value")
        .build()
        .context("Failed to build HTTP client")?;

    let response: ModelsResponse = client
        .get(API_URL)
        .send()
        .context("Failed to fetch data from OpenRouter API")?
        .error_for_status()
        .context("OpenRouter API returned an error status")?
        .json()
        .context("Failed to parse API response")?;

    let seeds: Vec<PricingSeed> = response.data.into_iter().map(to_seed).collect();
    info!(models = seeds.len(), "fetched OpenRouter catalog");
    Ok(seeds)
}

fn to_seed(model: ApiModel) -> PricingSeed {
    let p = &model.pricing;
    PricingSeed {
        pricing: Pricing {
            prompt: per_million(p.prompt.as_deref()).unwrap_or(0.0),
            completion: per_million(p.completion.as_deref()).unwrap_or(0.0),
            image: positive(p.image.as_deref()),
            request: positive(p.request.as_deref()),
        },
        context_length: model.context_length.unwrap_or(0),
        id: model.id,
        name: model.name,
    }
}

fn per_million(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| v * TOKENS_PER_PRICE_UNIT)
}

/// Image and request fees are flat; zero means the fee does not apply.
fn positive(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}
