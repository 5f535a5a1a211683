use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Per-million-token rates as published by the pricing catalog.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Pricing {
    #[serde(default)]
    pub prompt: f64,
    #[serde(default)]
    pub completion: f64,
    #[serde(default)]
    pub image: Option<f64>,
    #[serde(default)]
    pub request: Option<f64>,
}

/// One model as observed in the primary pricing source.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PricingSeed {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub context_length: u64,
    #[serde(default)]
    pub pricing: Pricing,
}

/// Whether a benchmark record came from a live collection or from the
/// placeholder leaderboard used when collection failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    #[default]
    Live,
    Fallback,
}

/// One benchmark observation from one source.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SourceRecord {
    #[serde(default)]
    pub source: String,
    pub model_name: String,
    #[serde(default)]
    pub collected_at: Option<String>,
    #[serde(default)]
    pub provenance: Provenance,
    #[serde(flatten)]
    pub metrics: BTreeMap<String, Value>,
}

impl SourceRecord {
    /// Numeric value of a metric. Only JSON numbers count: text that the
    /// collector failed to parse is treated as missing.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).and_then(Value::as_f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct CostBenefitScores {
    #[serde(default)]
    pub coding: f64,
    #[serde(default)]
    pub general: f64,
}

/// The reconciled record for one model across every source.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UnifiedModel {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub context_length: u64,
    pub pricing: Pricing,
    pub benchmarks: BTreeMap<String, Option<f64>>,
    pub cost_benefit_scores: CostBenefitScores,
}

impl UnifiedModel {
    pub fn context_str(&self) -> String {
        if self.context_length == 0 {
            "-".to_string()
        } else {
            format_tokens(self.context_length)
        }
    }

    pub fn cost_str(&self) -> String {
        format!(
            "{}/{}",
            cost_short(self.pricing.prompt),
            cost_short(self.pricing.completion)
        )
    }
}

/// Provider slug taken from the id prefix, `"unknown"` when the id has none.
pub fn provider_of(id: &str) -> &str {
    id.split_once('/').map(|(p, _)| p).unwrap_or("unknown")
}

/// Per-million rate for table columns; more decimals the cheaper it gets.
pub fn cost_short(value: f64) -> String {
    let decimals = match value {
        v if v <= 0.0 => return "free".to_string(),
        v if v >= 100.0 => 0,
        v if v >= 1.0 => 1,
        v if v >= 0.01 => 2,
        _ => 3,
    };
    format!("${:.*}", decimals, value)
}

/// Context window size with a k/M suffix, e.g. `128k`, `1.5M`.
pub fn format_tokens(n: u64) -> String {
    const UNITS: [(u64, &str); 2] = [(1_000_000, "M"), (1_000, "k")];

    for (scale, suffix) in UNITS {
        if n >= scale {
            let scaled = format!("{:.1}", n as f64 / scale as f64);
            let trimmed = scaled.strip_suffix(".0").unwrap_or(&scaled);
            return format!("{trimmed}{suffix}");
        }
    }
    n.to_string()
}
