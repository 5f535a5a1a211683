//! Bounded leaderboards over the unified catalog.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::data::UnifiedModel;

pub const DEFAULT_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Price,
    CodingCostBenefit,
    GeneralCostBenefit,
    ContextWindow,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Self::Price,
        Self::CodingCostBenefit,
        Self::GeneralCostBenefit,
        Self::ContextWindow,
    ];

    /// Key of this ranking in the dataset envelope.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Price => "by_price",
            Self::CodingCostBenefit => "by_coding_cost_benefit",
            Self::GeneralCostBenefit => "by_general_cost_benefit",
            Self::ContextWindow => "by_context_window",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Price => "Price ($/M in)",
            Self::CodingCostBenefit => "Coding value",
            Self::GeneralCostBenefit => "General value",
            Self::ContextWindow => "Context",
        }
    }

    /// Cheapest first for price, highest first otherwise.
    pub fn ascending(&self) -> bool {
        matches!(self, Self::Price)
    }

    fn value(&self, model: &UnifiedModel) -> RankedValue {
        match self {
            Self::Price => RankedValue::Price(model.pricing.prompt),
            Self::CodingCostBenefit => RankedValue::Score(model.cost_benefit_scores.coding),
            Self::GeneralCostBenefit => RankedValue::Score(model.cost_benefit_scores.general),
            Self::ContextWindow => RankedValue::Context(model.context_length),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RankedValue {
    Price(f64),
    Score(f64),
    Context(u64),
}

impl RankedValue {
    /// Field name the value is emitted under.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Price(_) => "price",
            Self::Score(_) => "score",
            Self::Context(_) => "context",
        }
    }

    fn as_f64(&self) -> f64 {
        match *self {
            Self::Price(v) | Self::Score(v) => v,
            Self::Context(v) => v as f64,
        }
    }

    fn is_positive(&self) -> bool {
        match *self {
            Self::Price(v) | Self::Score(v) => v > 0.0,
            Self::Context(v) => v > 0,
        }
    }
}

impl std::fmt::Display for RankedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Price(v) => write!(f, "${:.4}", v),
            Self::Score(v) => write!(f, "{:.2}", v),
            Self::Context(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub rank: usize,
    pub model_id: String,
    pub value: RankedValue,
}

impl Serialize for RankingEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("rank", &self.rank)?;
        map.serialize_entry("model_id", &self.model_id)?;
        match self.value {
            RankedValue::Price(v) | RankedValue::Score(v) => {
                map.serialize_entry(self.value.field(), &v)?
            }
            RankedValue::Context(v) => map.serialize_entry(self.value.field(), &v)?,
        }
        map.end()
    }
}

/// Rank the catalog along one dimension, keeping at most `limit` entries.
///
/// Models whose ranked value is zero are left out entirely. Ties keep
/// catalog order.
pub fn rank(catalog: &[UnifiedModel], dimension: Dimension, limit: usize) -> Vec<RankingEntry> {
    let mut ranked: Vec<(&UnifiedModel, RankedValue)> = catalog
        .iter()
        .map(|m| (m, dimension.value(m)))
        .filter(|(_, v)| v.is_positive())
        .collect();

    // sort_by is stable, so equal values keep their first-seen order.
    if dimension.ascending() {
        ranked.sort_by(|a, b| a.1.as_f64().total_cmp(&b.1.as_f64()));
    } else {
        ranked.sort_by(|a, b| b.1.as_f64().total_cmp(&a.1.as_f64()));
    }

    ranked
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, (m, value))| RankingEntry {
            rank: i + 1,
            model_id: m.id.clone(),
            value,
        })
        .collect()
}

/// Every leaderboard the dataset publishes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rankings {
    pub by_price: Vec<RankingEntry>,
    pub by_coding_cost_benefit: Vec<RankingEntry>,
    pub by_general_cost_benefit: Vec<RankingEntry>,
    pub by_context_window: Vec<RankingEntry>,
}

impl Rankings {
    pub fn compute(catalog: &[UnifiedModel], limit: usize) -> Self {
        Self {
            by_price: rank(catalog, Dimension::Price, limit),
            by_coding_cost_benefit: rank(catalog, Dimension::CodingCostBenefit, limit),
            by_general_cost_benefit: rank(catalog, Dimension::GeneralCostBenefit, limit),
            by_context_window: rank(catalog, Dimension::ContextWindow, limit),
        }
    }

    pub fn get(&self, dimension: Dimension) -> &[RankingEntry] {
        match dimension {
            Dimension::Price => &self.by_price,
            Dimension::CodingCostBenefit => &self.by_coding_cost_benefit,
            Dimension::GeneralCostBenefit => &self.by_general_cost_benefit,
            Dimension::ContextWindow => &self.by_context_window,
        }
    }
}
