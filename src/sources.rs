use serde::{Deserialize, Serialize};

use crate::normalize::Scale;

/// Cost-benefit category a benchmark source contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Coding,
    General,
}

/// How one benchmark source feeds the unified record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BenchmarkSource {
    /// Slot name under `benchmarks` in the unified record.
    pub key: String,
    /// Field read from matched records.
    pub metric: String,
    #[serde(default)]
    pub scale: Scale,
    #[serde(default)]
    pub category: Option<Category>,
    /// Raw file name under the data directory.
    pub file: String,
}

impl BenchmarkSource {
    fn new(key: &str, metric: &str, scale: Scale, category: Option<Category>, file: &str) -> Self {
        Self {
            key: key.to_string(),
            metric: metric.to_string(),
            scale,
            category,
            file: file.to_string(),
        }
    }
}

pub fn default_sources() -> Vec<BenchmarkSource> {
    vec![
        BenchmarkSource::new(
            "arena_elo",
            "elo_rating",
            Scale::Elo,
            None,
            "arena_leaderboard.json",
        ),
        BenchmarkSource::new(
            "swe_bench_full",
            "swe_bench_full",
            Scale::Coding,
            Some(Category::Coding),
            "swebench_leaderboard.json",
        ),
        BenchmarkSource::new(
            "intelligence_score",
            "intelligence_score",
            Scale::Intelligence,
            Some(Category::General),
            "artificial_leaderboard.json",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_both_categories_once() {
        let sources = default_sources();
        let coding = sources
            .iter()
            .filter(|s| s.category == Some(Category::Coding))
            .count();
        let general = sources
            .iter()
            .filter(|s| s.category == Some(Category::General))
            .count();
        assert_eq!(coding, 1);
        assert_eq!(general, 1);
    }

    #[test]
    fn test_source_from_toml() {
        let source: BenchmarkSource = toml::from_str(
            r#"
            key = "arena_elo"
            metric = "elo_rating"
            scale = "elo"
            file = "arena.json"
            "#,
        )
        .unwrap();
        assert_eq!(source.scale, Scale::Elo);
        assert!(source.category.is_none());
    }
}
