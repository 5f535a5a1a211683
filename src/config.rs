use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::ranking::DEFAULT_LIMIT;
use crate::sources::{default_sources, BenchmarkSource};
use crate::store::DataDir;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default = "default_sources")]
    pub sources: Vec<BenchmarkSource>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            ranking: RankingConfig::default(),
            sources: default_sources(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default = "default_use_fallback")]
    pub use_fallback: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: None,
            use_fallback: default_use_fallback(),
        }
    }
}

fn default_use_fallback() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RankingConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("llm-value").join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Some(p) => p,
            None => return Ok(Self::default()),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config.toml")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.ranking.limit == 0 {
            anyhow::bail!("ranking.limit must be at least 1");
        }

        let mut keys = HashSet::new();
        let mut categories = HashSet::new();
        for source in &self.sources {
            if !keys.insert(source.key.as_str()) {
                anyhow::bail!("Duplicate source key '{}'", source.key);
            }
            if let Some(category) = source.category {
                if !categories.insert(category) {
                    anyhow::bail!(
                        "Source '{}' scores category {:?}, which another source already scores",
                        source.key,
                        category
                    );
                }
            }
        }
        Ok(())
    }

    /// Data directory: CLI override, then config, then the platform default.
    pub fn data_dir(&self, cli_override: Option<PathBuf>) -> Result<DataDir> {
        let root = cli_override
            .or_else(|| self.data.dir.clone())
            .or_else(DataDir::default_root)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Ok(DataDir::new(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::Category;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ranking.limit, 50);
        assert!(config.data.use_fallback);
        assert_eq!(config.sources.len(), 3);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.ranking.limit, 50);
        assert_eq!(config.sources, default_sources());
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::parse(
            r#"
            [data]
            dir = "/tmp/llm-value"
            use_fallback = false

            [ranking]
            limit = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.data.dir, Some(PathBuf::from("/tmp/llm-value")));
        assert!(!config.data.use_fallback);
        assert_eq!(config.ranking.limit, 10);
    }

    #[test]
    fn test_custom_sources() {
        let config = Config::parse(
            r#"
            [[sources]]
            key = "swe_bench_verified"
            metric = "swe_bench_verified"
            scale = "coding"
            category = "coding"
            file = "swebench_leaderboard.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.sources.len(), 1);
        assert_eq!(config.sources[0].category, Some(Category::Coding));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let err = Config::parse(
            r#"
            [[sources]]
            key = "a"
            metric = "a"
            category = "general"
            file = "a.json"

            [[sources]]
            key = "b"
            metric = "b"
            category = "general"
            file = "b.json"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("already scores"));
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert!(Config::parse("[ranking]\nlimit = 0").is_err());
    }

    #[test]
    fn test_data_dir_override_wins() {
        let mut config = Config::default();
        config.data.dir = Some(PathBuf::from("/from/config"));
        let dir = config.data_dir(Some(PathBuf::from("/from/cli"))).unwrap();
        assert_eq!(dir.dataset_path(), PathBuf::from("/from/cli/processed/final_dataset.json"));
    }
}
