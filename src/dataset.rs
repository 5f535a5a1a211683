use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::data::UnifiedModel;
use crate::ranking::Rankings;

/// Published envelope: the unified catalog plus its leaderboards.
///
/// `updated_at` is run metadata attached after the catalog and rankings are
/// computed; it takes no part in equality.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub updated_at: Option<String>,
    pub total_models: usize,
    pub models: Vec<UnifiedModel>,
    pub rankings: Rankings,
}

impl Dataset {
    pub fn build(models: Vec<UnifiedModel>, limit: usize) -> Self {
        let rankings = Rankings::compute(&models, limit);
        Self {
            updated_at: None,
            total_models: models.len(),
            models,
            rankings,
        }
    }

    pub fn stamp(mut self, now: DateTime<Utc>) -> Self {
        self.updated_at = Some(now.to_rfc3339_opts(SecondsFormat::Secs, true));
        self
    }

    pub fn find(&self, model_id: &str) -> Option<&UnifiedModel> {
        self.models.iter().find(|m| m.id == model_id)
    }
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        self.total_models == other.total_models
            && self.models == other.models
            && self.rankings == other.rankings
    }
}
