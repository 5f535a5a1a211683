//! Assembles one unified record per priced model from every benchmark source.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, info, warn};

use crate::cost_benefit::{average_price, score};
use crate::data::{provider_of, CostBenefitScores, PricingSeed, SourceRecord, UnifiedModel};
use crate::resolve::CandidateIndex;
use crate::sources::{BenchmarkSource, Category};

/// A match where more than one candidate passed the resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct Ambiguity {
    pub model_id: String,
    pub source: String,
    pub chosen: String,
    pub rivals: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeReport {
    /// Models matched per source key.
    pub matched: BTreeMap<String, usize>,
    pub ambiguities: Vec<Ambiguity>,
    /// Seeds dropped because an earlier seed had the same id.
    pub duplicate_ids: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub models: Vec<UnifiedModel>,
    pub report: MergeReport,
}

/// Merge pricing seeds with benchmark records keyed by source key.
pub fn merge(
    seeds: &[PricingSeed],
    sources: &[BenchmarkSource],
    records: &BTreeMap<String, Vec<SourceRecord>>,
) -> Vec<UnifiedModel> {
    merge_with_report(seeds, sources, records).models
}

pub fn merge_with_report(
    seeds: &[PricingSeed],
    sources: &[BenchmarkSource],
    records: &BTreeMap<String, Vec<SourceRecord>>,
) -> MergeOutcome {
    let indexes: Vec<(&BenchmarkSource, CandidateIndex)> = sources
        .iter()
        .map(|s| {
            let candidates = records.get(&s.key).map(Vec::as_slice).unwrap_or(&[]);
            (s, CandidateIndex::new(candidates))
        })
        .collect();

    let mut report = MergeReport::default();
    for source in sources {
        report.matched.insert(source.key.clone(), 0);
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(seeds.len());
    let mut models = Vec::with_capacity(seeds.len());
    for seed in seeds {
        if !seen.insert(seed.id.as_str()) {
            warn!(model = %seed.id, "duplicate id in pricing catalog, keeping first");
            report.duplicate_ids += 1;
            continue;
        }
        let price = average_price(&seed.pricing);
        let mut benchmarks = BTreeMap::new();
        let mut scores = CostBenefitScores::default();

        for (source, index) in &indexes {
            let resolution = index.resolve(&seed.id, &seed.name);
            let value = resolution.record.and_then(|r| r.metric(&source.metric));

            if let (Some(record), Some(kind)) = (resolution.record, resolution.kind) {
                debug!(
                    model = %seed.id,
                    source = %source.key,
                    candidate = %record.model_name,
                    kind = kind.label(),
                    rivals = resolution.rivals,
                    "matched"
                );
                *report.matched.entry(source.key.clone()).or_default() += 1;
                if resolution.is_ambiguous() {
                    report.ambiguities.push(Ambiguity {
                        model_id: seed.id.clone(),
                        source: source.key.clone(),
                        chosen: record.model_name.clone(),
                        rivals: resolution.rivals,
                    });
                }
            }

            if let Some(category) = source.category {
                let s = score(price, value, source.scale);
                match category {
                    Category::Coding => scores.coding = s,
                    Category::General => scores.general = s,
                }
            }
            benchmarks.insert(source.key.clone(), value);
        }

        models.push(UnifiedModel {
            id: seed.id.clone(),
            name: seed.name.clone(),
            provider: provider_of(&seed.id).to_string(),
            context_length: seed.context_length,
            pricing: seed.pricing.clone(),
            benchmarks,
            cost_benefit_scores: scores,
        });
    }

    info!(
        models = models.len(),
        ambiguous = report.ambiguities.len(),
        duplicates = report.duplicate_ids,
        "merge complete"
    );

    MergeOutcome { models, report }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Pricing, Provenance};
    use crate::ranking::{rank, Dimension};
    use crate::sources::default_sources;

    fn seed(id: &str, name: &str, prompt: f64, completion: f64) -> PricingSeed {
        PricingSeed {
            id: id.to_string(),
            name: name.to_string(),
            context_length: 200_000,
            pricing: Pricing {
                prompt,
                completion,
                image: None,
                request: None,
            },
        }
    }

    fn bench(source: &str, name: &str, metric: &str, value: f64) -> SourceRecord {
        let mut metrics = BTreeMap::new();
        metrics.insert(metric.to_string(), serde_json::json!(value));
        SourceRecord {
            source: source.to_string(),
            model_name: name.to_string(),
            collected_at: Some("2026-02-01T00:00:00Z".to_string()),
            provenance: Provenance::Live,
            metrics,
        }
    }

    fn sample_records() -> BTreeMap<String, Vec<SourceRecord>> {
        let mut records = BTreeMap::new();
        records.insert(
            "arena_elo".to_string(),
            vec![bench("arena", "Gemini 3 Pro", "elo_rating", 1356.0)],
        );
        records.insert(
            "swe_bench_full".to_string(),
            vec![
                bench("swebench", "GPT-4", "swe_bench_full", 14.0),
                bench("swebench", "Claude Opus 4.6", "swe_bench_full", 50.0),
            ],
        );
        records.insert(
            "intelligence_score".to_string(),
            vec![bench("artificial_analysis", "Claude Opus 4.6", "intelligence_score", 95.0)],
        );
        records
    }

    #[test]
    fn test_unified_record() {
        let seeds = vec![seed(
            "anthropic/claude-opus-4.6",
            "Anthropic: Claude Opus 4.6",
            1.0,
            3.0,
        )];
        let models = merge(&seeds, &default_sources(), &sample_records());
        assert_eq!(models.len(), 1);

        let m = &models[0];
        assert_eq!(m.provider, "anthropic");
        assert_eq!(m.benchmarks["swe_bench_full"], Some(50.0));
        assert_eq!(m.benchmarks["intelligence_score"], Some(95.0));
        assert_eq!(m.benchmarks["arena_elo"], None);
        assert_eq!(m.cost_benefit_scores.coding, 2500.0);
        assert_eq!(m.cost_benefit_scores.general, 4750.0);
    }

    #[test]
    fn test_unmatched_source_is_none_and_scores_zero() {
        let seeds = vec![seed("mistralai/mistral-large", "Mistral Large", 2.0, 6.0)];
        let models = merge(&seeds, &default_sources(), &sample_records());
        let m = &models[0];
        assert!(m.benchmarks.values().all(Option::is_none));
        assert_eq!(m.cost_benefit_scores, CostBenefitScores::default());
    }

    #[test]
    fn test_free_model_scores_zero() {
        let seeds = vec![seed(
            "anthropic/claude-opus-4.6",
            "Anthropic: Claude Opus 4.6",
            0.0,
            0.0,
        )];
        let models = merge(&seeds, &default_sources(), &sample_records());
        let m = &models[0];
        assert_eq!(m.benchmarks["swe_bench_full"], Some(50.0));
        assert_eq!(m.cost_benefit_scores.coding, 0.0);
        assert_eq!(m.cost_benefit_scores.general, 0.0);
    }

    #[test]
    fn test_missing_source_list() {
        let seeds = vec![seed("openai/gpt-4", "OpenAI: GPT-4", 30.0, 60.0)];
        let outcome = merge_with_report(&seeds, &default_sources(), &BTreeMap::new());
        let m = &outcome.models[0];
        assert_eq!(m.benchmarks.len(), 3);
        assert!(m.benchmarks.values().all(Option::is_none));
        assert_eq!(outcome.report.matched["swe_bench_full"], 0);
    }

    #[test]
    fn test_text_metric_is_none() {
        let mut records = BTreeMap::new();
        let mut record = bench("swebench", "GPT-4", "other", 1.0);
        record
            .metrics
            .insert("swe_bench_full".to_string(), serde_json::json!("14%"));
        records.insert("swe_bench_full".to_string(), vec![record]);

        let seeds = vec![seed("openai/gpt-4", "OpenAI: GPT-4", 30.0, 60.0)];
        let outcome = merge_with_report(&seeds, &default_sources(), &records);
        assert_eq!(outcome.report.matched["swe_bench_full"], 1);
        assert_eq!(outcome.models[0].benchmarks["swe_bench_full"], None);
        assert_eq!(outcome.models[0].cost_benefit_scores.coding, 0.0);
    }

    #[test]
    fn test_ambiguity_reported() {
        let mut records = BTreeMap::new();
        records.insert(
            "swe_bench_full".to_string(),
            vec![
                bench("swebench", "Claude Opus 4.6 Thinking", "swe_bench_full", 60.0),
                bench("swebench", "Claude Opus 4.6", "swe_bench_full", 50.0),
            ],
        );
        let seeds = vec![seed(
            "anthropic/claude-opus-4.6",
            "Anthropic: Claude Opus 4.6",
            1.0,
            3.0,
        )];
        let outcome = merge_with_report(&seeds, &default_sources(), &records);
        assert_eq!(outcome.models[0].benchmarks["swe_bench_full"], Some(50.0));
        assert_eq!(
            outcome.report.ambiguities,
            vec![Ambiguity {
                model_id: "anthropic/claude-opus-4.6".to_string(),
                source: "swe_bench_full".to_string(),
                chosen: "Claude Opus 4.6".to_string(),
                rivals: 1,
            }]
        );
    }

    #[test]
    fn test_duplicate_seed_ids_collapse() {
        let seeds = vec![
            seed("anthropic/claude-opus-4.6", "Anthropic: Claude Opus 4.6", 1.0, 3.0),
            seed("anthropic/claude-opus-4.6", "Claude Opus 4.6 (copy)", 2.0, 6.0),
        ];
        let outcome = merge_with_report(&seeds, &default_sources(), &sample_records());
        assert_eq!(outcome.models.len(), 1);
        assert_eq!(outcome.models[0].pricing.prompt, 1.0, "first seed should win");
        assert_eq!(outcome.report.duplicate_ids, 1);
        assert_eq!(outcome.report.matched["swe_bench_full"], 1);

        let by_price = rank(&outcome.models, Dimension::Price, 50);
        assert_eq!(by_price.len(), 1);
        assert_eq!(by_price[0].model_id, "anthropic/claude-opus-4.6");
    }

    #[test]
    fn test_merge_is_deterministic() {
        let seeds = vec![
            seed("anthropic/claude-opus-4.6", "Anthropic: Claude Opus 4.6", 15.0, 75.0),
            seed("openai/gpt-4", "OpenAI: GPT-4", 30.0, 60.0),
            seed("google/gemini-3-pro", "Google: Gemini 3 Pro", 2.0, 12.0),
        ];
        let first = merge(&seeds, &default_sources(), &sample_records());
        let second = merge(&seeds.clone(), &default_sources(), &sample_records());
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_preserves_seed_order() {
        let seeds = vec![
            seed("z-ai/glm-5", "Z.AI: GLM 5", 1.0, 3.0),
            seed("anthropic/claude-opus-4.6", "Anthropic: Claude Opus 4.6", 1.0, 3.0),
        ];
        let models = merge(&seeds, &default_sources(), &sample_records());
        let ids: Vec<&str> = models.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["z-ai/glm-5", "anthropic/claude-opus-4.6"]);
    }
}
