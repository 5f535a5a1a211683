//! Matching a catalog model against one benchmark source's free-text names.
//!
//! Leaderboards publish display names ("Claude Opus 4.6 Thinking") while the
//! pricing catalog uses slugs ("anthropic/claude-opus-4.6"), so no exact key
//! join is possible. Matching runs in two ordered passes over the candidates:
//!
//! 1. containment: the candidate name occurs inside the model id or name;
//! 2. token: the candidate name contains one of the id slug's hyphen tokens
//!    longer than three characters.
//!
//! The first candidate (in input order) passing step 1 wins; failing that,
//! the first passing step 2. Candidates are never scored against each other.

use crate::data::SourceRecord;

/// Tokens this short are too common to identify a model.
const MIN_TOKEN_CHARS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Containment,
    Token,
}

impl MatchKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Containment => "containment",
            Self::Token => "token",
        }
    }
}

/// Outcome of resolving one model against one source.
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'a> {
    pub record: Option<&'a SourceRecord>,
    pub kind: Option<MatchKind>,
    /// Other candidates that also passed either step.
    pub rivals: usize,
}

impl Resolution<'_> {
    fn none() -> Self {
        Self {
            record: None,
            kind: None,
            rivals: 0,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        self.record.is_some() && self.rivals > 0
    }
}

/// Candidate list for one source with names lower-cased once up front.
pub struct CandidateIndex<'a> {
    entries: Vec<(String, &'a SourceRecord)>,
}

impl<'a> CandidateIndex<'a> {
    pub fn new(candidates: &'a [SourceRecord]) -> Self {
        let entries = candidates
            .iter()
            // An empty name is a substring of every id; such a record identifies nothing.
            .filter(|c| !c.model_name.trim().is_empty())
            .map(|c| (c.model_name.to_lowercase(), c))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolve(&self, canonical_id: &str, canonical_name: &str) -> Resolution<'a> {
        let id = canonical_id.to_lowercase();
        let name = canonical_name.to_lowercase();
        let tokens = slug_tokens(&id);

        let mut contained: Option<&'a SourceRecord> = None;
        let mut token_hit: Option<&'a SourceRecord> = None;
        let mut hits = 0usize;

        for (candidate, record) in &self.entries {
            if id.contains(candidate.as_str()) || name.contains(candidate.as_str()) {
                hits += 1;
                contained.get_or_insert(*record);
            } else if tokens.iter().any(|t| candidate.contains(t)) {
                hits += 1;
                token_hit.get_or_insert(*record);
            }
        }

        let (record, kind) = match (contained, token_hit) {
            (Some(r), _) => (r, MatchKind::Containment),
            (None, Some(r)) => (r, MatchKind::Token),
            (None, None) => return Resolution::none(),
        };

        Resolution {
            record: Some(record),
            kind: Some(kind),
            rivals: hits - 1,
        }
    }
}

/// Find the benchmark record for a catalog model, or none.
pub fn resolve<'a>(
    canonical_id: &str,
    canonical_name: &str,
    candidates: &'a [SourceRecord],
) -> Option<&'a SourceRecord> {
    CandidateIndex::new(candidates)
        .resolve(canonical_id, canonical_name)
        .record
}

/// Hyphen tokens of the id's last path segment, long enough to be distinctive.
fn slug_tokens(id_lower: &str) -> Vec<&str> {
    let slug = id_lower.rsplit('/').next().unwrap_or(id_lower);
    slug.split('-')
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .collect()
}
