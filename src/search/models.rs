//! Request and response models for batch search

use crate::perplexity::Answer;
use serde::{Deserialize, Serialize};

/// Body of a POST /search request
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    /// Free-text regulatory topics to search, one upstream call each.
    /// Lenient on absence so a missing field reports through validation.
    #[serde(default)]
    pub domains: Vec<String>,
    /// Optional original question, folded into each upstream prompt
    #[serde(default)]
    pub question: Option<String>,
}

/// Per-domain outcome, tagged success or error
#[derive(Debug, Clone, Serialize)]
pub struct DomainResult {
    pub domain: String,
    #[serde(flatten)]
    pub outcome: DomainOutcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DomainOutcome {
    Success { answer: Answer },
    Error { error: String },
}

impl DomainResult {
    pub fn success(domain: impl Into<String>, answer: Answer) -> Self {
        Self {
            domain: domain.into(),
            outcome: DomainOutcome::Success { answer },
        }
    }

    pub fn error(domain: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            outcome: DomainOutcome::Error {
                error: error.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, DomainOutcome::Success { .. })
    }
}

/// Body of a POST /search response.
///
/// `results` holds exactly one entry per requested domain, in request order.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub elapsed_seconds: f64,
    pub results: Vec<DomainResult>,
}
