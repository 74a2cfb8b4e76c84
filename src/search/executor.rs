//! Concurrent fan-out over the search client

use super::models::DomainResult;
use crate::perplexity::SearchClient;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs one client call per domain concurrently and collects every outcome.
pub struct Search {
    client: Arc<dyn SearchClient>,
}

impl Search {
    pub fn new(client: Arc<dyn SearchClient>) -> Self {
        Self { client }
    }

    /// Execute the batch.
    ///
    /// All calls start together and the join waits for every one of them; a
    /// failed call becomes an error entry without touching its siblings.
    /// Output index `i` always corresponds to input index `i`, whatever the
    /// completion order. Duplicate domains each get their own call.
    pub async fn run(&self, domains: &[String], question: Option<&str>) -> Vec<DomainResult> {
        let futures: Vec<_> = domains
            .iter()
            .map(|domain| self.search_domain(domain, question))
            .collect();

        info!("dispatching {} domain queries", futures.len());

        join_all(futures).await
    }

    /// Run a single domain query, converting its failure into a tagged entry
    async fn search_domain(&self, domain: &str, question: Option<&str>) -> DomainResult {
        let start = Instant::now();

        match self.client.search(domain, question).await {
            Ok(answer) => {
                debug!(
                    domain,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "domain query succeeded"
                );
                DomainResult::success(domain, answer)
            }
            Err(e) => {
                warn!(
                    domain,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    error = %e,
                    "domain query failed"
                );
                DomainResult::error(domain, e.to_string())
            }
        }
    }
}
