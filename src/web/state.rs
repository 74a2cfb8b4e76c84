//! Application state shared across handlers

use crate::config::Settings;
use crate::perplexity::SearchClient;
use crate::search::Search;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Fan-out search executor
    pub search: Arc<Search>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, client: Arc<dyn SearchClient>) -> Self {
        Self {
            settings: Arc::new(settings),
            search: Arc::new(Search::new(client)),
        }
    }

    /// Largest batch a single request may carry
    pub fn max_domains(&self) -> usize {
        self.settings.search.max_domains
    }
}
