//! regsearch: batch regulatory certification search over the Perplexity API
//!
//! Accepts a list of free-text domain queries, fans one concurrent upstream
//! call out per query, and reports every per-query outcome in request order.

pub mod config;
pub mod perplexity;
pub mod search;
pub mod web;

pub use config::Settings;
pub use perplexity::{Answer, PerplexityClient, SearchClient, SearchError};
pub use search::{DomainResult, Search, SearchRequest, SearchResponse};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
