//! Search orchestration module
//!
//! Fans one client call per domain out concurrently, joins them all, and
//! reassembles an order-preserving result list.

mod executor;
mod models;

pub use executor::Search;
pub use models::{DomainOutcome, DomainResult, SearchRequest, SearchResponse};
