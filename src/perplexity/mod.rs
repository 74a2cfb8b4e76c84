//! Perplexity API client module
//!
//! Wraps outbound calls to the Perplexity chat completions endpoint and
//! normalizes responses into [`Answer`]s or classified [`SearchError`]s.

mod client;
mod types;

pub use client::{PerplexityClient, SearchClient, SearchError};
pub use types::{Answer, ChatRequest, ChatResponse, Choice, Message};
