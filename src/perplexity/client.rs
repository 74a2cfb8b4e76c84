//! HTTP client for the Perplexity chat completions API

use super::types::{Answer, ChatRequest, ChatResponse, Message};
use crate::config::{ApiKey, UpstreamSettings};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Cap on how much of an upstream error body is carried around in errors
const BODY_EXCERPT_LEN: usize = 200;

const SYSTEM_PROMPT: &str = "You are a global trade compliance assistant. \
    Respond only with official and verifiable regulatory data from trusted \
    sources (e.g., Eur-Lex, FDA, DGFT, WTO). Format your response strictly \
    as JSON. Do not include commentary, markdown, or assumptions. Only \
    output the final structured JSON.";

/// Failure modes of a single outbound search call
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("request timed out")]
    Timeout,

    #[error("upstream error: {status}")]
    Upstream {
        status: u16,
        /// Bounded excerpt of the upstream body, for logs
        excerpt: String,
    },

    #[error("unparseable upstream response: {0}")]
    Parse(String),

    #[error("network error: {0}")]
    Network(reqwest::Error),
}

/// Abstraction over the external AI search call.
///
/// Implemented by [`PerplexityClient`] in production; the fan-out executor is
/// tested against stub implementations.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Run one search for one domain query, with the caller's question as
    /// optional extra context for the prompt.
    async fn search(&self, domain: &str, question: Option<&str>) -> Result<Answer, SearchError>;
}

/// Production client, one instance shared across all concurrent calls
#[derive(Clone)]
pub struct PerplexityClient {
    http: Client,
    api_key: ApiKey,
    api_url: String,
    model: String,
    temperature: f64,
    timeout: Duration,
}

impl PerplexityClient {
    /// Create a client from upstream settings.
    ///
    /// Fails when the API key is absent so that a misconfigured process
    /// refuses to start instead of answering /search with errors.
    pub fn new(settings: &UpstreamSettings) -> Result<Self> {
        let api_key = settings
            .api_key
            .clone()
            .ok_or_else(|| anyhow::anyhow!("PERPLEXITY_API_KEY environment variable is not set"))?;

        let http = Client::builder().gzip(true).brotli(true).build()?;

        Ok(Self {
            http,
            api_key,
            api_url: settings.api_url.clone(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            timeout: Duration::from_secs(settings.timeout_secs),
        })
    }

    fn build_request(&self, domain: &str, question: Option<&str>) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            temperature: self.temperature,
            messages: vec![
                Message::system(SYSTEM_PROMPT),
                Message::user(user_prompt(domain, question)),
            ],
            include_search_results: true,
        }
    }
}

#[async_trait]
impl SearchClient for PerplexityClient {
    async fn search(&self, domain: &str, question: Option<&str>) -> Result<Answer, SearchError> {
        let payload = self.build_request(domain, question);

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(self.api_key.expose())
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let excerpt = excerpt(&body);
            warn!(domain, status = status.as_u16(), excerpt = %excerpt, "upstream returned error status");
            return Err(SearchError::Upstream {
                status: status.as_u16(),
                excerpt,
            });
        }

        let text = response.text().await.map_err(classify_transport)?;
        let body: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| SearchError::Parse(format!("invalid JSON body: {e}")))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| SearchError::Parse("response carries no message content".to_string()))?;

        debug!(domain, model = %self.model, "perplexity search complete");

        Ok(Answer {
            content,
            search_results: body.search_results,
        })
    }
}

fn user_prompt(domain: &str, question: Option<&str>) -> String {
    let mut prompt = format!(
        "Identify all certifications, licenses, and regulatory approvals relevant to \
         the following topic: {domain}. For each requirement, return the fields: \
         certificate_name, certificate_description, legal_regulation, \
         legal_text_excerpt, legal_text_meaning, registration_fee. Return the result \
         as a JSON array using exactly these field names."
    );
    if let Some(question) = question {
        prompt.push_str(&format!("\n\nThe user's original question, for context: {question}"));
    }
    prompt
}

fn classify_transport(e: reqwest::Error) -> SearchError {
    if e.is_timeout() {
        SearchError::Timeout
    } else {
        SearchError::Network(e)
    }
}

fn excerpt(body: &str) -> String {
    let mut end = BODY_EXCERPT_LEN.min(body.len());
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_string()
}
