//! Settings structures for regsearch configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    pub search: SearchSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (REGSEARCH_* / PERPLEXITY_* prefixes)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("REGSEARCH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("REGSEARCH_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("PERPLEXITY_API_KEY") {
            if !val.trim().is_empty() {
                self.upstream.api_key = Some(ApiKey::new(val.trim()));
            }
        }
        if let Ok(val) = std::env::var("PERPLEXITY_MODEL") {
            if !val.trim().is_empty() {
                self.upstream.model = val.trim().to_string();
            }
        }
        if let Ok(val) = std::env::var("PERPLEXITY_API_URL") {
            self.upstream.api_url = val;
        }
    }

    /// The upstream credential, required before the service can answer /search
    pub fn api_key(&self) -> Option<&ApiKey> {
        self.upstream.api_key.as_ref()
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Outgoing Perplexity request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamSettings {
    /// Chat completions endpoint URL
    pub api_url: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature (kept low for reproducible compliance data)
    pub temperature: f64,
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
    /// API key, environment-only, never read from or written to the settings file
    #[serde(skip)]
    pub api_key: Option<ApiKey>,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            api_url: "https://api.perplexity.ai/chat/completions".to_string(),
            model: "sonar-pro".to_string(),
            temperature: 0.2,
            timeout_secs: 30,
            api_key: None,
        }
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum number of domains accepted in a single batch
    pub max_domains: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { max_domains: 50 }
    }
}

/// Upstream credential. Redacted in Debug output so it never leaks into logs.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}
