//! Wire types for the Perplexity chat completions API

use serde::{Deserialize, Serialize};

/// Request body for a chat completions call
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f64,
    /// Conversation messages (system prompt + user query)
    pub messages: Vec<Message>,
    /// Ask the API to return the web sources it grounded the answer on
    pub include_search_results: bool,
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response body of a chat completions call
///
/// Only the fields the service consumes are modeled; everything else in the
/// upstream body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Citation payload, passed through untouched when present
    #[serde(default)]
    pub search_results: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Message,
}

/// Normalized answer for one domain query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The substantive text content returned by the model
    pub content: String,
    /// Web sources the answer was grounded on, passed through opaquely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_results: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serialization() {
        let request = ChatRequest {
            model: "sonar-pro".to_string(),
            temperature: 0.2,
            messages: vec![Message::system("be terse"), Message::user("honey export")],
            include_search_results: true,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "sonar-pro");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "honey export");
        assert_eq!(json["include_search_results"], true);
    }

    #[test]
    fn test_chat_response_ignores_unknown_fields() {
        let body = serde_json::json!({
            "id": "abc",
            "usage": {"prompt_tokens": 10},
            "choices": [{"message": {"role": "assistant", "content": "hello"}}]
        });

        let response: ChatResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.content, "hello");
        assert!(response.search_results.is_none());
    }

    #[test]
    fn test_answer_omits_empty_search_results() {
        let answer = Answer {
            content: "text".to_string(),
            search_results: None,
        };
        let json = serde_json::to_value(&answer).unwrap();
        assert!(json.get("search_results").is_none());
    }
}
