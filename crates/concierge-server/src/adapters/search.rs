//! Gemini Search Agent
//!
//! Implements the search-agent port with Gemini's `google_search` tool:
//! the model decides when to search and grounds its final message in the
//! results. Retry behavior is the API's own; this adapter performs none.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use concierge::{DomainError, SearchAgent};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Agent backed by Gemini with the google_search tool enabled.
#[derive(Clone)]
pub struct GeminiSearchAgent {
    client: Client,
    api_key: String,
    model: String,
    max_results: usize,
}

impl GeminiSearchAgent {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_results: 2,
        }
    }

    /// Overrides the Gemini model name if needed.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Cap the grounded results the model is asked to consider.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.max(1);
        self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    tools: Vec<Tool>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize, Default)]
struct Tool {
    #[serde(rename = "google_search")]
    google_search: GoogleSearchConfig,
}

#[derive(Serialize, Default)]
struct GoogleSearchConfig {}

#[async_trait]
impl SearchAgent for GeminiSearchAgent {
    async fn run(&self, query: &str) -> Result<String, DomainError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("query cannot be empty".to_string()));
        }

        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        // The result cap rides along as an instruction; the tool config
        // itself takes no parameters.
        let text = format!(
            "{trimmed} Consider at most {max} search results.",
            max = self.max_results
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text }],
            }],
            tools: vec![Tool::default()],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::ModelInvocation(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::ModelInvocation(format!(
                "search agent returned {status}: {body}"
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| DomainError::ModelInvocation(e.to_string()))?;

        extract_answer(&payload)
            .ok_or_else(|| DomainError::ModelInvocation("agent returned no answer".to_string()))
    }
}

fn extract_answer(root: &Value) -> Option<String> {
    let candidates = root.get("candidates")?.as_array()?;

    let mut collected = Vec::new();
    for candidate in candidates {
        if let Some(parts) = candidate
            .get("content")
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
        {
            for part in parts {
                if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        collected.push(trimmed.to_string());
                    }
                }
            }
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_answer_joins_parts() {
        let payload = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "The spa closes at 7 PM." },
                        { "text": "Enjoy your stay, Dana." }
                    ]
                }
            }]
        });

        assert_eq!(
            extract_answer(&payload).unwrap(),
            "The spa closes at 7 PM.\n\nEnjoy your stay, Dana."
        );
    }

    #[test]
    fn test_extract_answer_skips_empty_parts() {
        let payload = serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "   " }] } }]
        });
        assert!(extract_answer(&payload).is_none());
    }

    #[test]
    fn test_extract_answer_handles_missing_candidates() {
        assert!(extract_answer(&serde_json::json!({})).is_none());
    }

    #[tokio::test]
    async fn test_empty_query_rejected() {
        let agent = GeminiSearchAgent::new("key");
        let err = agent.run("   ").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
