//! LLM Provider Port
//!
//! Abstract interface for generative-model invocations, swappable between
//! providers (OpenAI, a local OpenAI-compatible server, etc.).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Options for a completion call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Temperature (0.0 - 2.0)
    pub temperature: Option<f32>,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_tokens: Some(512),
            temperature: Some(0.7),
        }
    }
}

/// Generative model interface.
///
/// Invocations may fail transiently; callers decide whether to absorb or
/// propagate (the acknowledgment path absorbs, the informational path
/// propagates).
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion from messages, returning the text content.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<String, DomainError>;

    /// Provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Model ID being used
    fn model_id(&self) -> &str;
}
