//! External Service Ports

pub mod llm_provider;
pub mod search_agent;
pub mod transcription;

pub use llm_provider::{ChatMessage, CompletionOptions, LlmProvider, MessageRole};
pub use search_agent::SearchAgent;
pub use transcription::TranscriptionService;
