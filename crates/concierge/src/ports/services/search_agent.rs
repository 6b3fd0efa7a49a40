//! Search Agent Port
//!
//! A search-augmented agent: given a fully prepared query it may invoke a
//! web-search tool before producing its final natural-language message.
//! Retry and tool selection are the agent's own business; this interface
//! only surfaces the final text or a hard failure.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

#[async_trait]
pub trait SearchAgent: Send + Sync {
    /// Run the agent to completion and return its final message.
    async fn run(&self, query: &str) -> Result<String, DomainError>;
}
