//! Message Delivery Port
//!
//! Outbound delivery to the guest's messaging channel. Fire-and-forget
//! from the core's perspective: delivery failures are logged by callers,
//! never fed back into routing decisions.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

#[async_trait]
pub trait MessageChannel: Send + Sync {
    /// Deliver `text` to `recipient` (channel-specific address).
    async fn deliver(&self, recipient: &str, text: &str) -> Result<(), DomainError>;
}
