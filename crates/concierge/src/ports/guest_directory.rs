//! Guest Directory Port
//!
//! Identity lookup for inbound senders. The core trusts whatever guest
//! value it is given and does not re-verify.

use async_trait::async_trait;

use crate::domain::entities::Guest;
use crate::domain::errors::DomainError;

#[async_trait]
pub trait GuestDirectory: Send + Sync {
    /// Look up a guest by the phone number a message arrived from.
    async fn lookup(&self, phone_number: &str) -> Result<Option<Guest>, DomainError>;
}
