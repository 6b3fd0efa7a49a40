//! Static Guest Directory
//!
//! In-memory allow-list of registered guests, keyed by phone number.
//! Stands in for the property-management system lookup; unknown senders
//! simply get `None`.

use async_trait::async_trait;

use concierge::{DomainError, Guest, GuestDirectory};

/// Fixed in-memory guest directory.
#[derive(Debug, Clone, Default)]
pub struct StaticGuestDirectory {
    guests: Vec<Guest>,
}

impl StaticGuestDirectory {
    pub fn new(guests: Vec<Guest>) -> Self {
        Self { guests }
    }

    /// The demo roster.
    pub fn demo() -> Self {
        Self::new(vec![
            Guest::new(1, "17818163706", "David", "Dangond", "default"),
            Guest::new(2, "+0987654321", "Jane", "Smith", "default"),
        ])
    }
}

#[async_trait]
impl GuestDirectory for StaticGuestDirectory {
    async fn lookup(&self, phone_number: &str) -> Result<Option<Guest>, DomainError> {
        Ok(self
            .guests
            .iter()
            .find(|guest| guest.phone_number == phone_number)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_number_found() {
        let directory = StaticGuestDirectory::demo();
        let guest = directory.lookup("17818163706").await.unwrap().unwrap();
        assert_eq!(guest.first_name, "David");
        assert_eq!(guest.last_name, "Dangond");
    }

    #[tokio::test]
    async fn test_unknown_number_not_found() {
        let directory = StaticGuestDirectory::demo();
        assert!(directory.lookup("10000000000").await.unwrap().is_none());
    }
}
