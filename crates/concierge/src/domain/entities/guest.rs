//! Guest Entity
//!
//! Identity record for an authenticated guest, owned by the guest
//! directory. The routing core only reads it.

use serde::{Deserialize, Serialize};

/// An authenticated guest on the messaging channel.
///
/// Immutable for the lifetime of one message exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    /// Directory-scoped guest ID
    pub id: i64,
    /// Phone number the message arrived from (E.164, digits only accepted)
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    /// Access role ("default" for regular guests)
    pub role: String,
}

impl Guest {
    pub fn new(
        id: i64,
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            phone_number: phone_number.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            role: role.into(),
        }
    }
}

/// Base offset for the derived placeholder room number.
const ROOM_BASE: u32 = 400;

/// Placeholder room identifier for the current exchange.
///
/// Derived deterministically from the guest's last-name length plus a
/// fixed offset. Not stored, not guaranteed unique; recomputed on every
/// invocation until real reservation data is wired in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomAssignment(pub u32);

impl RoomAssignment {
    /// Derive the placeholder room for a guest.
    pub fn for_guest(guest: &Guest) -> Self {
        Self(ROOM_BASE + guest.last_name.chars().count() as u32)
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RoomAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
