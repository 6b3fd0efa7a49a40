//! Persona - the voice the hotel speaks with
//!
//! Injected into both synthesis paths at startup instead of being baked
//! into prompt strings.

use serde::{Deserialize, Serialize};

/// Identity used in guest-facing prompts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    /// Named hotel representative the model speaks as.
    pub representative: String,
    /// Property name as spoken to guests.
    pub hotel: String,
    /// Short venue descriptor used in the informational prompt.
    pub venue: String,
}

impl Persona {
    pub fn new(
        representative: impl Into<String>,
        hotel: impl Into<String>,
        venue: impl Into<String>,
    ) -> Self {
        Self {
            representative: representative.into(),
            hotel: hotel.into(),
            venue: venue.into(),
        }
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::new(
            "Karim",
            "Ritz-Carlton, Bachelor Gulch",
            "the ski resort: Ritz Carlton Bachelor Gulch",
        )
    }
}
