//! Intent - coarse classification of a guest message

use serde::{Deserialize, Serialize};

/// What a guest message is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// An actionable request to route to a department.
    Task,
    /// An informational query for the search-augmented responder.
    Search,
    /// Defensive: the classifier returned nothing recognizable.
    Undetermined,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Task => write!(f, "task"),
            Intent::Search => write!(f, "search"),
            Intent::Undetermined => write!(f, "undetermined"),
        }
    }
}

impl std::str::FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "task" => Ok(Intent::Task),
            "search" => Ok(Intent::Search),
            "undetermined" => Ok(Intent::Undetermined),
            _ => Err(format!("Unknown intent: {}", s)),
        }
    }
}
