//! Department - destination category for routed tasks

use serde::{Deserialize, Serialize};

/// Fixed set of departments a task can be dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Housekeeping,
    RoomService,
    Maintenance,
    /// Fallback when no department keyword matches.
    General,
}

impl Department {
    /// Human-readable name as it appears in guest-facing prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            Department::Housekeeping => "housekeeping",
            Department::RoomService => "room service",
            Department::Maintenance => "maintenance",
            Department::General => "general",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "housekeeping" => Ok(Department::Housekeeping),
            "room service" | "room_service" => Ok(Department::RoomService),
            "maintenance" => Ok(Department::Maintenance),
            "general" => Ok(Department::General),
            _ => Err(format!("Unknown department: {}", s)),
        }
    }
}
