//! Task Record Entity
//!
//! Structured payload representing one actionable guest request. Built
//! from a single message, consumed immediately by the acknowledgment
//! synthesizer and handed off to the task-tracking endpoint. Write-once:
//! no identity, no update, no delete.

use serde::{Deserialize, Serialize};

use crate::domain::entities::guest::{Guest, RoomAssignment};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::Department;

/// One actionable guest request, routed to a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub department: Department,
    pub guest_first_name: String,
    pub guest_last_name: String,
    pub room_number: u32,
    /// The raw guest message, unchanged.
    pub message: String,
}

impl TaskRecord {
    /// Assemble a task record from one guest message.
    ///
    /// Pure assembly: inputs pass through unchanged. The only validation
    /// is that the guest identity and the message are non-empty.
    pub fn assemble(
        guest: &Guest,
        department: Department,
        room: RoomAssignment,
        message: &str,
    ) -> Result<Self, DomainError> {
        if guest.first_name.trim().is_empty() || guest.last_name.trim().is_empty() {
            return Err(DomainError::UnexpectedRecordShape(
                "guest name is empty".to_string(),
            ));
        }
        if message.trim().is_empty() {
            return Err(DomainError::UnexpectedRecordShape(
                "message is empty".to_string(),
            ));
        }

        Ok(Self {
            department,
            guest_first_name: guest.first_name.clone(),
            guest_last_name: guest.last_name.clone(),
            room_number: room.number(),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest() -> Guest {
        Guest::new(1, "17818163706", "Dana", "Rivera", "default")
    }

    #[test]
    fn test_assembly_round_trips_inputs() {
        let g = guest();
        let room = RoomAssignment::for_guest(&g);
        let record =
            TaskRecord::assemble(&g, Department::Housekeeping, room, "I need towels").unwrap();

        assert_eq!(record.department, Department::Housekeeping);
        assert_eq!(record.guest_first_name, "Dana");
        assert_eq!(record.guest_last_name, "Rivera");
        assert_eq!(record.room_number, room.number());
        assert_eq!(record.message, "I need towels");
    }

    #[test]
    fn test_empty_message_rejected() {
        let g = guest();
        let room = RoomAssignment::for_guest(&g);
        let err = TaskRecord::assemble(&g, Department::General, room, "   ").unwrap_err();
        assert!(matches!(err, DomainError::UnexpectedRecordShape(_)));
    }

    #[test]
    fn test_empty_guest_name_rejected() {
        let g = Guest::new(1, "17818163706", "", "Rivera", "default");
        let room = RoomAssignment::for_guest(&g);
        let err = TaskRecord::assemble(&g, Department::General, room, "towels").unwrap_err();
        assert!(matches!(err, DomainError::UnexpectedRecordShape(_)));
    }
}
