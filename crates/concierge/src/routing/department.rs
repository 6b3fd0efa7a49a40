//! Department Resolver
//!
//! Maps task text to a destination department by keyword. The mapping
//! order is part of the contract: the first keyword found in declaration
//! order wins, so it lives in a slice rather than a map.

use crate::domain::Department;

/// Ordered keyword → department mapping. Declaration order is the
/// tie-break order.
const DEPARTMENT_KEYWORDS: [(&str, Department); 9] = [
    ("towels", Department::Housekeeping),
    ("cleaning", Department::Housekeeping),
    ("room service", Department::RoomService),
    ("food", Department::RoomService),
    ("technical issue", Department::Maintenance),
    ("light", Department::Maintenance),
    ("leak", Department::Maintenance),
    ("heat", Department::Maintenance),
    ("air conditioning", Department::Maintenance),
];

/// Resolve the destination department for a task message.
///
/// Substring match over the lower-cased text; falls back to `General`
/// when no keyword matches.
pub fn resolve_department(text: &str) -> Department {
    let lowered = text.to_lowercase();
    DEPARTMENT_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, department)| *department)
        .unwrap_or(Department::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_housekeeping_keywords() {
        assert_eq!(
            resolve_department("I need fresh towels"),
            Department::Housekeeping
        );
        assert_eq!(
            resolve_department("the room needs cleaning"),
            Department::Housekeeping
        );
    }

    #[test]
    fn test_room_service_keywords() {
        assert_eq!(
            resolve_department("can I order room service"),
            Department::RoomService
        );
        assert_eq!(
            resolve_department("please send food up"),
            Department::RoomService
        );
    }

    #[test]
    fn test_maintenance_keywords() {
        assert_eq!(
            resolve_department("there is a leak in my bathroom"),
            Department::Maintenance
        );
        assert_eq!(
            resolve_department("the LIGHT is broken"),
            Department::Maintenance
        );
        assert_eq!(
            resolve_department("air conditioning is too loud"),
            Department::Maintenance
        );
    }

    #[test]
    fn test_no_match_falls_back_to_general() {
        assert_eq!(
            resolve_department("please bring my luggage up"),
            Department::General
        );
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        // "towels" is declared before "cleaning" and before any
        // maintenance keyword, so it wins even when both are present.
        assert_eq!(
            resolve_department("towels got soaked by the leak"),
            Department::Housekeeping
        );
        assert_eq!(
            resolve_department("cleaning crew left the light on"),
            Department::Housekeeping
        );
    }
}
