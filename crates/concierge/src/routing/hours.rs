//! Business-Hours Lookup Table
//!
//! Data-driven answers for the handful of questions the property gets
//! constantly. Consulted by the informational responder before falling
//! back to generation, so these never cost a model call.

use serde::{Deserialize, Serialize};

/// One canned question/answer pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursEntry {
    /// Question as guests type it (matched after trim + lowercase).
    pub question: String,
    pub answer: String,
}

impl HoursEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Static lookup table for venue hours.
#[derive(Debug, Clone, Default)]
pub struct HoursTable {
    entries: Vec<HoursEntry>,
}

impl HoursTable {
    /// Table with no entries; every query falls through to generation.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<HoursEntry>) -> Self {
        Self { entries }
    }

    /// The property's standing entries.
    pub fn standard() -> Self {
        Self::from_entries(vec![
            HoursEntry::new("what time does the spa close?", "The spa closes at 7:00 PM"),
            HoursEntry::new("what time does the spa open?", "The spa opens at 9:00 AM"),
            HoursEntry::new(
                "what time does talons close?",
                "The restaurant closes at 3:30 PM",
            ),
            HoursEntry::new(
                "what time does talons open?",
                "The restaurant opens at 11:00 AM",
            ),
        ])
    }

    /// Look up a canned answer for a query.
    ///
    /// Exact match on the normalized (trimmed, lower-cased) question.
    pub fn lookup(&self, query: &str) -> Option<&str> {
        let normalized = query.trim().to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.question.trim().to_lowercase() == normalized)
            .map(|entry| entry.answer.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_answers_spa_hours() {
        let table = HoursTable::standard();
        assert_eq!(
            table.lookup("what time does the spa close?"),
            Some("The spa closes at 7:00 PM")
        );
    }

    #[test]
    fn test_lookup_normalizes_case_and_whitespace() {
        let table = HoursTable::standard();
        assert_eq!(
            table.lookup("  What Time Does The Spa Open?  "),
            Some("The spa opens at 9:00 AM")
        );
    }

    #[test]
    fn test_unknown_question_misses() {
        let table = HoursTable::standard();
        assert_eq!(table.lookup("is the gondola running today?"), None);
    }

    #[test]
    fn test_empty_table_always_misses() {
        assert_eq!(HoursTable::empty().lookup("what time does the spa close?"), None);
    }
}
