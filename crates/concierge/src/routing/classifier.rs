//! Intent Classifier
//!
//! Keyword heuristic deciding whether a guest message is an actionable
//! task or an informational query. Intentionally coarse: raw substring
//! match over the lower-cased text, no tokenization and no negation
//! handling, so "helpless" matches "help" and "I need to know what time
//! the spa closes" classifies as a task. Known false-positive/negative
//! source; preserved as-is.

use crate::domain::Intent;

/// Words that signal an actionable request.
const ACTION_KEYWORDS: [&str; 7] = ["need", "send", "bring", "deliver", "request", "call", "help"];

/// Classify a guest message as `Task` or `Search`.
///
/// Pure and total: never fails and never returns `Undetermined`.
pub fn classify(text: &str) -> Intent {
    let lowered = text.to_lowercase();
    if ACTION_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
    {
        Intent::Task
    } else {
        Intent::Search
    }
}
