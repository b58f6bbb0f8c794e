//! Keyword sets for dialogue dispatch
//!
//! All checks are substring containment over the lowercased message.

pub const FAREWELL: [&str; 5] = ["bye", "goodbye", "exit", "quit", "end chat"];

pub const SUMMARY_REQUEST: [&str; 5] = ["summary", "my details", "my profile", "table", "overview"];

pub const AFFIRMATIVE: [&str; 5] = ["yes", "yeah", "sure", "ok", "yep"];

pub const NEGATIVE: [&str; 4] = ["no", "not", "nope", "later"];

pub const GREETING: [&str; 3] = ["hi", "hello", "hey"];

pub const THANKS: [&str; 2] = ["thanks", "thank you"];

pub const HELP: [&str; 3] = ["help", "suggestion", "advice"];

/// Messages that are always in scope even without an academic keyword
pub const BASIC_RESPONSES: [&str; 9] =
    ["hi", "hello", "hey", "thanks", "thank you", "ok", "yes", "no", "bye"];

/// Academic vocabulary the advisor can talk about. A completed-state
/// message containing none of these (and not a basic response) gets the
/// out-of-scope deflection.
pub const ACADEMIC_KEYWORDS: [&str; 60] = [
    "study", "learn", "exam", "test", "cgpa", "grade", "attendance", "backlog",
    "project", "internship", "career", "placement", "programming", "math",
    "time", "schedule", "management", "stress", "motivation", "confidence",
    "technique", "method", "strategy", "plan", "improve", "better", "good",
    "suggestion", "advice", "help", "tip", "how to", "what", "when", "where",
    "why", "which", "college", "university", "subject", "course", "lab",
    "practical", "theory", "notes", "revision", "prepare", "performance",
    "analysis", "guidance", "mental", "health", "campus", "life",
    "balance", "extracurricular", "network", "summary", "overview", "details",
];

/// True when any of the words occurs anywhere in the text
pub fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

/// Out-of-scope check for the completed state
pub fn is_out_of_scope(user_lower: &str) -> bool {
    if BASIC_RESPONSES.iter().any(|w| *w == user_lower) {
        return false;
    }
    !contains_any(user_lower, &ACADEMIC_KEYWORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_any_is_substring_based() {
        assert!(contains_any("that's okay", &AFFIRMATIVE)); // "ok" inside "okay"
        assert!(contains_any("note this", &NEGATIVE)); // "not" inside "note"
        assert!(!contains_any("maybe", &AFFIRMATIVE));
    }

    #[test]
    fn test_basic_responses_stay_in_scope() {
        assert!(!is_out_of_scope("hi"));
        assert!(!is_out_of_scope("thanks"));
    }

    #[test]
    fn test_academic_message_in_scope() {
        assert!(!is_out_of_scope("how do i improve my cgpa"));
        assert!(!is_out_of_scope("exam preparation tips"));
    }

    #[test]
    fn test_off_topic_message_out_of_scope() {
        assert!(is_out_of_scope("pizza recipes"));
        // "grow" is not academic vocabulary
        assert!(is_out_of_scope("growing tomatoes"));
    }
}
