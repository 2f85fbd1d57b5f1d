/// Fixed vocabulary offered as search suggestions
pub const SUGGESTION_VOCABULARY: &[&str] = &[
    "iPhone 15",
    "Samsung Galaxy",
    "MacBook Pro",
    "AirPods",
    "PlayStation 5",
    "Nintendo Switch",
    "iPad Pro",
    "Apple Watch",
];

/// Queries shorter than this (in characters) get no suggestions
pub const MIN_SUGGESTION_QUERY_CHARS: usize = 2;

/// Vocabulary entries containing `query`, case-insensitively, in vocabulary order
pub fn suggestions(query: &str) -> Vec<&'static str> {
    if query.chars().count() < MIN_SUGGESTION_QUERY_CHARS {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    SUGGESTION_VOCABULARY.iter().copied().filter(|item| item.to_lowercase().contains(&needle)).collect()
}
