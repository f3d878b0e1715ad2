//! Attribute tokenizer.
//!
//! Terms are lowercased, split on `.`, `_`, and whitespace, then filtered
//! by minimum length and a small English stop-word set.

/// Tokens shorter than this never reach the index.
pub const MIN_TERM_LEN: usize = 2;

/// English stop words the index refuses to store or look up.
pub const STOP_WORDS: [&str; 10] = ["a", "an", "and", "the", "of", "is", "in", "it", "or", "to"];

fn is_stop_word(term: &str) -> bool {
    STOP_WORDS.contains(&term)
}

/// `true` when a lowercased term is worth indexing or querying.
pub fn indexable(term: &str) -> bool {
    term.len() >= MIN_TERM_LEN && !is_stop_word(term)
}

/// Split one value into its surviving tokens. Repeated tokens are kept;
/// the index stores one row per occurrence key anyway.
pub fn tokenize(value: &str) -> Vec<String> {
    value
        .trim()
        .to_lowercase()
        .split(|c: char| c == '.' || c == '_' || c.is_whitespace())
        .filter(|t| indexable(t))
        .map(str::to_string)
        .collect()
}

/// The whole value as a single lowercased term, so exact lookups keep
/// working for multi-word attributes. `None` when it would not survive
/// the token filters.
pub fn whole_term(value: &str) -> Option<String> {
    let cleaned = value.trim().to_lowercase();
    indexable(&cleaned).then_some(cleaned)
}
