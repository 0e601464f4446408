use std::sync::LazyLock;

use regex::Regex;

// Unicode-aware: the corpus mixes Spanish and English.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("word pattern"));

/// Split text into lower-cased word tokens, preserving order. Duplicates
/// are kept here; index construction deduplicates where it matters.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD.find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Case-normalize and trim a raw query string.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}
