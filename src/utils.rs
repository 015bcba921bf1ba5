//! Utility functions for string processing.

/// Shortest token the index keeps, in characters.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Normalize a string for comparison: trim and lowercase.
///
/// This is also the cache key normalization, so `" Iron "` and `"iron"` share
/// a cache slot.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Split a field into index tokens: lowercase, split on whitespace, drop
/// tokens shorter than [`MIN_TOKEN_CHARS`].
///
/// Punctuation is not stripped; `"watch,"` and `"watch"` are different tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(str::to_lowercase)
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
}

/// Character length, which is what "query length" means everywhere.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
