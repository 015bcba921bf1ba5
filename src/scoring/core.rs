// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Two scales live here. The indexed scale is what normal queries use. The
//! fallback scale serves the linear scan when no index is available; its
//! absolute numbers do not line up with the indexed ones. Sums saturate at
//! `u32::MAX`. Both keep the orderings the tests pin down:
//!
//! ```text
//! exact title match  >  tag-only match
//! title prefix ties  ->  corpus order decides
//! ```
//!
//! # Indexed scale
//!
//! | Match                              | Points |
//! |------------------------------------|--------|
//! | query word = title token           | 50     |
//! | query word = tag token             | 30     |
//! | query word = metadata token        | 20     |
//! | query word is a strict title-token prefix | 25 per token |
//! | whole query = title                | +100   |
//! | title starts with whole query      | +50    |
//! | multi-word: word in title or a tag | +10 per word |
//!
//! # Fallback scale
//!
//! | Match                              | Points |
//! |------------------------------------|--------|
//! | whole query = title                | 100    |
//! | title contains whole query         | 50 (+25 at start) |
//! | multi-word: word is a title token  | 20 per word |
//! | multi-word: word inside title text | 15 per word |
//! | multi-word: word is a tag token    | 30 per word |
//! | multi-word: word inside a tag      | 15 per word |
//! | multi-word: word in faction        | 20 per word |
//! | multi-word: word in type / status  | 15 per word |
//! | tag = whole query                  | 30 per tag |
//! | tag contains whole query           | 15 per tag |
//! | faction contains whole query       | 20     |
//! | type / status contains whole query | 15 each |

use crate::types::Entry;
use crate::utils::tokenize;

// =============================================================================
// INDEXED SCORING CONSTANTS
// =============================================================================

/// Query word equals a title token.
pub const TITLE_TOKEN_SCORE: u32 = 50;

/// Query word equals a tag token.
pub const TAG_TOKEN_SCORE: u32 = 30;

/// Query word equals a metadata token.
pub const METADATA_TOKEN_SCORE: u32 = 20;

/// Query word is a strict prefix of a title token. Counted per token.
pub const TITLE_PREFIX_SCORE: u32 = 25;

/// Whole normalized query equals the lowercased title.
pub const EXACT_TITLE_BONUS: u32 = 100;

/// Lowercased title starts with the whole query (but is not equal to it).
pub const TITLE_STARTS_WITH_BONUS: u32 = 50;

/// Per query word found in the title or a tag, multi-word queries only.
pub const MULTI_WORD_BONUS: u32 = 10;

// =============================================================================
// FALLBACK SCORING CONSTANTS
// =============================================================================

pub const FALLBACK_EXACT_TITLE_SCORE: u32 = 100;
pub const FALLBACK_TITLE_CONTAINS_SCORE: u32 = 50;
pub const FALLBACK_TITLE_START_BONUS: u32 = 25;
pub const FALLBACK_WORD_TOKEN_SCORE: u32 = 20;
pub const FALLBACK_WORD_SUBSTRING_SCORE: u32 = 15;
pub const FALLBACK_TAG_EXACT_SCORE: u32 = 30;
pub const FALLBACK_TAG_CONTAINS_SCORE: u32 = 15;
pub const FALLBACK_FACTION_SCORE: u32 = 20;
pub const FALLBACK_OTHER_METADATA_SCORE: u32 = 15;

// =============================================================================
// INDEXED PATH
// =============================================================================

/// Whole-query bonus against the title. Both arguments are lowercased.
pub fn title_bonus(title: &str, query: &str) -> u32 {
    if title == query {
        EXACT_TITLE_BONUS
    } else if title.starts_with(query) {
        TITLE_STARTS_WITH_BONUS
    } else {
        0
    }
}

/// Bonus for multi-word queries: each word found (as a substring) in the
/// title or any tag earns [`MULTI_WORD_BONUS`]. Single-word queries get 0.
pub fn multi_word_bonus(words: &[String], title: &str, tags: &[String]) -> u32 {
    if words.len() < 2 {
        return 0;
    }
    let matching = words
        .iter()
        .filter(|word| {
            title.contains(word.as_str())
                || tags.iter().any(|tag| tag.to_lowercase().contains(word.as_str()))
        })
        .count();
    u32::try_from(matching)
        .unwrap_or(u32::MAX)
        .saturating_mul(MULTI_WORD_BONUS)
}

/// Step-3 bonuses for one candidate: whole-query title bonus plus the
/// multi-word bonus.
pub fn candidate_bonus(entry: &Entry, query: &str, words: &[String]) -> u32 {
    let title = entry.title.to_lowercase();
    title_bonus(&title, query).saturating_add(multi_word_bonus(words, &title, &entry.tags))
}

// =============================================================================
// FALLBACK PATH
// =============================================================================

/// Score one entry against the query without an index.
///
/// `query` is the normalized (trimmed, lowercased) query and `words` its
/// tokens. Returns 0 for no match.
pub fn fallback_score(entry: &Entry, query: &str, words: &[String]) -> u32 {
    let mut score: u32 = 0;
    let title = entry.title.to_lowercase();
    let tags: Vec<String> = entry.tags.iter().map(|tag| tag.to_lowercase()).collect();
    let faction = lowered(&entry.faction);
    let others = [lowered(&entry.kind), lowered(&entry.status)];

    if title == query {
        score = score.saturating_add(FALLBACK_EXACT_TITLE_SCORE);
    } else if title.contains(query) {
        score = score.saturating_add(FALLBACK_TITLE_CONTAINS_SCORE);
        if title.starts_with(query) {
            score = score.saturating_add(FALLBACK_TITLE_START_BONUS);
        }
    }

    if words.len() > 1 {
        let title_tokens: Vec<String> = tokenize(&title).collect();
        for word in words {
            let word = word.as_str();
            if title_tokens.iter().any(|token| token == word) {
                score = score.saturating_add(FALLBACK_WORD_TOKEN_SCORE);
            } else if title.contains(word) {
                score = score.saturating_add(FALLBACK_WORD_SUBSTRING_SCORE);
            }

            if tags.iter().any(|tag| tokenize(tag).any(|token| token == word)) {
                score = score.saturating_add(FALLBACK_TAG_EXACT_SCORE);
            } else if tags.iter().any(|tag| tag.contains(word)) {
                score = score.saturating_add(FALLBACK_TAG_CONTAINS_SCORE);
            }

            if faction.as_deref().is_some_and(|value| value.contains(word)) {
                score = score.saturating_add(FALLBACK_FACTION_SCORE);
            } else if others.iter().flatten().any(|value| value.contains(word)) {
                score = score.saturating_add(FALLBACK_OTHER_METADATA_SCORE);
            }
        }
    }

    for tag in &tags {
        if tag == query {
            score = score.saturating_add(FALLBACK_TAG_EXACT_SCORE);
        } else if tag.contains(query) {
            score = score.saturating_add(FALLBACK_TAG_CONTAINS_SCORE);
        }
    }

    if faction.as_deref().is_some_and(|value| value.contains(query)) {
        score = score.saturating_add(FALLBACK_FACTION_SCORE);
    }
    for value in others.iter().flatten() {
        if value.contains(query) {
            score = score.saturating_add(FALLBACK_OTHER_METADATA_SCORE);
        }
    }

    score
}

fn lowered(field: &Option<String>) -> Option<String> {
    field.as_deref().map(str::to_lowercase)
}
