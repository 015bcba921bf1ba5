// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search algorithms.
//!
//! Two paths over the same corpus: `indexed` consults the token index,
//! `fallback` scans every entry. They parse queries identically and rank with
//! the same comparator; only the point values differ. `simple_search` is the
//! unranked substring filter kept for callers that just want "anything
//! mentioning X" in corpus order.

pub mod fallback;
pub mod indexed;
pub mod utils;

pub use fallback::search_fallback;
pub use indexed::search_indexed;
pub use utils::{ParsedQuery, DEFAULT_LIMIT, MIN_QUERY_CHARS};

use crate::types::Entry;
use crate::utils::normalize;

/// Entries whose title or any tag contains the query, in corpus order.
///
/// No scoring, no limit. A blank query matches nothing.
pub fn simple_search<'a>(query: &str, entries: &'a [Entry]) -> Vec<&'a Entry> {
    let query = normalize(query);
    if query.is_empty() {
        return Vec::new();
    }
    entries
        .iter()
        .filter(|entry| {
            entry.title.to_lowercase().contains(&query)
                || entry.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
        })
        .collect()
}
