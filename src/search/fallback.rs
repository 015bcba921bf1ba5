// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Linear-scan search for when there is no index.
//!
//! Used while indexing is deferred, or after index construction failed. Every
//! entry is scored directly with [`fallback_score`]; same parsing, same ranking
//! order and limit as the indexed path, different point values.

use crate::scoring::fallback_score;
use crate::scoring::ranking::rank;
use crate::types::{Entry, SearchResult};

use super::utils::{ParsedQuery, MIN_QUERY_CHARS};

/// Search `entries` by scanning every one of them.
pub fn search_fallback(query: &str, entries: &[Entry], limit: usize) -> Vec<SearchResult> {
    match ParsedQuery::parse(query, MIN_QUERY_CHARS) {
        Some(parsed) => rank_fallback(&parsed, entries, limit),
        None => Vec::new(),
    }
}

pub(crate) fn rank_fallback(
    query: &ParsedQuery,
    entries: &[Entry],
    limit: usize,
) -> Vec<SearchResult> {
    let scored = entries
        .iter()
        .enumerate()
        .map(|(position, entry)| (position, fallback_score(entry, &query.normalized, &query.words)));
    rank(scored, entries, limit)
}
