// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Position** - ascending, so equal scores keep corpus order
//!
//! Position is unique per entry, which makes the order total: the same corpus
//! and query always produce the same list, whatever order candidates were
//! gathered in.

use std::cmp::Ordering;

use crate::types::{Entry, SearchResult};

/// Compare two search results for ranking.
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    compare_scored((a.score, a.position), (b.score, b.position))
}

/// Same ordering on bare `(score, position)` pairs, before entries are cloned.
pub fn compare_scored(a: (u32, usize), b: (u32, usize)) -> Ordering {
    b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1))
}

/// Rank scored candidates and materialize the top `limit`.
///
/// Drops zero scores and positions outside `entries`. Only the survivors that
/// make the cut are cloned.
pub fn rank<I>(scored: I, entries: &[Entry], limit: usize) -> Vec<SearchResult>
where
    I: IntoIterator<Item = (usize, u32)>,
{
    let mut candidates: Vec<(u32, usize)> = scored
        .into_iter()
        .filter(|&(position, score)| score > 0 && position < entries.len())
        .map(|(position, score)| (score, position))
        .collect();

    candidates.sort_by(|a, b| compare_scored(*a, *b));
    candidates.truncate(limit);

    candidates
        .into_iter()
        .map(|(score, position)| SearchResult {
            entry: entries[position].clone(),
            score,
            position,
        })
        .collect()
}
