// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index-accelerated search.
//!
//! Per query word, candidates come from exact hits in each namespace and from
//! title tokens the word is a strict prefix of. Each hit adds to the
//! candidate's running score. Afterwards every candidate gets the whole-query
//! bonuses, then the list is ranked and capped.

use crate::inverted::{Field, TokenIndex};
use crate::scoring::ranking::rank;
use crate::scoring::{
    candidate_bonus, METADATA_TOKEN_SCORE, TAG_TOKEN_SCORE, TITLE_PREFIX_SCORE, TITLE_TOKEN_SCORE,
};
use crate::types::{Entry, SearchResult};

use super::utils::{ParsedQuery, ScoreBoard, MIN_QUERY_CHARS};

/// Search `entries` through `index`.
///
/// `index` must have been built from `entries`. Queries shorter than two
/// characters (after trimming) return nothing without touching the index.
/// Never mutates its inputs.
pub fn search_indexed(
    query: &str,
    index: &TokenIndex,
    entries: &[Entry],
    limit: usize,
) -> Vec<SearchResult> {
    match ParsedQuery::parse(query, MIN_QUERY_CHARS) {
        Some(parsed) => rank_indexed(&parsed, index, entries, limit),
        None => Vec::new(),
    }
}

/// Gather candidates with their running scores.
pub(crate) fn gather_candidates(query: &ParsedQuery, index: &TokenIndex) -> ScoreBoard {
    let mut board = ScoreBoard::default();

    for word in &query.words {
        board.credit(index.postings(Field::Title, word), TITLE_TOKEN_SCORE);
        board.credit(index.postings(Field::Tag, word), TAG_TOKEN_SCORE);
        board.credit(index.postings(Field::Metadata, word), METADATA_TOKEN_SCORE);

        // Exact title hits were credited above
        for (token, positions) in index.prefix_matches(Field::Title, word) {
            if token != word.as_str() {
                board.credit(positions, TITLE_PREFIX_SCORE);
            }
        }
    }

    board
}

pub(crate) fn rank_indexed(
    query: &ParsedQuery,
    index: &TokenIndex,
    entries: &[Entry],
    limit: usize,
) -> Vec<SearchResult> {
    let board = gather_candidates(query, index);
    if board.is_empty() {
        return Vec::new();
    }

    let scored = board.into_scores().filter_map(|(position, running)| {
        let entry = entries.get(position)?;
        Some((
            position,
            running.saturating_add(candidate_bonus(entry, &query.normalized, &query.words)),
        ))
    });

    rank(scored, entries, limit)
}
