// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for search modules.
//!
//! Query parsing and score accumulation, used by both the indexed and the
//! fallback path so the two agree on what counts as a searchable query.

use std::collections::BTreeMap;

use crate::inverted::Position;
use crate::utils::{char_len, normalize, tokenize};

/// Minimum query length in characters, after trimming.
pub const MIN_QUERY_CHARS: usize = 2;

/// Default result cap.
pub const DEFAULT_LIMIT: usize = 20;

/// A query that passed the length checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Trimmed, lowercased query. Whole-query bonuses compare against this.
    pub normalized: String,
    /// Tokens of `normalized`, each at least two characters.
    pub words: Vec<String>,
}

impl ParsedQuery {
    /// Parse a raw query.
    ///
    /// Returns `None` when the trimmed query is shorter than `min_chars` or
    /// yields no tokens (e.g. `"a b"`). `None` means "empty result", not error.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let q = ParsedQuery::parse("  Iron Hand ", 2).unwrap();
    /// assert_eq!(q.normalized, "iron hand");
    /// assert_eq!(q.words, vec!["iron", "hand"]);
    /// ```
    pub fn parse(query: &str, min_chars: usize) -> Option<Self> {
        let normalized = normalize(query);
        if char_len(&normalized) < min_chars {
            return None;
        }
        let words: Vec<String> = tokenize(&normalized).collect();
        if words.is_empty() {
            return None;
        }
        Some(ParsedQuery { normalized, words })
    }

    pub fn is_multi_word(&self) -> bool {
        self.words.len() > 1
    }
}

/// Running per-candidate scores, keyed by corpus position. Sums saturate at
/// `u32::MAX`.
///
/// A `BTreeMap` so candidates come out in corpus order; ranking does not rely
/// on it, but it keeps debugging output stable.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    scores: BTreeMap<usize, u32>,
}

impl ScoreBoard {
    /// Add `points` to every position in `positions`.
    pub fn credit(&mut self, positions: &[Position], points: u32) {
        for &position in positions {
            let score = self.scores.entry(position as usize).or_insert(0);
            *score = score.saturating_add(points);
        }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn into_scores(self) -> impl Iterator<Item = (usize, u32)> {
        self.scores.into_iter()
    }
}
