// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index and the scoring table.
//!
//! These checks:
//!
//! 1. Are **zero-cost in release builds** (`cfg(debug_assertions)`)
//! 2. Fail fast during development and in tests
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! The ranking relies on the point table below keeping its shape. If someone
//! retunes a constant so that a tag hit outweighs a title hit, the crate stops
//! compiling.

use crate::inverted::TokenIndex;
use crate::scoring::{
    EXACT_TITLE_BONUS, FALLBACK_EXACT_TITLE_SCORE, FALLBACK_TITLE_CONTAINS_SCORE,
    METADATA_TOKEN_SCORE, TAG_TOKEN_SCORE, TITLE_PREFIX_SCORE, TITLE_STARTS_WITH_BONUS,
    TITLE_TOKEN_SCORE,
};
use crate::types::Entry;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    // title > tag > metadata, per token
    assert!(TITLE_TOKEN_SCORE > TAG_TOKEN_SCORE);
    assert!(TAG_TOKEN_SCORE > METADATA_TOKEN_SCORE);

    // a completed word beats a word still being typed
    assert!(TITLE_TOKEN_SCORE > TITLE_PREFIX_SCORE);

    // exact title outranks "title starts with the query"
    assert!(EXACT_TITLE_BONUS > TITLE_STARTS_WITH_BONUS);
    assert!(FALLBACK_EXACT_TITLE_SCORE > FALLBACK_TITLE_CONTAINS_SCORE);
};

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that a freshly built index describes `entries` exactly.
///
/// # Panics (debug builds only)
/// Panics with the violated invariant.
#[inline]
pub fn check_index_well_formed(index: &TokenIndex, entries: &[Entry]) {
    #[cfg(debug_assertions)]
    if let Err(err) = super::validate_index(index, entries) {
        panic!("INVARIANT VIOLATED (index well-formed): {}", err);
    }

    #[cfg(not(debug_assertions))]
    let _ = (index, entries);
}
