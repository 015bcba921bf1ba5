// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: index invariants and runtime contracts.
//!
//! [`validate_index`] walks a built [`TokenIndex`] against the corpus it came
//! from and reports the first broken invariant. [`contracts`] wraps it in
//! debug-only assertions that run after every build.
//!
//! Checked, per namespace:
//!
//! 1. every posting is a valid corpus position
//! 2. postings are strictly ascending and non-empty
//! 3. the entry at each posting really yields the token for that field
//! 4. tokens are lowercase and at least two characters
//! 5. every token every entry yields is present (completeness)

pub mod contracts;

use std::collections::HashSet;
use std::fmt;

use crate::inverted::{field_tokens, Field, TokenIndex};
use crate::types::Entry;
use crate::utils::{char_len, MIN_TOKEN_CHARS};

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Index was built from a corpus of a different size.
    EntryCountMismatch { claimed: usize, actual: usize },
    /// A posting points past the end of the corpus.
    InvalidPosition {
        field: Field,
        token: String,
        position: usize,
        entries_len: usize,
    },
    /// A posting list is not strictly ascending.
    UnsortedPostings { field: Field, token: String },
    /// Every token should have at least one posting.
    EmptyPostings { field: Field, token: String },
    /// A token is indexed for an entry whose field does not yield it.
    SpuriousPosting {
        field: Field,
        token: String,
        position: usize,
    },
    /// Token is too short or not lowercase.
    MalformedToken { field: Field, token: String },
    /// An entry yields a token the index does not list for it.
    MissingPosting {
        field: Field,
        token: String,
        position: usize,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::EntryCountMismatch { claimed, actual } => {
                write!(f, "index built for {} entries, corpus has {}", claimed, actual)
            }
            InvariantError::InvalidPosition {
                field,
                token,
                position,
                entries_len,
            } => {
                write!(
                    f,
                    "{:?} token '{}' points at {} >= entries.len() {}",
                    field, token, position, entries_len
                )
            }
            InvariantError::UnsortedPostings { field, token } => {
                write!(f, "postings for {:?} token '{}' not strictly ascending", field, token)
            }
            InvariantError::EmptyPostings { field, token } => {
                write!(f, "postings for {:?} token '{}' are empty", field, token)
            }
            InvariantError::SpuriousPosting {
                field,
                token,
                position,
            } => {
                write!(
                    f,
                    "entry {} does not yield {:?} token '{}'",
                    position, field, token
                )
            }
            InvariantError::MalformedToken { field, token } => {
                write!(f, "{:?} token '{}' is not a normalized token", field, token)
            }
            InvariantError::MissingPosting {
                field,
                token,
                position,
            } => {
                write!(
                    f,
                    "entry {} yields {:?} token '{}' but the index does not list it",
                    position, field, token
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Check a built index against the corpus it claims to describe.
pub fn validate_index(index: &TokenIndex, entries: &[Entry]) -> Result<(), InvariantError> {
    if index.entry_count() != entries.len() {
        return Err(InvariantError::EntryCountMismatch {
            claimed: index.entry_count(),
            actual: entries.len(),
        });
    }

    // Tokens per (field, position), computed once
    let yielded: Vec<[HashSet<String>; 3]> = entries
        .iter()
        .map(|entry| Field::ALL.map(|field| field_tokens(entry, field).into_iter().collect()))
        .collect();

    for (slot, field) in Field::ALL.into_iter().enumerate() {
        for (token, positions) in index.tokens(field) {
            check_token(field, token)?;
            check_postings(field, token, positions, &yielded, slot)?;
        }

        // Completeness
        for (position, tokens) in yielded.iter().enumerate() {
            for token in &tokens[slot] {
                if index.postings(field, token).binary_search(&(position as u32)).is_err() {
                    return Err(InvariantError::MissingPosting {
                        field,
                        token: token.clone(),
                        position,
                    });
                }
            }
        }
    }

    Ok(())
}

fn check_token(field: Field, token: &str) -> Result<(), InvariantError> {
    if char_len(token) < MIN_TOKEN_CHARS || token.to_lowercase() != token {
        return Err(InvariantError::MalformedToken {
            field,
            token: token.to_string(),
        });
    }
    Ok(())
}

fn check_postings(
    field: Field,
    token: &str,
    positions: &[u32],
    yielded: &[[HashSet<String>; 3]],
    slot: usize,
) -> Result<(), InvariantError> {
    if positions.is_empty() {
        return Err(InvariantError::EmptyPostings {
            field,
            token: token.to_string(),
        });
    }
    if positions.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(InvariantError::UnsortedPostings {
            field,
            token: token.to_string(),
        });
    }

    for &position in positions {
        let position = position as usize;
        let Some(tokens) = yielded.get(position) else {
            return Err(InvariantError::InvalidPosition {
                field,
                token: token.to_string(),
                position,
                entries_len: yielded.len(),
            });
        };
        if !tokens[slot].contains(token) {
            return Err(InvariantError::SpuriousPosting {
                field,
                token: token.to_string(),
                position,
            });
        }
    }
    Ok(())
}
