//! Inverted index construction.
//!
//! Three token namespaces, each `token -> sorted entry positions`:
//! title words, tag words, and metadata words (faction, type and status merged).
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTINGS_SORTED**: every posting list is strictly ascending (sorted, no duplicates)
//! 2. **FIELD_CONTAINS_TOKEN**: a position appears under a token only if that
//!    entry's field yields the token from [`tokenize`]
//! 3. **NON_EMPTY**: every token has at least one posting
//! 4. **SNAPSHOT**: the index reflects the corpus slice it was built from and
//!    nothing else; a new corpus means a new index
//!
//! `verify::validate_index` checks all of these.

use std::collections::{BTreeMap, HashSet};
use std::ops::Bound;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::error::IndexError;
use crate::types::Entry;
use crate::utils::tokenize;

/// Entry position inside the corpus slice.
pub type Position = u32;

/// Which namespace a token lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Tag,
    Metadata,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Tag, Field::Metadata];
}

/// Token counts per namespace, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub title: usize,
    pub tag: usize,
    pub metadata: usize,
}

/// The three token maps.
///
/// `BTreeMap` keeps tokens ordered, so prefix lookups are a range scan and
/// iteration order is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenIndex {
    title: BTreeMap<String, Vec<Position>>,
    tags: BTreeMap<String, Vec<Position>>,
    metadata: BTreeMap<String, Vec<Position>>,
    entry_count: usize,
}

impl TokenIndex {
    fn namespace(&self, field: Field) -> &BTreeMap<String, Vec<Position>> {
        match field {
            Field::Title => &self.title,
            Field::Tag => &self.tags,
            Field::Metadata => &self.metadata,
        }
    }

    fn namespace_mut(&mut self, field: Field) -> &mut BTreeMap<String, Vec<Position>> {
        match field {
            Field::Title => &mut self.title,
            Field::Tag => &mut self.tags,
            Field::Metadata => &mut self.metadata,
        }
    }

    /// Positions whose `field` contains exactly `token`. Empty if none.
    pub fn postings(&self, field: Field, token: &str) -> &[Position] {
        self.namespace(field)
            .get(token)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Tokens in `field` that start with `prefix`, in lexicographic order.
    /// Includes `prefix` itself when it is indexed.
    pub fn prefix_matches<'a>(
        &'a self,
        field: Field,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [Position])> + 'a {
        self.namespace(field)
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(token, _)| token.starts_with(prefix))
            .map(|(token, positions)| (token.as_str(), positions.as_slice()))
    }

    /// All `(token, postings)` pairs of one namespace.
    pub fn tokens(&self, field: Field) -> impl Iterator<Item = (&str, &[Position])> {
        self.namespace(field)
            .iter()
            .map(|(token, positions)| (token.as_str(), positions.as_slice()))
    }

    /// Number of entries in the corpus this index was built from.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            title: self.title.len(),
            tag: self.tags.len(),
            metadata: self.metadata.len(),
        }
    }

    fn insert(&mut self, field: Field, token: String, position: Position) {
        let postings = self.namespace_mut(field).entry(token).or_default();
        // Positions arrive in ascending order, so a repeat can only be the last one.
        if postings.last() != Some(&position) {
            postings.push(position);
        }
    }

    fn absorb(&mut self, position: Position, tokens: EntryTokens) {
        for token in tokens.title {
            self.insert(Field::Title, token, position);
        }
        for token in tokens.tags {
            self.insert(Field::Tag, token, position);
        }
        for token in tokens.metadata {
            self.insert(Field::Metadata, token, position);
        }
    }
}

/// Tokens of one entry, per namespace.
#[derive(Debug, Default)]
struct EntryTokens {
    title: Vec<String>,
    tags: Vec<String>,
    metadata: Vec<String>,
}

impl EntryTokens {
    fn of(entry: &Entry) -> Self {
        EntryTokens {
            title: field_tokens(entry, Field::Title),
            tags: field_tokens(entry, Field::Tag),
            metadata: field_tokens(entry, Field::Metadata),
        }
    }
}

/// Tokens a single entry contributes to `field`.
///
/// This is the definition the index is checked against.
pub fn field_tokens(entry: &Entry, field: Field) -> Vec<String> {
    match field {
        Field::Title => tokenize(&entry.title).collect(),
        Field::Tag => entry.tags.iter().flat_map(|tag| tokenize(tag)).collect(),
        Field::Metadata => entry.metadata().flat_map(tokenize).collect(),
    }
}

/// Reject corpora the index cannot represent.
fn check_corpus(entries: &[Entry]) -> Result<(), IndexError> {
    if entries.len() > Position::MAX as usize {
        return Err(IndexError::TooManyEntries {
            count: entries.len(),
        });
    }

    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert((entry.category, entry.slug.as_str())) {
            return Err(IndexError::DuplicateEntry {
                category: entry.category,
                slug: entry.slug.clone(),
            });
        }
    }
    Ok(())
}

/// Build the token index for a corpus.
///
/// Missing optional fields contribute nothing; an empty title contributes no
/// title tokens. An empty corpus yields three empty maps.
///
/// Fails only when the corpus breaks the `(category, slug)` uniqueness
/// invariant or is too large to address.
pub fn build_token_index(entries: &[Entry]) -> Result<TokenIndex, IndexError> {
    check_corpus(entries)?;

    let mut index = TokenIndex {
        entry_count: entries.len(),
        ..TokenIndex::default()
    };
    for (position, entry) in entries.iter().enumerate() {
        index.absorb(position as Position, EntryTokens::of(entry));
    }
    Ok(index)
}

/// Build the token index using parallel map-reduce.
///
/// 1. **Map phase**: tokenize entries in parallel (one task per entry)
/// 2. **Reduce phase**: merge per-entry tokens in position order
///
/// Produces exactly the index [`build_token_index`] would. Only worth it for
/// large corpora; `Library` switches over at `PARALLEL_THRESHOLD` entries.
#[cfg(feature = "parallel")]
pub fn build_token_index_parallel(entries: &[Entry]) -> Result<TokenIndex, IndexError> {
    check_corpus(entries)?;

    // MAP PHASE
    let per_entry: Vec<EntryTokens> = entries.par_iter().map(EntryTokens::of).collect();

    // REDUCE PHASE: sequential, so postings stay sorted without a re-sort
    let mut index = TokenIndex {
        entry_count: entries.len(),
        ..TokenIndex::default()
    };
    for (position, tokens) in per_entry.into_iter().enumerate() {
        index.absorb(position as Position, tokens);
    }
    Ok(index)
}
