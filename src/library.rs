// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The library facade.
//!
//! Owns one corpus and everything derived from it:
//!
//! ```text
//! initialize(entries)
//!     │
//!     ├──▶ CategoryPartition::build        (always)
//!     ├──▶ ResultCache::invalidate         (always)
//!     └──▶ ensure_indexed                  (unless deferIndexing)
//!              │
//!              ├─ Ok  ─▶ IndexState::Ready    search → indexed path
//!              └─ Err ─▶ IndexState::Failed   search → linear scan
//! ```
//!
//! A failed build is remembered until the next `initialize`, so a broken
//! corpus costs one attempt, not one per query. There is no global instance;
//! hosts own a `Library` and pass it where needed.

use std::collections::BTreeMap;
use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::cache::{CacheStats, Clock, ResultCache, SystemClock};
use crate::config::LibraryConfig;
use crate::error::IndexError;
use crate::inverted::{build_token_index, IndexStats, TokenIndex};
use crate::partition::CategoryPartition;
use crate::search::fallback::rank_fallback;
use crate::search::indexed::rank_indexed;
use crate::search::{simple_search, ParsedQuery};
use crate::types::{entry_key, Category, Entry, SearchResult};
use crate::verify::contracts::check_index_well_formed;

#[cfg(feature = "parallel")]
use crate::inverted::build_token_index_parallel;

/// Corpora at least this large are tokenized on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 1000;

/// Where the index stands for the current corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexState {
    /// Not built yet (deferred, or no corpus).
    Pending,
    Ready(TokenIndex),
    /// Build failed; the fallback scan serves until the next `initialize`.
    Failed(IndexError),
}

/// Snapshot for diagnostics and the `stats` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
    pub total_entries: usize,
    pub per_category: BTreeMap<Category, usize>,
    pub indexed: bool,
    /// All zero unless `indexed`.
    pub index_tokens: IndexStats,
    pub cache: CacheStats,
}

pub struct Library<C: Clock = SystemClock> {
    config: LibraryConfig,
    entries: Vec<Entry>,
    partition: CategoryPartition,
    index: IndexState,
    cache: ResultCache<C>,
}

impl Library<SystemClock> {
    pub fn new(config: LibraryConfig) -> Self {
        Self::with_clock(config, SystemClock::new())
    }
}

impl Default for Library<SystemClock> {
    fn default() -> Self {
        Self::new(LibraryConfig::default())
    }
}

impl<C: Clock> Library<C> {
    /// Empty library whose cache reads time from `clock`.
    pub fn with_clock(config: LibraryConfig, clock: C) -> Self {
        let cache = ResultCache::with_clock(config.cache_ttl(), config.cache_mode, clock);
        Library {
            config,
            entries: Vec::new(),
            partition: CategoryPartition::default(),
            index: IndexState::Pending,
            cache,
        }
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn index_state(&self) -> &IndexState {
        &self.index
    }

    pub fn is_indexed(&self) -> bool {
        matches!(self.index, IndexState::Ready(_))
    }

    /// Replace the corpus.
    ///
    /// Everything derived from the previous corpus is dropped: partition,
    /// index (and any recorded failure), every cache map.
    pub fn initialize(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.partition = CategoryPartition::build(&self.entries);
        self.index = IndexState::Pending;
        self.cache.invalidate();

        tracing::info!(
            entries = self.entries.len(),
            per_category = ?self.partition.counts().collect::<Vec<_>>(),
            deferred = self.config.defer_indexing,
            "library initialized"
        );

        if !self.config.defer_indexing {
            self.ensure_indexed();
        }
    }

    /// Build the index if it has not been attempted for this corpus.
    ///
    /// Returns whether the index is ready. After a failure this keeps
    /// returning `false` without retrying.
    pub fn ensure_indexed(&mut self) -> bool {
        match self.index {
            IndexState::Ready(_) => return true,
            IndexState::Failed(_) => return false,
            IndexState::Pending => {}
        }

        let start = Instant::now();
        match build_index(&self.entries) {
            Ok(index) => {
                check_index_well_formed(&index, &self.entries);
                let stats = index.stats();
                tracing::info!(
                    entries = self.entries.len(),
                    title_tokens = stats.title,
                    tag_tokens = stats.tag,
                    metadata_tokens = stats.metadata,
                    elapsed = ?start.elapsed(),
                    "index built"
                );
                self.index = IndexState::Ready(index);
                // Earlier results came from the linear scan
                self.cache.clear_searches();
                true
            }
            Err(err) => {
                tracing::warn!(%err, "index build failed, serving from linear scan");
                self.index = IndexState::Failed(err);
                false
            }
        }
    }

    /// Ranked search, capped at `searchLimit`, through the search cache.
    pub fn search(&mut self, query: &str) -> Vec<SearchResult> {
        let Library {
            ref config,
            ref entries,
            ref index,
            ref mut cache,
            ..
        } = *self;
        cache.get_or_compute(query, || {
            rank_query(query, config, index, entries, config.search_limit)
        })
    }

    /// Ranked search with an explicit cap. Bypasses the cache.
    pub fn search_with_limit(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        rank_query(query, &self.config, &self.index, &self.entries, limit)
    }

    /// One entry by category and slug, through the entry cache.
    pub fn get_entry(&mut self, category: Category, slug: &str) -> Option<Entry> {
        let Library {
            ref partition,
            ref mut cache,
            ..
        } = *self;
        cache.entry_or_compute(&entry_key(category, slug), || {
            partition
                .get(category)
                .iter()
                .find(|entry| entry.slug == slug)
                .cloned()
        })
    }

    /// A category's entries in corpus order, through the category cache.
    /// Unknown names give an empty list.
    pub fn get_by_category(&mut self, name: &str) -> Vec<Entry> {
        let Library {
            ref partition,
            ref mut cache,
            ..
        } = *self;
        cache.category_or_compute(name, || partition.get_by_name(name).to_vec())
    }

    /// First entry of each non-empty category.
    pub fn featured(&self) -> Vec<Entry> {
        self.partition.featured()
    }

    /// Unranked title/tag substring filter, corpus order.
    pub fn simple_search(&self, query: &str) -> Vec<&Entry> {
        simple_search(query, &self.entries)
    }

    pub fn get_random(&self) -> Option<&Entry> {
        self.get_random_with(&mut rand::thread_rng())
    }

    pub fn get_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Entry> {
        self.entries.choose(rng)
    }

    /// Up to `count` distinct entries in random order.
    pub fn get_random_n(&self, count: usize) -> Vec<&Entry> {
        self.get_random_n_with(count, &mut rand::thread_rng())
    }

    pub fn get_random_n_with<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&Entry> {
        let mut picked: Vec<&Entry> = self.entries.iter().collect();
        picked.shuffle(rng);
        picked.truncate(count);
        picked
    }

    /// Clear every cache map now, regardless of TTL.
    pub fn invalidate_cache(&mut self) {
        self.cache.invalidate();
    }

    pub fn stats(&self) -> LibraryStats {
        let index_tokens = match &self.index {
            IndexState::Ready(index) => index.stats(),
            _ => IndexStats::default(),
        };
        LibraryStats {
            total_entries: self.entries.len(),
            per_category: self.partition.counts().collect(),
            indexed: self.is_indexed(),
            index_tokens,
            cache: self.cache.stats(),
        }
    }
}

fn build_index(entries: &[Entry]) -> Result<TokenIndex, IndexError> {
    #[cfg(feature = "parallel")]
    if entries.len() >= PARALLEL_THRESHOLD {
        return build_token_index_parallel(entries);
    }
    build_token_index(entries)
}

fn rank_query(
    query: &str,
    config: &LibraryConfig,
    index: &IndexState,
    entries: &[Entry],
    limit: usize,
) -> Vec<SearchResult> {
    let Some(parsed) = ParsedQuery::parse(query, config.min_query_len) else {
        return Vec::new();
    };
    match index {
        IndexState::Ready(index) => rank_indexed(&parsed, index, entries, limit),
        IndexState::Pending | IndexState::Failed(_) => {
            tracing::debug!(query = %parsed.normalized, "no index, scanning corpus");
            rank_fallback(&parsed, entries, limit)
        }
    }
}
