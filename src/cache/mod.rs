// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TTL result cache.
//!
//! Three maps share one epoch:
//!
//! ```text
//!                 ┌───────────────────────────────┐
//!  search query ─►│ searches   : query → results  │
//!  category     ─►│ categories : name  → entries  │  epoch ──► now - epoch > ttl
//!  cat/slug     ─►│ entries    : key   → entry    │              ⇒ clear all three
//!                 └───────────────────────────────┘
//! ```
//!
//! Expiry is whole-cache, never per key. Every lookup checks the epoch first;
//! once the TTL has elapsed all three maps are emptied and the epoch restarts.
//! Writes do not touch the epoch.
//!
//! Search and category keys are trimmed and lowercased, so `" Iron "` and
//! `"iron"` share a slot. Entry keys are `category/slug` exactly as given,
//! since slugs are case-sensitive identities. Empty results are never stored.

pub mod clock;
mod store;

use std::time::Duration;

use serde::Serialize;

use crate::config::CacheMode;
use crate::types::{Entry, SearchResult};
use crate::utils::normalize;

pub use clock::{Clock, ManualClock, SystemClock};
use store::SlotStore;

/// Slot counts and epoch age.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub searches: usize,
    pub categories: usize,
    pub entries: usize,
    /// Time since the last full clear.
    pub age: Duration,
}

pub struct ResultCache<C: Clock = SystemClock> {
    ttl: Duration,
    clock: C,
    epoch: Duration,
    searches: SlotStore<Vec<SearchResult>>,
    categories: SlotStore<Vec<Entry>>,
    entries: SlotStore<Entry>,
}

impl ResultCache<SystemClock> {
    pub fn new(ttl: Duration, mode: CacheMode) -> Self {
        Self::with_clock(ttl, mode, SystemClock::new())
    }
}

impl<C: Clock> ResultCache<C> {
    pub fn with_clock(ttl: Duration, mode: CacheMode, clock: C) -> Self {
        let epoch = clock.now();
        ResultCache {
            ttl,
            clock,
            epoch,
            searches: SlotStore::new(mode),
            categories: SlotStore::new(mode),
            entries: SlotStore::new(mode),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Whether the epoch is older than the TTL.
    pub fn is_expired(&self) -> bool {
        self.age() > self.ttl
    }

    fn age(&self) -> Duration {
        self.clock.now().saturating_sub(self.epoch)
    }

    fn expire_if_stale(&mut self) {
        if self.is_expired() {
            let slots = self.searches.len() + self.categories.len() + self.entries.len();
            tracing::debug!(age = ?self.age(), ttl = ?self.ttl, slots, "cache expired, clearing");
            self.invalidate();
        }
    }

    /// Cached search results for `query`, or `compute()` on a miss.
    ///
    /// `compute` runs at most once. A non-empty result is stored under the
    /// normalized query.
    pub fn get_or_compute<F>(&mut self, query: &str, compute: F) -> Vec<SearchResult>
    where
        F: FnOnce() -> Vec<SearchResult>,
    {
        self.expire_if_stale();
        let key = normalize(query);

        if let Some(hit) = self.searches.get(&key) {
            tracing::debug!(query = %key, "search cache hit");
            return hit;
        }

        tracing::debug!(query = %key, "search cache miss");
        let results = compute();
        if !results.is_empty() {
            self.searches.insert(key, results.clone());
        }
        results
    }

    /// Cached category listing, or `compute()` on a miss. Same rules as
    /// [`get_or_compute`](Self::get_or_compute).
    pub fn category_or_compute<F>(&mut self, name: &str, compute: F) -> Vec<Entry>
    where
        F: FnOnce() -> Vec<Entry>,
    {
        self.expire_if_stale();
        let key = normalize(name);

        if let Some(hit) = self.categories.get(&key) {
            return hit;
        }

        let listing = compute();
        if !listing.is_empty() {
            self.categories.insert(key, listing.clone());
        }
        listing
    }

    /// Cached single entry. Only found entries are stored.
    ///
    /// `key` is used verbatim: `"creatures/Dragon"` and `"creatures/dragon"`
    /// are different slots.
    pub fn entry_or_compute<F>(&mut self, key: &str, compute: F) -> Option<Entry>
    where
        F: FnOnce() -> Option<Entry>,
    {
        self.expire_if_stale();

        if let Some(hit) = self.entries.get(key) {
            return Some(hit);
        }

        let entry = compute()?;
        self.entries.insert(key.to_string(), entry.clone());
        Some(entry)
    }

    /// Drop cached search results only. The epoch is untouched.
    pub fn clear_searches(&mut self) {
        self.searches.clear();
    }

    /// Clear all three maps and restart the epoch.
    pub fn invalidate(&mut self) {
        self.searches.clear();
        self.categories.clear();
        self.entries.clear();
        self.epoch = self.clock.now();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            searches: self.searches.len(),
            categories: self.categories.len(),
            entries: self.entries.len(),
            age: self.age(),
        }
    }

    #[cfg(test)]
    fn corrupt_search(&mut self, query: &str) -> bool {
        self.searches.corrupt(&normalize(query))
    }
}
