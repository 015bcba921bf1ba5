// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Category partition.
//!
//! Computed once per corpus: one bucket per [`Category`], each holding that
//! category's entries in corpus order. Lookups are a fixed-array index.

use crate::types::{Category, Entry};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPartition {
    buckets: [Vec<Entry>; Category::COUNT],
}

impl CategoryPartition {
    /// Split `entries` by category, keeping corpus order inside each bucket.
    pub fn build(entries: &[Entry]) -> Self {
        let mut partition = CategoryPartition::default();
        for entry in entries {
            partition.buckets[entry.category.ordinal()].push(entry.clone());
        }
        partition
    }

    pub fn get(&self, category: Category) -> &[Entry] {
        &self.buckets[category.ordinal()]
    }

    /// Lookup by name. An unknown name yields an empty slice, not an error.
    pub fn get_by_name(&self, name: &str) -> &[Entry] {
        match Category::parse(name) {
            Some(category) => self.get(category),
            None => &[],
        }
    }

    /// `(category, count)` for every category, in listing order.
    pub fn counts(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.get(category).len()))
    }

    /// First entry of each non-empty category, in listing order.
    pub fn featured(&self) -> Vec<Entry> {
        self.buckets
            .iter()
            .filter_map(|bucket| bucket.first().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}
