// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only corpus loading surfaces errors to callers. Index and cache errors are
//! absorbed by [`Library`](crate::Library): a failed index build degrades to the
//! linear-scan path, a corrupted cache slot degrades to a miss. They are still
//! typed so the recovery sites can log something useful.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::Category;

/// Index construction failed. The corpus is served by the fallback scan until
/// the next `initialize`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Two entries share a `(category, slug)` pair.
    #[error("duplicate entry {category}/{slug}")]
    DuplicateEntry { category: Category, slug: String },

    /// Entry positions are stored as `u32`.
    #[error("corpus of {count} entries exceeds the index position space")]
    TooManyEntries { count: usize },
}

/// A serialized cache slot could not be read back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("cache slot '{key}' is corrupted: {reason}")]
    Corrupted { key: String, reason: String },

    #[error("failed to serialize cache value: {0}")]
    Serialize(String),
}

/// Corpus loading errors (CLI and loader tests only).
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported manifest version {0} (expected 1)")]
    UnsupportedManifestVersion(u32),
}
