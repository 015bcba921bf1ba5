// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Library configuration.
//!
//! Every field has a default, so `{}` is a valid config. The CLI reads this
//! from the `config` object of a corpus manifest and lets flags override it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::search::{DEFAULT_LIMIT, MIN_QUERY_CHARS};

/// Default cache lifetime: ten minutes.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;

/// How cached values are held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheMode {
    /// Values kept as-is.
    #[default]
    Direct,
    /// Values kept as checksummed JSON bytes and decoded on every hit.
    Serialized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LibraryConfig {
    /// Whole-cache lifetime in seconds.
    pub cache_ttl_secs: u64,
    /// Result cap for `Library::search`.
    pub search_limit: usize,
    /// Minimum trimmed query length in characters.
    pub min_query_len: usize,
    /// Skip index construction in `initialize`; the host calls `ensure_indexed`.
    pub defer_indexing: bool,
    pub cache_mode: CacheMode,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        LibraryConfig {
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            search_limit: DEFAULT_LIMIT,
            min_query_len: MIN_QUERY_CHARS,
            defer_indexing: false,
            cache_mode: CacheMode::Direct,
        }
    }
}

impl LibraryConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
