// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

use crate::config::LibraryConfig;

/// The only manifest layout this crate reads.
pub const MANIFEST_VERSION: u32 = 1;

/// `manifest.json` at the root of a corpus directory.
#[derive(Deserialize, Clone, Debug)]
pub struct CorpusManifest {
    pub version: u32,
    /// Entry files relative to the corpus directory. Corpus order follows
    /// this list.
    pub entries: Vec<String>,
    #[serde(default)]
    pub config: LibraryConfig,
}
