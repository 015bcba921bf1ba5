// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus directories on disk.
//!
//! The search core never touches the filesystem; this module is how the CLI
//! (and anyone else holding a directory of JSON pages) gets a corpus:
//!
//! ```text
//! lore/
//! ├── manifest.json      {"version": 1, "entries": [...], "config": {...}}
//! ├── characters.json    [ {entry}, {entry}, ... ]
//! └── ironclad-watch.json  {entry}
//! ```

pub mod loading;
pub mod manifest;

use std::fs;
use std::path::Path;

use crate::config::LibraryConfig;
use crate::error::CorpusError;
use crate::types::Entry;

pub use loading::{load_entries, load_entries_with_progress, load_entry_file, LoadedEntries};
pub use manifest::{CorpusManifest, MANIFEST_VERSION};

/// A loaded corpus directory.
#[derive(Debug)]
pub struct Corpus {
    pub entries: Vec<Entry>,
    pub config: LibraryConfig,
    /// Entry files that could not be read or parsed.
    pub skipped: usize,
}

/// Read and check `manifest.json`.
pub fn read_manifest(input_dir: &Path) -> Result<CorpusManifest, CorpusError> {
    let path = input_dir.join("manifest.json");
    let content = fs::read_to_string(&path).map_err(|source| CorpusError::Io {
        path: path.clone(),
        source,
    })?;
    let manifest: CorpusManifest =
        serde_json::from_str(&content).map_err(|source| CorpusError::Json { path, source })?;

    if manifest.version != MANIFEST_VERSION {
        return Err(CorpusError::UnsupportedManifestVersion(manifest.version));
    }
    Ok(manifest)
}

/// Load a corpus directory without progress output.
pub fn load_corpus(input_dir: &Path) -> Result<Corpus, CorpusError> {
    let manifest = read_manifest(input_dir)?;
    let loaded = load_entries(input_dir, &manifest);
    Ok(finish(manifest, loaded))
}

/// Load a corpus directory, drawing a progress bar on stderr.
pub fn load_corpus_with_progress(input_dir: &Path) -> Result<Corpus, CorpusError> {
    let manifest = read_manifest(input_dir)?;
    let loaded = load_entries_with_progress(input_dir, &manifest);
    Ok(finish(manifest, loaded))
}

fn finish(manifest: CorpusManifest, loaded: LoadedEntries) -> Corpus {
    if loaded.skipped > 0 {
        tracing::warn!(
            skipped = loaded.skipped,
            listed = manifest.entries.len(),
            "some entry files were skipped"
        );
    }
    Corpus {
        entries: loaded.entries,
        config: manifest.config,
        skipped: loaded.skipped,
    }
}
