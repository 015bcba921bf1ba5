// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel entry file loading.
//!
//! Reading and parsing entry files is embarrassingly parallel: `par_iter()`
//! over the manifest list. Results are collected in manifest order, so the
//! corpus order never depends on which thread finished first.
//!
//! A file that cannot be read or parsed is skipped with a warning. One bad
//! page should not take the whole wiki down.

use std::fs;
use std::path::Path;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Deserialize;

use crate::error::CorpusError;
use crate::types::Entry;

use super::CorpusManifest;

/// An entry file holds one entry or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum EntryFile {
    Many(Vec<Entry>),
    One(Box<Entry>),
}

impl EntryFile {
    fn into_entries(self) -> Vec<Entry> {
        match self {
            EntryFile::Many(entries) => entries,
            EntryFile::One(entry) => vec![*entry],
        }
    }
}

/// Entries in manifest order plus the number of files skipped.
#[derive(Debug, Default)]
pub struct LoadedEntries {
    pub entries: Vec<Entry>,
    pub skipped: usize,
}

/// Read and parse one entry file.
pub fn load_entry_file(path: &Path) -> Result<Vec<Entry>, CorpusError> {
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: EntryFile = serde_json::from_str(&content).map_err(|source| CorpusError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.into_entries())
}

fn collect(results: Vec<Result<Vec<Entry>, CorpusError>>) -> LoadedEntries {
    let mut loaded = LoadedEntries::default();
    for result in results {
        match result {
            Ok(entries) => loaded.entries.extend(entries),
            Err(err) => {
                tracing::warn!(%err, "skipping entry file");
                loaded.skipped += 1;
            }
        }
    }
    loaded
}

/// Load every file the manifest lists, calling `on_file` after each one.
fn load_each<F>(input_dir: &Path, manifest: &CorpusManifest, on_file: F) -> LoadedEntries
where
    F: Fn() + Sync,
{
    let load = |filename: &String| {
        let result = load_entry_file(&input_dir.join(filename));
        on_file();
        result
    };

    #[cfg(feature = "parallel")]
    let results: Vec<_> = manifest.entries.par_iter().map(load).collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = manifest.entries.iter().map(load).collect();

    collect(results)
}

/// Load all entry files listed in the manifest.
pub fn load_entries(input_dir: &Path, manifest: &CorpusManifest) -> LoadedEntries {
    load_each(input_dir, manifest, || {})
}

/// Create the progress style for the loading bar.
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// Load all entry files with a progress bar on stderr.
#[cfg(feature = "parallel")]
pub fn load_entries_with_progress(input_dir: &Path, manifest: &CorpusManifest) -> LoadedEntries {
    let total = manifest.entries.len();
    let progress = ProgressBar::new(total as u64);
    progress.set_style(create_progress_style());
    progress.set_prefix("Loading");
    progress.set_message("entries...");

    let counter = AtomicUsize::new(0);
    let loaded = load_each(input_dir, manifest, || {
        let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
        progress.set_position(count as u64);
        if count % 10 == 0 || count == total {
            progress.set_message(format!("{}/{}", count, total));
        }
    });

    progress.finish_with_message(format!("loaded {} entries", loaded.entries.len()));
    loaded
}

/// Non-parallel fallback (no progress bar).
#[cfg(not(feature = "parallel"))]
pub fn load_entries_with_progress(input_dir: &Path, manifest: &CorpusManifest) -> LoadedEntries {
    load_entries(input_dir, manifest)
}
