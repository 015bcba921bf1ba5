// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use lorekeep::corpus::{load_corpus, load_corpus_with_progress};
use lorekeep::{Category, Entry, Library, LibraryStats, NameForm, SearchResult};

use super::display::{
    category_badge, pad_right, result_row, row, section_bot, section_mid, section_top, themed,
    truncate, BLUE, BOLD, DIM, GRAY,
};
use super::{Cli, Commands};

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Search {
            input,
            query,
            limit,
            fallback,
        } => {
            let mut library = open(cli, input, *fallback)?;
            let results = match limit {
                Some(limit) => library.search_with_limit(query, *limit),
                None => library.search(query),
            };
            if cli.json {
                return print_json(&results);
            }
            print_results(query, &results);
        }
        Commands::List { input, category } => {
            let label = match Category::parse(category) {
                Some(parsed) => parsed.display_name(NameForm::Plural),
                None => {
                    let known: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
                    tracing::warn!(category = %category, known = %known.join(", "), "unknown category");
                    category.as_str()
                }
            };
            let mut library = open(cli, input, false)?;
            let entries = library.get_by_category(category);
            if cli.json {
                return print_json(&entries);
            }
            print_entries(label, entries.iter());
        }
        Commands::Random { input, count } => {
            let library = open(cli, input, false)?;
            let picked = library.get_random_n(*count);
            if cli.json {
                return print_json(&picked);
            }
            print_entries("Random", picked.into_iter());
        }
        Commands::Stats { input } => {
            let library = open(cli, input, false)?;
            let stats = library.stats();
            if cli.json {
                return print_json(&stats);
            }
            print_stats(&stats);
        }
    }
    Ok(())
}

/// Load a corpus directory into a fresh library, applying flag overrides.
fn open(cli: &Cli, input: &Path, fallback: bool) -> Result<Library> {
    let corpus = if cli.quiet || cli.json {
        load_corpus(input)
    } else {
        load_corpus_with_progress(input)
    }
    .with_context(|| format!("failed to load corpus from {}", input.display()))?;

    let mut config = corpus.config;
    if let Some(ttl) = cli.ttl {
        config.cache_ttl_secs = ttl;
    }
    if fallback {
        config.defer_indexing = true;
    }

    let mut library = Library::new(config);
    library.initialize(corpus.entries);
    Ok(library)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to encode output")?;
    println!("{}", json);
    Ok(())
}

fn print_results(query: &str, results: &[SearchResult]) {
    section_top(&format!("SEARCH \"{}\"", truncate(query, 40)));
    if results.is_empty() {
        row(&themed(GRAY, &[DIM], "no matches"));
    }
    for result in results {
        row(&result_row(result));
    }
    section_mid();
    row(&format!("{} results", results.len()));
    section_bot();
}

fn print_entries<'a>(label: &str, entries: impl Iterator<Item = &'a Entry>) {
    section_top(&label.to_uppercase());
    let mut shown = 0;
    for entry in entries {
        let tags = truncate(&entry.tags.join(", "), 24);
        row(&format!(
            "{} {} {}",
            pad_right(&category_badge(entry.category), 12),
            pad_right(&themed(BLUE, &[BOLD], &truncate(&entry.title, 30)), 31),
            themed(GRAY, &[DIM], &tags),
        ));
        shown += 1;
    }
    if shown == 0 {
        row(&themed(GRAY, &[DIM], "nothing here"));
    }
    section_bot();
}

fn print_stats(stats: &LibraryStats) {
    section_top("CORPUS");
    row(&format!("{:<20}{}", "entries", stats.total_entries));
    for (category, count) in &stats.per_category {
        row(&format!(
            "  {:<18}{:<6}{}",
            category.display_name(NameForm::Plural),
            count,
            themed(GRAY, &[DIM], &truncate(category.description(), 44)),
        ));
    }
    section_mid();
    row(&format!(
        "{:<20}{}",
        "index",
        if stats.indexed { "ready" } else { "not built" }
    ));
    row(&format!("  {:<18}{}", "title tokens", stats.index_tokens.title));
    row(&format!("  {:<18}{}", "tag tokens", stats.index_tokens.tag));
    row(&format!("  {:<18}{}", "metadata tokens", stats.index_tokens.metadata));
    section_bot();
}
