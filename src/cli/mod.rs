// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lorekeep command-line interface.
//!
//! Four subcommands over a corpus directory: `search` to run ranked queries,
//! `list` to show one category, `random` to pull random entries, and `stats`
//! to summarize the corpus and its index. `--json` on any of them prints
//! machine-readable output instead of the boxed terminal view.

pub mod commands;
pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lorekeep",
    about = "Search and browse a lore wiki corpus",
    version
)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors and hide the progress bar
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Cache lifetime in seconds (overrides the manifest config)
    #[arg(long, global = true)]
    pub ttl: Option<u64>,

    /// Print JSON instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ranked search over titles, tags and metadata
    Search {
        /// Corpus directory containing manifest.json and entry files
        #[arg(short, long)]
        input: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Skip the index and rank with the linear scan
        #[arg(long)]
        fallback: bool,
    },

    /// List the entries of one category
    List {
        #[arg(short, long)]
        input: PathBuf,

        /// Category name (characters, locations, factions, ...)
        category: String,
    },

    /// Pick random entries
    Random {
        #[arg(short, long)]
        input: PathBuf,

        /// Number of entries to pick
        #[arg(short, long, default_value = "1")]
        count: usize,
    },

    /// Corpus and index summary
    Stats {
        #[arg(short, long)]
        input: PathBuf,
    },
}

impl Cli {
    /// `tracing` level implied by `-q` / `-v`.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
