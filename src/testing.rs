//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Category, Entry};

/// Slug derived from a title: lowercase words joined by `-`.
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Create a test entry with no tags or metadata.
///
/// This is the canonical implementation used across all tests.
pub fn make_entry(title: &str, category: Category) -> Entry {
    Entry::new(title, slugify(title), category)
}

/// Create a test entry with tags.
pub fn make_entry_with_tags(title: &str, category: Category, tags: &[&str]) -> Entry {
    make_entry(title, category).with_tags(tags.iter().copied())
}

/// Create an entry whose slug is derived from its position, so titles may repeat.
pub fn make_entry_at(position: usize, title: &str, category: Category) -> Entry {
    Entry::new(title, format!("entry-{}", position), category)
}

/// The two-entry corpus from the prefix-match scenario.
pub fn iron_corpus() -> Vec<Entry> {
    vec![
        make_entry_with_tags("Ironclad Watch", Category::Locations, &["fortress", "north"]),
        make_entry_with_tags("Ironhand Guild", Category::Factions, &["trade"]),
    ]
}

/// A small corpus touching every category and every metadata field.
pub fn sample_corpus() -> Vec<Entry> {
    vec![
        make_entry_with_tags("Aldric the Grey", Category::Characters, &["mage", "council"])
            .with_faction("Grey Council")
            .with_status("alive"),
        make_entry_with_tags("Ironclad Watch", Category::Locations, &["fortress", "north"])
            .with_kind("Fortress"),
        make_entry_with_tags("Ironhand Guild", Category::Factions, &["trade", "smiths"])
            .with_kind("Guild"),
        make_entry_with_tags("Ember Crown", Category::Artifacts, &["dragon", "relic"])
            .with_status("lost"),
        make_entry_with_tags("Dragon", Category::Creatures, &["wyrm"]),
        make_entry_with_tags("The Ashen Pact", Category::Concepts, &["dragon lore", "oath"]),
        make_entry_with_tags("Grey Council", Category::Factions, &["mage"]).with_kind("Council"),
        make_entry("Frostmere", Category::Locations).with_kind("Lake"),
    ]
}
