//! Shared proptest strategies.

use lorekeep::{Category, Entry};
use proptest::prelude::*;

pub const VOCABULARY: &[&str] = &[
    "iron", "ironclad", "ironhand", "ember", "grey", "council", "watch", "guild", "ash", "ashen",
    "frost", "frostmere", "dragon", "relic", "north", "mage",
];

/// One vocabulary word, sometimes capitalized.
pub fn word() -> impl Strategy<Value = String> {
    (prop::sample::select(VOCABULARY), any::<bool>()).prop_map(|(word, upper)| {
        if upper {
            let mut chars = word.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect())
                .unwrap_or_default()
        } else {
            word.to_string()
        }
    })
}

/// One to three words joined by spaces.
pub fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..4).prop_map(|words| words.join(" "))
}

pub fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

pub fn entry(position: usize) -> impl Strategy<Value = Entry> {
    (
        phrase(),
        category(),
        prop::collection::vec(phrase(), 0..3),
        prop::option::of(phrase()),
        prop::option::of(word()),
    )
        .prop_map(move |(title, category, tags, faction, status)| {
            let mut entry =
                Entry::new(title, format!("entry-{}", position), category).with_tags(tags);
            entry.faction = faction;
            entry.status = status;
            entry
        })
}

/// A corpus with unique slugs, so the index always builds.
pub fn corpus(max: usize) -> impl Strategy<Value = Vec<Entry>> {
    (0..=max).prop_flat_map(|len| (0..len).map(entry).collect::<Vec<_>>())
}

/// Queries: mostly vocabulary phrases, sometimes bare prefixes.
pub fn query() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => phrase(),
        1 => word().prop_map(|w| w.chars().take(3).collect()),
    ]
}
