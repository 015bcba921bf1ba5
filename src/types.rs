// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the lore corpus.
//!
//! An [`Entry`] is one wiki page's metadata as handed over by the corpus
//! provider. The core only ever reads entries; positions into the corpus slice
//! are the identity used by the index, the ranking tie-break and the partition.
//!
//! # Invariants
//!
//! - `(category, slug)` is unique across a corpus. The index build rejects
//!   duplicates (see [`IndexError::DuplicateEntry`](crate::IndexError)).
//! - Entries are never mutated after `initialize`.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// CATEGORY
// =============================================================================

/// The fixed category enumeration. Declaration order is listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Characters,
    Locations,
    Factions,
    Artifacts,
    Concepts,
    Creatures,
}

/// Grammatical number for [`Category::display_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameForm {
    Single,
    Plural,
}

impl Category {
    /// Every category, in listing order.
    pub const ALL: [Category; 6] = [
        Category::Characters,
        Category::Locations,
        Category::Factions,
        Category::Artifacts,
        Category::Concepts,
        Category::Creatures,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// URL segment / serialized name.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Characters => "characters",
            Category::Locations => "locations",
            Category::Factions => "factions",
            Category::Artifacts => "artifacts",
            Category::Concepts => "concepts",
            Category::Creatures => "creatures",
        }
    }

    /// Look up a category by name. Case and surrounding whitespace are ignored.
    ///
    /// Returns `None` for anything outside the enumeration; callers treat that
    /// as an empty listing, never as an error.
    pub fn parse(name: &str) -> Option<Category> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }

    /// Dense index in `0..Category::COUNT`.
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn display_name(self, form: NameForm) -> &'static str {
        match (self, form) {
            (Category::Characters, NameForm::Single) => "Character",
            (Category::Characters, NameForm::Plural) => "Characters",
            (Category::Locations, NameForm::Single) => "Location",
            (Category::Locations, NameForm::Plural) => "Locations",
            (Category::Factions, NameForm::Single) => "Faction",
            (Category::Factions, NameForm::Plural) => "Factions",
            (Category::Artifacts, NameForm::Single) => "Artifact",
            (Category::Artifacts, NameForm::Plural) => "Artifacts",
            (Category::Concepts, NameForm::Single) => "Concept",
            (Category::Concepts, NameForm::Plural) => "Concepts",
            (Category::Creatures, NameForm::Single) => "Creature",
            (Category::Creatures, NameForm::Plural) => "Creatures",
        }
    }

    /// One-line blurb shown on category pages.
    pub fn description(self) -> &'static str {
        match self {
            Category::Characters => "Influential figures of the world",
            Category::Locations => "Cities, fortresses and mysterious places",
            Category::Factions => "States, organizations and alliances",
            Category::Artifacts => "Magical items and relics",
            Category::Concepts => "Philosophies and principles of the world",
            Category::Creatures => "Monsters, demons and fantastic beings",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ENTRY
// =============================================================================

/// Title used when the provider hands over an entry without one.
pub const UNTITLED: &str = "Untitled";

fn default_title() -> String {
    UNTITLED.to_string()
}

/// One lore entry.
///
/// Optional metadata is `None` when absent, never an empty placeholder.
/// Fields the core does not index are kept in `extra` so a round trip through
/// the provider format is lossless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default = "default_title")]
    pub title: String,
    pub slug: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faction: Option<String>,
    /// The `type` metadata field.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Entry {
    pub fn new(title: impl Into<String>, slug: impl Into<String>, category: Category) -> Self {
        Entry {
            title: title.into(),
            slug: slug.into(),
            category,
            tags: Vec::new(),
            faction: None,
            kind: None,
            status: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_faction(mut self, faction: impl Into<String>) -> Self {
        self.faction = Some(faction.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Non-empty metadata fields in index order: faction, type, status.
    pub fn metadata(&self) -> impl Iterator<Item = &str> {
        [&self.faction, &self.kind, &self.status]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .filter(|value| !value.trim().is_empty())
    }

    /// Page path: `/{category}/{slug}`.
    pub fn href(&self) -> String {
        format!("/{}/{}", self.category, self.slug)
    }

    /// Key for the single-entry cache.
    pub fn key(&self) -> String {
        entry_key(self.category, &self.slug)
    }
}

/// `category/slug`, the unique identity of an entry.
pub fn entry_key(category: Category, slug: &str) -> String {
    format!("{}/{}", category, slug)
}

// =============================================================================
// SEARCH RESULT
// =============================================================================

/// A ranked hit.
///
/// `score` only has meaning relative to other results of the same query.
/// `position` is the entry's index in the corpus and the ranking tie-break.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub entry: Entry,
    pub score: u32,
    pub position: usize,
}
