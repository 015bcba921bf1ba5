//! In-memory search and caching for a lore wiki.
//!
//! A corpus of [`Entry`] values (characters, locations, factions, artifacts,
//! concepts, creatures) is indexed into three token namespaces and queried
//! with a ranked, prefix-aware search. Results sit in a TTL cache that expires
//! as a whole.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────┐
//! │  types.rs   │────▶│ inverted.rs  │────▶│ search/indexed  │──┐
//! │  (Entry,    │     │ (TokenIndex, │     │ (postings +     │  │
//! │  Category)  │     │  3 fields)   │     │  prefix scan)   │  │
//! └─────────────┘     └──────────────┘     └─────────────────┘  │
//!        │                                 ┌─────────────────┐  │   ┌───────────┐
//!        ├────────────────────────────────▶│ search/fallback │──┼──▶│ scoring/  │
//!        │                                 │ (linear scan)   │  │   │ ranking   │
//!        │                                 └─────────────────┘  │   └───────────┘
//!        ▼                                                      ▼
//! ┌──────────────┐                              ┌──────────────────────────────┐
//! │ partition.rs │─────────────────────────────▶│ library.rs                   │
//! └──────────────┘                              │ (Library: IndexState + cache)│
//!                                               └──────────────────────────────┘
//!                                                              │
//!                                                              ▼
//!                                               ┌──────────────────────────────┐
//!                                               │ cache/ (ResultCache, Clock,  │
//!                                               │ direct or checksummed slots) │
//!                                               └──────────────────────────────┘
//! ```
//!
//! `verify` checks a built index against its corpus; `corpus` loads a corpus
//! directory from disk for the CLI.
//!
//! # Usage
//!
//! ```
//! use lorekeep::{Category, Entry, Library, LibraryConfig};
//!
//! let mut library = Library::new(LibraryConfig::default());
//! library.initialize(vec![
//!     Entry::new("Ironclad Watch", "ironclad-watch", Category::Locations),
//!     Entry::new("Ironhand Guild", "ironhand-guild", Category::Factions),
//! ]);
//!
//! let results = library.search("iron");
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].entry.title, "Ironclad Watch");
//! ```

pub mod cache;
pub mod config;
pub mod corpus;
mod error;
pub mod inverted;
mod library;
pub mod partition;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
pub mod utils;
pub mod verify;

// Re-exports for public API
pub use cache::{CacheStats, Clock, ManualClock, ResultCache, SystemClock};
pub use config::{CacheMode, LibraryConfig, DEFAULT_CACHE_TTL_SECS};
pub use error::{CacheError, CorpusError, IndexError};
pub use inverted::{build_token_index, Field, IndexStats, Position, TokenIndex};
#[cfg(feature = "parallel")]
pub use inverted::build_token_index_parallel;
pub use library::{IndexState, Library, LibraryStats, PARALLEL_THRESHOLD};
pub use partition::CategoryPartition;
pub use search::{search_fallback, search_indexed, simple_search, DEFAULT_LIMIT, MIN_QUERY_CHARS};
pub use types::{entry_key, Category, Entry, NameForm, SearchResult, UNTITLED};
pub use utils::normalize;
pub use verify::{validate_index, InvariantError};
