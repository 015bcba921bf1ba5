//! The library's three cache maps and their shared epoch.

use std::time::Duration;

use super::common::{library_with_clock, sample_corpus};
use lorekeep::{CacheMode, Category, LibraryConfig};

fn config(ttl_secs: u64, mode: CacheMode) -> LibraryConfig {
    LibraryConfig {
        cache_ttl_secs: ttl_secs,
        cache_mode: mode,
        ..LibraryConfig::default()
    }
}

#[test]
fn test_default_ttl_is_ten_minutes() {
    let (mut library, clock) = library_with_clock(LibraryConfig::default(), sample_corpus());
    library.search("grey");

    clock.advance(Duration::from_secs(600));
    library.search("dragon");
    assert_eq!(library.stats().cache.searches, 2);

    clock.advance(Duration::from_secs(1));
    library.search("dragon");
    assert_eq!(library.stats().cache.searches, 1);
}

#[test]
fn test_expiry_clears_every_map_at_once() {
    for mode in [CacheMode::Direct, CacheMode::Serialized] {
        let (mut library, clock) = library_with_clock(config(30, mode), sample_corpus());
        library.search("grey");
        library.get_by_category("factions");
        library.get_entry(Category::Creatures, "dragon");

        clock.advance(Duration::from_secs(31));
        library.get_by_category("locations");

        let stats = library.stats().cache;
        assert_eq!(stats.searches, 0);
        assert_eq!(stats.entries, 0);
        assert_eq!(stats.categories, 1);
        assert_eq!(stats.age, Duration::ZERO);
    }
}

#[test]
fn test_invalidate_cache_resets_epoch() {
    let (mut library, clock) = library_with_clock(config(30, CacheMode::Direct), sample_corpus());
    library.search("grey");
    clock.advance(Duration::from_secs(20));
    library.invalidate_cache();
    assert_eq!(library.stats().cache.searches, 0);

    library.search("grey");
    clock.advance(Duration::from_secs(20));
    // 40s since the first write but only 20s since the reset
    library.search("dragon");
    assert_eq!(library.stats().cache.searches, 2);
}

#[test]
fn test_empty_answers_are_not_cached() {
    let (mut library, _) = library_with_clock(LibraryConfig::default(), sample_corpus());
    assert!(library.search("zzzz").is_empty());
    assert!(library.search("a").is_empty());
    assert!(library.get_by_category("spaceships").is_empty());
    assert_eq!(library.get_entry(Category::Creatures, "unicorn"), None);

    let stats = library.stats().cache;
    assert_eq!((stats.searches, stats.categories, stats.entries), (0, 0, 0));
}

#[test]
fn test_category_keys_are_normalized() {
    let (mut library, _) = library_with_clock(LibraryConfig::default(), sample_corpus());
    let first = library.get_by_category("Factions");
    let second = library.get_by_category("  factions ");
    assert_eq!(first, second);
    assert_eq!(library.stats().cache.categories, 1);
}

#[test]
fn test_serialized_mode_answers_like_direct_mode() {
    let (mut direct, _) = library_with_clock(config(600, CacheMode::Direct), sample_corpus());
    let (mut serialized, _) = library_with_clock(config(600, CacheMode::Serialized), sample_corpus());

    for query in ["grey", "grey", "dragon lore", "iron", "iron"] {
        assert_eq!(direct.search(query), serialized.search(query));
    }
    assert_eq!(
        direct.get_entry(Category::Concepts, "the-ashen-pact"),
        serialized.get_entry(Category::Concepts, "the-ashen-pact")
    );
}
