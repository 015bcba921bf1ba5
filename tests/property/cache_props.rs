//! Cache idempotence and expiry under arbitrary timelines.

use std::cell::Cell;
use std::time::Duration;

use lorekeep::{CacheMode, Library, LibraryConfig, ManualClock, ResultCache, SearchResult};
use proptest::prelude::*;

use super::strategies::{corpus, query};

const TTL: Duration = Duration::from_secs(60);

fn one_hit() -> Vec<SearchResult> {
    let entry = lorekeep::testing::make_entry("Frostmere", lorekeep::Category::Locations);
    vec![SearchResult {
        entry,
        score: 50,
        position: 0,
    }]
}

fn mode() -> impl Strategy<Value = CacheMode> {
    prop_oneof![Just(CacheMode::Direct), Just(CacheMode::Serialized)]
}

proptest! {
    /// Within one TTL window a key is computed once, however the lookups are spaced.
    #[test]
    fn prop_compute_once_per_window(steps in prop::collection::vec(0u64..=20, 1..10), mode in mode()) {
        let clock = ManualClock::new();
        let mut cache = ResultCache::with_clock(TTL, mode, clock.clone());
        let calls = Cell::new(0);
        let mut elapsed = 0;

        for step in steps {
            if elapsed + step > TTL.as_secs() {
                break;
            }
            elapsed += step;
            clock.advance(Duration::from_secs(step));
            cache.get_or_compute("frost", || {
                calls.set(calls.get() + 1);
                one_hit()
            });
        }
        prop_assert_eq!(calls.get(), 1);
    }

    /// Crossing the TTL forces exactly one recompute.
    #[test]
    fn prop_expiry_recomputes(extra in 1u64..1000, mode in mode()) {
        let clock = ManualClock::new();
        let mut cache = ResultCache::with_clock(TTL, mode, clock.clone());
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            one_hit()
        };

        cache.get_or_compute("frost", compute);
        clock.advance(TTL + Duration::from_millis(extra));
        cache.get_or_compute("frost", compute);
        cache.get_or_compute("frost", compute);
        prop_assert_eq!(calls.get(), 2);
    }

    /// Cached answers are the answers a fresh search would give.
    #[test]
    fn prop_cached_equals_uncached(entries in corpus(15), q in query(), mode in mode()) {
        let config = LibraryConfig { cache_mode: mode, ..LibraryConfig::default() };
        let mut library = Library::new(config);
        library.initialize(entries);

        let fresh = library.search_with_limit(&q, library.config().search_limit);
        prop_assert_eq!(&library.search(&q), &fresh);
        prop_assert_eq!(&library.search(&q), &fresh);
    }

    /// Case and padding variants share one slot.
    #[test]
    fn prop_key_variants_share_a_slot(q in query(), pad in " {0,3}") {
        let mut cache = ResultCache::with_clock(TTL, CacheMode::Direct, ManualClock::new());
        cache.get_or_compute(&q, one_hit);
        cache.get_or_compute(&format!("{}{}{}", pad, q.to_uppercase(), pad), one_hit);
        prop_assert_eq!(cache.stats().searches, 1);
    }
}
