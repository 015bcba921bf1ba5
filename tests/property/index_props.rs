//! Index construction properties.

use std::collections::BTreeSet;

use lorekeep::{build_token_index, validate_index, Field};
use proptest::prelude::*;

use super::strategies::{corpus, word};

proptest! {
    #[test]
    fn prop_index_passes_validation(entries in corpus(20)) {
        let index = build_token_index(&entries).unwrap();
        prop_assert_eq!(validate_index(&index, &entries), Ok(()));
        prop_assert_eq!(index.entry_count(), entries.len());
    }

    #[test]
    fn prop_postings_strictly_ascending(entries in corpus(20)) {
        let index = build_token_index(&entries).unwrap();
        for field in Field::ALL {
            for (_, positions) in index.tokens(field) {
                prop_assert!(!positions.is_empty());
                prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
            }
        }
    }

    #[test]
    fn prop_prefix_matches_are_exactly_the_prefixed_tokens(entries in corpus(15), prefix in word()) {
        let prefix: String = prefix.to_lowercase().chars().take(3).collect();
        let index = build_token_index(&entries).unwrap();

        let from_range: Vec<&str> = index
            .prefix_matches(Field::Title, &prefix)
            .map(|(token, _)| token)
            .collect();
        let from_scan: Vec<&str> = index
            .tokens(Field::Title)
            .map(|(token, _)| token)
            .filter(|token| token.starts_with(prefix.as_str()))
            .collect();
        prop_assert_eq!(from_range, from_scan);
    }

    #[test]
    fn prop_token_set_ignores_corpus_order(entries in corpus(15)) {
        let mut reversed = entries.clone();
        reversed.reverse();

        let forward = build_token_index(&entries).unwrap();
        let backward = build_token_index(&reversed).unwrap();
        for field in Field::ALL {
            let a: BTreeSet<&str> = forward.tokens(field).map(|(t, _)| t).collect();
            let b: BTreeSet<&str> = backward.tokens(field).map(|(t, _)| t).collect();
            prop_assert_eq!(a, b);
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn prop_parallel_build_matches_sequential(entries in corpus(30)) {
        prop_assert_eq!(
            lorekeep::build_token_index_parallel(&entries),
            build_token_index(&entries)
        );
    }
}
