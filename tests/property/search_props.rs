//! Ranking properties on both search paths.

use lorekeep::scoring::ranking::compare_results;
use lorekeep::{build_token_index, search_fallback, search_indexed, Category, Entry, DEFAULT_LIMIT};
use proptest::prelude::*;

use super::common::assert_ranked;
use super::strategies::{corpus, query, word};

proptest! {
    #[test]
    fn prop_limit_invariant(entries in corpus(30), q in query(), limit in 0usize..25) {
        let index = build_token_index(&entries).unwrap();
        prop_assert!(search_indexed(&q, &index, &entries, limit).len() <= limit);
        prop_assert!(search_fallback(&q, &entries, limit).len() <= limit);
    }

    #[test]
    fn prop_results_sorted_and_positive(entries in corpus(20), q in query()) {
        let index = build_token_index(&entries).unwrap();
        for results in [
            search_indexed(&q, &index, &entries, DEFAULT_LIMIT),
            search_fallback(&q, &entries, DEFAULT_LIMIT),
        ] {
            assert_ranked(&results);
            prop_assert!(results.windows(2).all(|p| compare_results(&p[0], &p[1]).is_lt()));
            for result in &results {
                prop_assert!(result.score > 0);
                prop_assert_eq!(&result.entry, &entries[result.position]);
            }
        }
    }

    #[test]
    fn prop_smaller_limit_is_a_prefix(entries in corpus(20), q in query(), limit in 0usize..10) {
        let index = build_token_index(&entries).unwrap();
        let full = search_indexed(&q, &index, &entries, DEFAULT_LIMIT);
        let cut = search_indexed(&q, &index, &entries, limit);
        prop_assert_eq!(&cut[..], &full[..cut.len()]);
    }

    #[test]
    fn prop_short_queries_match_nothing(entries in corpus(10), c in "[a-z ]?", pad in " {0,3}") {
        let q = format!("{}{}{}", pad, c, pad);
        let index = build_token_index(&entries).unwrap();
        prop_assert!(search_indexed(&q, &index, &entries, DEFAULT_LIMIT).is_empty());
        prop_assert!(search_fallback(&q, &entries, DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn prop_exact_title_outranks_tag_only(w in word(), filler in corpus(5)) {
        let w = w.to_lowercase();
        let mut entries = filler;
        let tagged = entries.len();
        entries.push(Entry::new("Unrelated Name", "tagged-only", Category::Artifacts).with_tags([w.clone()]));
        entries.push(Entry::new(w.clone(), "exact-title", Category::Concepts));

        let index = build_token_index(&entries).unwrap();
        for results in [
            search_indexed(&w, &index, &entries, usize::MAX),
            search_fallback(&w, &entries, usize::MAX),
        ] {
            let rank_of = |slug: &str| results.iter().position(|r| r.entry.slug == slug);
            let exact = rank_of("exact-title");
            let tag_only = rank_of("tagged-only");
            prop_assert!(exact.is_some());
            prop_assert!(tag_only.is_some());
            prop_assert!(exact < tag_only, "tagged entry at {} beat exact title", tagged);
        }
    }
}
