//! Ranking order on the indexed path.
//!
//! Scores are pinned exactly where the arithmetic is short enough to check
//! by hand; elsewhere only the order is asserted.

use super::common::{assert_ranked, iron_corpus, make_entry, make_entry_at, make_entry_with_tags, sample_corpus, titles};
use lorekeep::scoring::{
    EXACT_TITLE_BONUS, MULTI_WORD_BONUS, TAG_TOKEN_SCORE, TITLE_PREFIX_SCORE,
    TITLE_STARTS_WITH_BONUS, TITLE_TOKEN_SCORE,
};
use lorekeep::{build_token_index, search_indexed, Category, Entry, SearchResult, DEFAULT_LIMIT};

fn search(entries: &[Entry], query: &str) -> Vec<SearchResult> {
    let index = build_token_index(entries).expect("index build failed");
    search_indexed(query, &index, entries, DEFAULT_LIMIT)
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_prefix_ties_keep_corpus_order() {
    let results = search(&iron_corpus(), "iron");

    assert_eq!(titles(&results), vec!["Ironclad Watch", "Ironhand Guild"]);
    assert_eq!(results[0].score, results[1].score);
    assert_eq!(results[0].score, TITLE_PREFIX_SCORE + TITLE_STARTS_WITH_BONUS);
    assert_eq!(results[0].position, 0);
    assert_eq!(results[1].position, 1);
}

#[test]
fn test_exact_title_beats_tag_match() {
    let entries = vec![
        make_entry_with_tags("Ember Crown", Category::Artifacts, &["dragon"]),
        make_entry("Dragon", Category::Creatures),
    ];
    let results = search(&entries, "dragon");

    assert_eq!(titles(&results), vec!["Dragon", "Ember Crown"]);
    assert_eq!(results[0].score, TITLE_TOKEN_SCORE + EXACT_TITLE_BONUS);
    assert_eq!(results[1].score, TAG_TOKEN_SCORE);
}

#[test]
fn test_title_starting_with_query_ranks_first() {
    let results = search(&sample_corpus(), "grey");

    // Grey Council: title token + starts-with. Aldric the Grey: title token + faction token.
    assert_eq!(titles(&results), vec!["Grey Council", "Aldric the Grey"]);
    assert_eq!(results[0].score, TITLE_TOKEN_SCORE + TITLE_STARTS_WITH_BONUS);
}

#[test]
fn test_multi_word_query_accumulates() {
    let results = search(&sample_corpus(), "grey council");

    assert_eq!(titles(&results), vec!["Grey Council", "Aldric the Grey"]);
    // two title tokens, exact title, "council" in kind, two multi-word hits
    let expected = 2 * TITLE_TOKEN_SCORE + EXACT_TITLE_BONUS + 20 + 2 * MULTI_WORD_BONUS;
    assert_eq!(results[0].score, expected);
    assert_ranked(&results);
}

#[test]
fn test_whole_query_bonus_ignores_surrounding_whitespace() {
    let entries = vec![make_entry("Frostmere", Category::Locations)];
    let results = search(&entries, "   FROSTMERE  ");
    assert_eq!(results[0].score, TITLE_TOKEN_SCORE + EXACT_TITLE_BONUS);
}

#[test]
fn test_each_prefix_token_counts() {
    // "iron" is a strict prefix of two different title tokens here
    let entries = vec![make_entry("Ironwood Ironspire", Category::Locations)];
    let results = search(&entries, "iron");
    assert_eq!(results[0].score, 2 * TITLE_PREFIX_SCORE + TITLE_STARTS_WITH_BONUS);
}

#[test]
fn test_metadata_only_match_is_found() {
    let results = search(&sample_corpus(), "lake");
    assert_eq!(titles(&results), vec!["Frostmere"]);
}

// ============================================================================
// LIMIT
// ============================================================================

#[test]
fn test_default_limit_is_twenty() {
    let entries: Vec<Entry> = (0..25)
        .map(|i| make_entry_at(i, "Ash Road", Category::Locations))
        .collect();
    let results = search(&entries, "ash");

    assert_eq!(results.len(), 20);
    // all tie, so the first twenty positions survive
    let positions: Vec<usize> = results.iter().map(|r| r.position).collect();
    assert_eq!(positions, (0..20).collect::<Vec<_>>());
}

#[test]
fn test_limit_cuts_after_sorting() {
    let entries = vec![
        make_entry_with_tags("Ember Crown", Category::Artifacts, &["dragon"]),
        make_entry_with_tags("The Ashen Pact", Category::Concepts, &["dragon"]),
        make_entry("Dragon", Category::Creatures),
    ];
    let index = build_token_index(&entries).unwrap();
    let top = search_indexed("dragon", &index, &entries, 1);
    assert_eq!(titles(&top), vec!["Dragon"]);
}

#[test]
fn test_zero_limit() {
    let index = build_token_index(&iron_corpus()).unwrap();
    assert!(search_indexed("iron", &index, &iron_corpus(), 0).is_empty());
}
