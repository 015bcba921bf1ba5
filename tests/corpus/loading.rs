//! Entry file loading: order, file shapes, skipped files.

use serde_json::json;

use super::common::{titles, write_corpus};
use lorekeep::corpus::{load_corpus, load_corpus_with_progress};
use lorekeep::{Category, Library, UNTITLED};

#[test]
fn test_manifest_order_is_corpus_order() {
    let files: Vec<(String, serde_json::Value)> = (0..24)
        .map(|i| {
            (
                format!("entry-{:02}.json", 23 - i),
                json!({ "title": format!("Page {}", 23 - i), "slug": format!("page-{}", 23 - i), "category": "concepts" }),
            )
        })
        .collect();
    let borrowed: Vec<(&str, serde_json::Value)> =
        files.iter().map(|(name, value)| (name.as_str(), value.clone())).collect();
    let dir = write_corpus(&borrowed, None);

    let corpus = load_corpus(dir.path()).unwrap();
    let slugs: Vec<&str> = corpus.entries.iter().map(|e| e.slug.as_str()).collect();
    let expected: Vec<String> = (0..24).rev().map(|i| format!("page-{}", i)).collect();
    assert_eq!(slugs, expected);
}

#[test]
fn test_array_and_single_entry_files() {
    let dir = write_corpus(
        &[
            (
                "locations.json",
                json!([
                    { "title": "Ironclad Watch", "slug": "ironclad-watch", "category": "locations", "tags": ["fortress"] },
                    { "title": "Frostmere", "slug": "frostmere", "category": "locations", "type": "Lake" }
                ]),
            ),
            (
                "ironhand-guild.json",
                json!({ "title": "Ironhand Guild", "slug": "ironhand-guild", "category": "factions", "founded": 812 }),
            ),
        ],
        None,
    );

    let corpus = load_corpus(dir.path()).unwrap();
    assert_eq!(corpus.entries.len(), 3);
    assert_eq!(corpus.entries[1].kind.as_deref(), Some("Lake"));
    assert_eq!(corpus.entries[2].category, Category::Factions);
    assert_eq!(corpus.entries[2].extra["founded"], 812);
}

#[test]
fn test_bad_files_are_skipped() {
    let dir = write_corpus(
        &[
            ("good.json", json!({ "title": "Dragon", "slug": "dragon", "category": "creatures" })),
            ("no-slug.json", json!({ "title": "Nameless", "category": "creatures" })),
            ("bad-category.json", json!({ "title": "Ship", "slug": "ship", "category": "vessels" })),
        ],
        None,
    );

    let corpus = load_corpus_with_progress(dir.path()).unwrap();
    assert_eq!(corpus.entries.len(), 1);
    assert_eq!(corpus.skipped, 2);
}

#[test]
fn test_listed_file_missing_on_disk_is_skipped() {
    let dir = write_corpus(
        &[("dragon.json", json!({ "title": "Dragon", "slug": "dragon", "category": "creatures" }))],
        None,
    );
    std::fs::remove_file(dir.path().join("dragon.json")).unwrap();

    let corpus = load_corpus(dir.path()).unwrap();
    assert!(corpus.entries.is_empty());
    assert_eq!(corpus.skipped, 1);
}

#[test]
fn test_missing_title_becomes_untitled() {
    let dir = write_corpus(
        &[("blank.json", json!({ "slug": "blank", "category": "concepts", "tags": ["mystery"] }))],
        None,
    );
    let corpus = load_corpus(dir.path()).unwrap();
    assert_eq!(corpus.entries[0].title, UNTITLED);
}

#[test]
fn test_loaded_corpus_is_searchable() {
    let dir = write_corpus(
        &[(
            "iron.json",
            json!([
                { "title": "Ironclad Watch", "slug": "ironclad-watch", "category": "locations" },
                { "title": "Ironhand Guild", "slug": "ironhand-guild", "category": "factions" }
            ]),
        )],
        Some(json!({ "searchLimit": 1 })),
    );
    let corpus = load_corpus(dir.path()).unwrap();
    let mut library = Library::new(corpus.config);
    library.initialize(corpus.entries);

    assert_eq!(titles(&library.search("iron")), vec!["Ironclad Watch"]);
}
