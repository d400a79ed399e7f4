use market_watch::search::{search, SearchOutcome, MAX_RESULTS, MIN_QUERY_LEN};
use market_watch::CatalogEntry;

fn entry(id: &str, name: &str) -> CatalogEntry {
    CatalogEntry::new(id.to_string(), name.to_string(), String::new(), String::new())
}

fn small_catalog() -> Vec<CatalogEntry> {
    vec![
        entry("T4_BAG", "Bag"),
        entry("T4_SATCHEL", "T4 Satchel"),
        entry("T5_BAG", "Adept's Bag"),
        entry("T4_CAPE", "Cape"),
        entry("T6_OMELETTE", "Omelette"),
    ]
}

#[test]
fn empty_catalog_reports_not_loaded() {
    assert_eq!(search(&[], "bag"), SearchOutcome::NotLoaded);
}

#[test]
fn short_query_prompts_instead_of_matching() {
    let catalog = small_catalog();
    assert_eq!(search(&catalog, "b"), SearchOutcome::Prompt);
    assert_eq!(search(&catalog, "  b  "), SearchOutcome::Prompt);
    assert_eq!(search(&catalog, ""), SearchOutcome::Prompt);
    assert_eq!(MIN_QUERY_LEN, 2);
}

#[test]
fn no_match_is_distinct_from_prompt() {
    let catalog = small_catalog();
    assert_eq!(search(&catalog, "zzzzzz"), SearchOutcome::NoMatches);
}

#[test]
fn exact_name_match_ranks_first() {
    let catalog = small_catalog();
    match search(&catalog, "bag") {
        SearchOutcome::Matches(m) => {
            assert_eq!(m[0].id, "T4_BAG");
            // Partial matches still show up after
            assert!(m.iter().any(|e| e.id == "T5_BAG"));
        }
        other => panic!("Expected matches, got: {other:?}"),
    }
}

#[test]
fn token_and_id_hits_dominate_partial_name_matches() {
    // "t4 bag": T4_BAG gets id-contains + both token hits; the satchel only
    // gets name hits for the t4 token
    let catalog = small_catalog();
    match search(&catalog, "t4 bag") {
        SearchOutcome::Matches(m) => {
            assert_eq!(m[0].id, "T4_BAG");
            let satchel_pos = m.iter().position(|e| e.id == "T4_SATCHEL");
            assert!(satchel_pos.map(|p| p > 0).unwrap_or(true));
        }
        other => panic!("Expected matches, got: {other:?}"),
    }
}

#[test]
fn query_is_trimmed_and_case_insensitive() {
    let catalog = small_catalog();
    match search(&catalog, "  BAG ") {
        SearchOutcome::Matches(m) => assert_eq!(m[0].id, "T4_BAG"),
        other => panic!("Expected matches, got: {other:?}"),
    }
}

#[test]
fn scores_sum_across_clauses() {
    // "cape" on entry (T4_CAPE, "Cape"): exact name 1000 + name starts-with
    // 260 + name contains 140 + id contains 120 = beats any single clause.
    // Verified indirectly: an entry whose id merely contains the query must
    // rank below it even with a higher-weight single hit elsewhere absent.
    let catalog = vec![entry("CAPE_ADDON", "Trim"), entry("T4_CAPE", "Cape")];
    match search(&catalog, "cape") {
        SearchOutcome::Matches(m) => {
            assert_eq!(m[0].id, "T4_CAPE");
            assert_eq!(m[1].id, "CAPE_ADDON");
        }
        other => panic!("Expected matches, got: {other:?}"),
    }
}

#[test]
fn ties_keep_catalog_order() {
    // Same name twice: identical scores, catalog order must survive the sort
    let catalog = vec![
        entry("FIRST_BAG", "Duffel"),
        entry("SECOND_BAG", "Duffel"),
        entry("THIRD_BAG", "Duffel"),
    ];
    match search(&catalog, "duffel") {
        SearchOutcome::Matches(m) => {
            let ids: Vec<&str> = m.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(ids, vec!["FIRST_BAG", "SECOND_BAG", "THIRD_BAG"]);
        }
        other => panic!("Expected matches, got: {other:?}"),
    }
}

#[test]
fn results_are_capped() {
    let catalog: Vec<CatalogEntry> = (0..200)
        .map(|i| entry(&format!("T4_BAG_{i}"), &format!("Bag {i}")))
        .collect();
    match search(&catalog, "bag") {
        SearchOutcome::Matches(m) => assert_eq!(m.len(), MAX_RESULTS),
        other => panic!("Expected matches, got: {other:?}"),
    }
}

#[test]
fn single_token_query_gets_no_token_bonus() {
    // "bag" vs "bag bag" must not change relative ordering for a
    // single-field hit, but the multi-token form adds +40 per found token
    let catalog = small_catalog();
    let single = match search(&catalog, "bag") {
        SearchOutcome::Matches(m) => m[0].id.clone(),
        other => panic!("Expected matches, got: {other:?}"),
    };
    assert_eq!(single, "T4_BAG");
}
