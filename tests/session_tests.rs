use market_watch::search::SearchOutcome;
use market_watch::{Error, Region, Session};
use tempfile::TempDir;

#[test]
fn default_selection_matches_the_dashboard() {
    let dir = TempDir::new().unwrap();
    let session = Session::with_dir(dir.path());

    assert_eq!(session.selection.item, "T4_BAG");
    assert_eq!(session.selection.region, Region::West);
    assert_eq!(session.selection.scale, 24);
}

#[test]
fn search_before_catalog_load_reports_not_loaded() {
    let dir = TempDir::new().unwrap();
    let session = Session::with_dir(dir.path());
    assert_eq!(session.search("bag"), SearchOutcome::NotLoaded);
}

#[test]
fn watchlist_add_without_item_fails_without_side_effects() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::with_dir(dir.path());
    session.select_item("");

    match session.add_current_to_watchlist() {
        Err(Error::NoItemSelected) => {}
        other => panic!("Expected Error::NoItemSelected, got: {other:?}"),
    }
    assert!(session.watchlist.is_empty());
}

#[test]
fn loading_a_watch_entry_replaces_the_selection() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::with_dir(dir.path());

    session.select_item("T5_CAPE");
    session.selection.quality = 3;
    session.add_current_to_watchlist().unwrap();
    let key = session.selection.watch_key();

    session.select_item("T4_BAG");
    session.selection.quality = 1;

    assert!(session.load_watch_entry(&key));
    assert_eq!(session.selection.item, "T5_CAPE");
    assert_eq!(session.selection.quality, 3);

    assert!(!session.load_watch_entry("west|Nowhere|1|24|MISSING"));
}
