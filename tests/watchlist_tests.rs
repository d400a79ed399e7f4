use market_watch::watchlist::{AddOutcome, WatchlistStore, WATCHLIST_CAP};
use market_watch::{Region, Selection};
use tempfile::TempDir;

fn selection(item: &str) -> Selection {
    Selection {
        region: Region::West,
        city: "Caerleon".to_string(),
        quality: 1,
        scale: 24,
        item: item.to_string(),
    }
}

#[test]
fn add_prepends_newest_first() {
    let dir = TempDir::new().unwrap();
    let mut store = WatchlistStore::with_dir(dir.path());

    assert_eq!(store.add(selection("T4_BAG")), AddOutcome::Added);
    assert_eq!(store.add(selection("T5_CAPE")), AddOutcome::Added);

    let items: Vec<&str> = store.list().iter().map(|s| s.item.as_str()).collect();
    assert_eq!(items, vec!["T5_CAPE", "T4_BAG"]);
}

#[test]
fn duplicate_composite_key_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let mut store = WatchlistStore::with_dir(dir.path());

    store.add(selection("T4_BAG"));
    assert_eq!(store.add(selection("T4_BAG")), AddOutcome::AlreadyPresent);
    assert_eq!(store.len(), 1);

    // Any differing field makes a distinct key
    let mut other_quality = selection("T4_BAG");
    other_quality.quality = 2;
    assert_eq!(store.add(other_quality), AddOutcome::Added);
    assert_eq!(store.len(), 2);
}

#[test]
fn cap_evicts_the_oldest_entry() {
    let dir = TempDir::new().unwrap();
    let mut store = WatchlistStore::with_dir(dir.path());

    for i in 0..WATCHLIST_CAP + 1 {
        store.add(selection(&format!("ITEM_{i}")));
    }

    assert_eq!(store.len(), WATCHLIST_CAP);
    // ITEM_0 was oldest and must be gone; the newest is at the front
    assert!(store.get(&selection("ITEM_0").watch_key()).is_none());
    assert_eq!(store.list()[0].item, format!("ITEM_{WATCHLIST_CAP}"));
}

#[test]
fn mutations_persist_across_store_instances() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = WatchlistStore::with_dir(dir.path());
        store.add(selection("T4_BAG"));
        store.add(selection("T5_CAPE"));
    }

    let reloaded = WatchlistStore::with_dir(dir.path());
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.list()[0].item, "T5_CAPE");
    assert_eq!(reloaded.list()[0].region, Region::West);
}

#[test]
fn remove_by_key_persists() {
    let dir = TempDir::new().unwrap();
    let mut store = WatchlistStore::with_dir(dir.path());

    store.add(selection("T4_BAG"));
    store.add(selection("T5_CAPE"));

    assert!(store.remove(&selection("T4_BAG").watch_key()));
    assert!(!store.remove("west|Nowhere|1|24|T9_GHOST"));

    let reloaded = WatchlistStore::with_dir(dir.path());
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.list()[0].item, "T5_CAPE");
}

#[test]
fn clear_empties_and_persists() {
    let dir = TempDir::new().unwrap();
    let mut store = WatchlistStore::with_dir(dir.path());

    store.add(selection("T4_BAG"));
    store.clear();
    assert!(store.is_empty());

    assert!(WatchlistStore::with_dir(dir.path()).is_empty());
}

#[test]
fn malformed_watchlist_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("watchlist_v2.json"), "][").unwrap();

    let store = WatchlistStore::with_dir(dir.path());
    assert!(store.is_empty());
}
