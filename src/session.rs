//! Application state: catalog, watchlist and the current selection
//!
//! One owner for the process-wide mutable state, passed by reference into
//! the pure components so they stay testable in isolation.

use crate::catalog::{CatalogCache, CatalogStore};
use crate::error::{Error, Result};
use crate::models::Selection;
use crate::search::{self, SearchOutcome};
use crate::watchlist::{AddOutcome, WatchlistStore};
use std::path::Path;

/// Owns the stores and the currently chosen item/region/city/quality/scale
/// tuple consumed by the other components
#[derive(Debug)]
pub struct Session {
    pub catalog: CatalogStore,
    pub watchlist: WatchlistStore,
    pub selection: Selection,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            catalog: CatalogStore::default(),
            watchlist: WatchlistStore::default(),
            selection: Selection::default(),
        }
    }
}

impl Session {
    /// Session persisting under the platform cache directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Session persisting under an explicit directory (used by tests)
    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            catalog: CatalogStore::new(CatalogCache::with_dir(dir)),
            watchlist: WatchlistStore::with_dir(dir),
            selection: Selection::default(),
        }
    }

    /// Rank the catalog against a query (pure, no I/O)
    pub fn search(&self, query: &str) -> SearchOutcome<'_> {
        search::search(self.catalog.entries(), query)
    }

    /// Select an item by catalog id
    pub fn select_item(&mut self, item_id: impl Into<String>) {
        self.selection.item = item_id.into();
    }

    /// Add the current selection to the watchlist; fails without any side
    /// effect when no item is chosen
    pub fn add_current_to_watchlist(&mut self) -> Result<AddOutcome> {
        if !self.selection.has_item() {
            return Err(Error::NoItemSelected);
        }
        Ok(self.watchlist.add(self.selection.clone()))
    }

    /// Make a watchlist entry the current selection; returns whether the key
    /// was found
    pub fn load_watch_entry(&mut self, key: &str) -> bool {
        match self.watchlist.get(key) {
            Some(entry) => {
                self.selection = entry.clone();
                true
            }
            None => false,
        }
    }
}
