//! Persisted watchlist of tracked market selections
//!
//! Ordered newest-first, deduplicated by composite key, capped. The store
//! holds no network state; persistence is its only side effect.

use crate::models::Selection;
use std::path::{Path, PathBuf};

/// Maximum number of tracked selections; inserting beyond this evicts the
/// oldest entry
pub const WATCHLIST_CAP: usize = 25;

const WATCHLIST_FILE: &str = "watchlist_v2.json";

/// Outcome of a watchlist add
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Persistent, bounded watchlist store
#[derive(Debug)]
pub struct WatchlistStore {
    dir: PathBuf,
    entries: Vec<Selection>,
}

impl Default for WatchlistStore {
    fn default() -> Self {
        let dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("market_watch");
        Self::with_dir(dir)
    }
}

impl WatchlistStore {
    /// Store rooted at the platform cache directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Store rooted at an explicit directory (used by tests); loads any
    /// previously persisted list, tolerating a missing or malformed file
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let entries = Self::read_entries(&dir.join(WATCHLIST_FILE));
        Self { dir, entries }
    }

    fn read_entries(path: &Path) -> Vec<Selection> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&content) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("Failed to parse watchlist file, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    fn save(&self) {
        if let Err(e) = self.try_save() {
            log::warn!("Failed to save watchlist: {}", e);
        }
    }

    fn try_save(&self) -> crate::error::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(self.dir.join(WATCHLIST_FILE), content)?;
        log::debug!("Saved watchlist with {} entries", self.entries.len());
        Ok(())
    }

    /// Entries in insertion order, newest first
    pub fn list(&self) -> &[Selection] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by its composite key
    pub fn get(&self, key: &str) -> Option<&Selection> {
        self.entries.iter().find(|e| e.watch_key() == key)
    }

    /// Prepend a selection unless its composite key is already tracked.
    /// The list is truncated to [`WATCHLIST_CAP`] and persisted.
    pub fn add(&mut self, selection: Selection) -> AddOutcome {
        let key = selection.watch_key();
        if self.entries.iter().any(|e| e.watch_key() == key) {
            return AddOutcome::AlreadyPresent;
        }
        self.entries.insert(0, selection);
        self.entries.truncate(WATCHLIST_CAP);
        self.save();
        AddOutcome::Added
    }

    /// Remove the entry with the given composite key; returns whether one
    /// was removed
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.watch_key() != key);
        let removed = self.entries.len() != before;
        if removed {
            self.save();
        }
        removed
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
        self.save();
    }
}
