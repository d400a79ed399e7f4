//! Persistent cache for the raw item catalog
//!
//! Stores the raw record array plus its fetch timestamp in a JSON file so a
//! fresh start needs no network. The file name carries the format version.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Max age before a cached catalog is treated as absent: 14 days
pub const MAX_AGE_MS: i64 = 1000 * 60 * 60 * 24 * 14;

const CACHE_FILE: &str = "items_db_v3.json";

#[derive(Debug, Serialize, Deserialize)]
struct CacheFile {
    /// Epoch millis of the fetch that produced these records
    fetched_at: i64,
    /// Raw records exactly as the mirror served them
    entries: Vec<serde_json::Value>,
}

/// On-disk catalog cache rooted at a directory
#[derive(Debug)]
pub struct CatalogCache {
    dir: PathBuf,
}

impl Default for CatalogCache {
    fn default() -> Self {
        let dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("market_watch");
        Self { dir }
    }
}

impl CatalogCache {
    /// Cache rooted at the platform cache directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache rooted at an explicit directory (used by tests)
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(CACHE_FILE)
    }

    /// Get the cache directory path
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read the cached raw records, or `None` if the cache is missing, stale
    /// or malformed. A bad cache is a miss, never an error.
    pub fn read(&self) -> Option<Vec<serde_json::Value>> {
        let path = self.path();
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => return None,
        };

        let file: CacheFile = match serde_json::from_str(&content) {
            Ok(f) => f,
            Err(e) => {
                log::debug!("Catalog cache unreadable, treating as miss: {}", e);
                return None;
            }
        };

        let age = Utc::now().timestamp_millis() - file.fetched_at;
        if age > MAX_AGE_MS {
            log::debug!("Catalog cache is {} ms old, treating as miss", age);
            return None;
        }

        log::info!("Catalog cache hit: {} raw records", file.entries.len());
        Some(file.entries)
    }

    /// Persist the raw records with the current timestamp, overwriting any
    /// previous cache
    pub fn write(&self, entries: &[serde_json::Value]) -> crate::error::Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        let file = CacheFile {
            fetched_at: Utc::now().timestamp_millis(),
            entries: entries.to_vec(),
        };
        let content = serde_json::to_string(&file)?;
        std::fs::write(self.path(), content)?;

        log::debug!("Saved catalog cache with {} raw records", entries.len());
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn write_with_timestamp(
        &self,
        entries: &[serde_json::Value],
        fetched_at: i64,
    ) -> crate::error::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let file = CacheFile {
            fetched_at,
            entries: entries.to_vec(),
        };
        std::fs::write(self.path(), serde_json::to_string(&file)?)?;
        Ok(())
    }
}
