//! In-memory item catalog with cache fast-path and mirror-fallback refresh

use crate::catalog::cache::CatalogCache;
use crate::error::{Error, Result};
use crate::models::CatalogEntry;

const USER_AGENT: &str = "MarketWatch/0.1";

/// Item database mirrors, in priority order (one may work when the other is
/// blocked). The first mirror that returns a parseable array wins.
pub const ITEM_DB_URLS: &[&str] = &[
    "https://raw.githubusercontent.com/ao-data/ao-bin-dumps/master/formatted/items.json",
    "https://raw.githubusercontent.com/broderickhyman/ao-bin-dumps/master/formatted/items.json",
];

// Candidate source field names per canonical field, first-defined-wins.
// Tested against each known source variant in store_tests.rs.
const ID_KEYS: &[&str] = &["UniqueName", "uniqueName", "unique_name", "item_id", "id"];
const NAME_KEYS: &[&str] = &["localizedName", "Name", "name"];
const LOCALIZED_NAME_KEYS: &[&str] = &["EN-US", "EN"];
const TIER_KEYS: &[&str] = &["Tier", "tier"];
const CATEGORY_KEYS: &[&str] = &["ItemType", "itemType", "Category", "category"];

/// Owns the normalized catalog, its on-device cache and the mirror list
#[derive(Debug)]
pub struct CatalogStore {
    cache: CatalogCache,
    mirrors: Vec<String>,
    entries: Vec<CatalogEntry>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(CatalogCache::new())
    }
}

impl CatalogStore {
    /// Store backed by the given cache and the default mirror list
    pub fn new(cache: CatalogCache) -> Self {
        Self {
            cache,
            mirrors: ITEM_DB_URLS.iter().map(|s| s.to_string()).collect(),
            entries: Vec::new(),
        }
    }

    /// Store with an explicit mirror list (used by tests)
    pub fn with_mirrors(cache: CatalogCache, mirrors: Vec<String>) -> Self {
        Self {
            cache,
            mirrors,
            entries: Vec::new(),
        }
    }

    /// The current normalized catalog; empty until a load succeeds
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Populate the catalog and return the accepted entry count.
    ///
    /// Without `force_refresh`, a valid cache is used with no network access.
    /// Otherwise each mirror is tried strictly in order; the first one that
    /// returns a parseable array is persisted and loaded. If every mirror
    /// fails, the in-memory catalog is cleared and the call fails — no
    /// partial results across mirrors.
    pub async fn load(&mut self, force_refresh: bool) -> Result<usize> {
        if !force_refresh {
            if let Some(raw) = self.cache.read() {
                self.entries = normalize_all(&raw);
                log::info!("Catalog loaded from cache: {} items", self.entries.len());
                return Ok(self.entries.len());
            }
        }

        for url in &self.mirrors {
            match fetch_raw_records(url).await {
                Ok(raw) => {
                    if let Err(e) = self.cache.write(&raw) {
                        log::warn!("Failed to save catalog cache: {}", e);
                    }
                    self.entries = normalize_all(&raw);
                    log::info!(
                        "Catalog loaded from {}: {} items ({} raw records)",
                        url,
                        self.entries.len(),
                        raw.len()
                    );
                    return Ok(self.entries.len());
                }
                Err(e) => {
                    log::warn!("Catalog mirror {} failed: {}", url, e);
                }
            }
        }

        self.entries.clear();
        Err(Error::CatalogUnavailable)
    }
}

async fn fetch_raw_records(url: &str) -> Result<Vec<serde_json::Value>> {
    log::debug!("GET {}", url);

    let response = reqwest::Client::new()
        .get(url)
        .header("User-Agent", USER_AGENT)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::HttpStatus(response.status()));
    }

    // The payload must be a JSON array of records
    response.json::<Vec<serde_json::Value>>().await.map_err(Error::Network)
}

fn normalize_all(raw: &[serde_json::Value]) -> Vec<CatalogEntry> {
    raw.iter().filter_map(normalize_record).collect()
}

/// Map one arbitrarily-cased/aliased raw record to the canonical entry shape.
/// Records that resolve neither an id nor a name are dropped.
pub fn normalize_record(raw: &serde_json::Value) -> Option<CatalogEntry> {
    let id = first_string(raw, ID_KEYS)?;

    let name = raw
        .get("LocalizedNames")
        .and_then(|ln| first_string(ln, LOCALIZED_NAME_KEYS))
        .or_else(|| first_string(raw, NAME_KEYS))?;

    let tier = first_string(raw, TIER_KEYS).unwrap_or_default();
    let category = first_string(raw, CATEGORY_KEYS).unwrap_or_default();

    Some(CatalogEntry::new(id, name, tier, category))
}

/// First key that resolves to a non-empty string or numeric value, trimmed.
/// Some dumps carry tiers as numbers, so numbers are stringified.
fn first_string(value: &serde_json::Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        match value.get(key) {
            Some(serde_json::Value::String(s)) => {
                let trimmed = s.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
            Some(serde_json::Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
