use serde::{Deserialize, Serialize};

/// The three independent game-world server clusters, each with its own
/// market data host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    West,
    East,
    Europe,
}

impl Region {
    /// Returns the region name used in watch keys and query output
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::West => "west",
            Region::East => "east",
            Region::Europe => "europe",
        }
    }

    /// Returns the market data host for this region
    pub fn base_url(&self) -> &'static str {
        match self {
            Region::West => "https://west.albion-online-data.com",
            Region::East => "https://east.albion-online-data.com",
            Region::Europe => "https://europe.albion-online-data.com",
        }
    }

    /// Parse a region name (case-insensitive); unknown names fall back to west,
    /// matching the original dashboard's default
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "east" => Region::East,
            "europe" => Region::Europe,
            _ => Region::West,
        }
    }

    /// Returns all regions
    pub fn all() -> &'static [Region] {
        &[Region::West, Region::East, Region::Europe]
    }
}

/// One trackable market selection: fully determines both the main chart
/// query and a watchlist entry's query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub region: Region,
    pub city: String,
    pub quality: u8,
    /// Historical aggregation bucket size, in hours
    pub scale: u32,
    /// Catalog item id, e.g. "T4_BAG"
    pub item: String,
}

impl Selection {
    /// Composite key uniquely identifying this selection; exact-value based,
    /// order-sensitive
    pub fn watch_key(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.region.as_str(),
            self.city,
            self.quality,
            self.scale,
            self.item
        )
    }

    /// Human-readable label, e.g. "T4_BAG • WEST • Caerleon • Q1 • 24h"
    pub fn describe(&self) -> String {
        format!(
            "{} • {} • {} • Q{} • {}h",
            self.item,
            self.region.as_str().to_uppercase(),
            self.city,
            self.quality,
            self.scale
        )
    }

    /// True if an item has been chosen
    pub fn has_item(&self) -> bool {
        !self.item.is_empty()
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            region: Region::West,
            city: "Caerleon".to_string(),
            quality: 1,
            scale: 24,
            item: "T4_BAG".to_string(),
        }
    }
}

/// Canonical catalog entry, normalized from heterogeneous raw records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub tier: String,
    pub category: String,
    // Lowercased copies so the per-keystroke ranking scan allocates nothing
    pub(crate) id_lower: String,
    pub(crate) name_lower: String,
}

impl CatalogEntry {
    pub fn new(id: String, name: String, tier: String, category: String) -> Self {
        let id_lower = id.to_lowercase();
        let name_lower = name.to_lowercase();
        Self {
            id,
            name,
            tier,
            category,
            id_lower,
            name_lower,
        }
    }

    /// Secondary display line: category and tier, e.g. "bag • T4"
    pub fn meta(&self) -> String {
        let parts: Vec<&str> = [self.category.as_str(), self.tier.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            "—".to_string()
        } else {
            parts.join(" • ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_parse_falls_back_to_west() {
        assert_eq!(Region::parse("east"), Region::East);
        assert_eq!(Region::parse("EUROPE"), Region::Europe);
        assert_eq!(Region::parse("midgard"), Region::West);
        assert_eq!(Region::parse(""), Region::West);
    }

    #[test]
    fn watch_key_is_order_sensitive() {
        let sel = Selection {
            region: Region::East,
            city: "Lymhurst".to_string(),
            quality: 2,
            scale: 6,
            item: "T5_CAPE".to_string(),
        };
        assert_eq!(sel.watch_key(), "east|Lymhurst|2|6|T5_CAPE");
    }

    #[test]
    fn entry_meta_skips_empty_fields() {
        let e = CatalogEntry::new("T4_BAG".into(), "Bag".into(), "4".into(), String::new());
        assert_eq!(e.meta(), "4");
        let blank = CatalogEntry::new("X".into(), "X".into(), String::new(), String::new());
        assert_eq!(blank.meta(), "—");
    }
}
