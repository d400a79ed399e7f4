//! Albion Online Data Project endpoints
//!
//! Two endpoints per region host:
//! - current prices:  /api/v2/stats/prices/{item}.json?locations={city}&qualities={q}
//! - price history:   /api/v2/stats/history/{item}.json?locations={city}&qualities={q}&time-scale={hours}

use crate::error::{Error, Result};
use crate::models::Selection;
use serde::Deserialize;

const USER_AGENT: &str = "MarketWatch/0.1";

/// One city/quality row of current market state
#[derive(Debug, Deserialize, Clone)]
pub struct SnapshotRow {
    #[serde(default)]
    pub item_id: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub quality: u8,
    #[serde(default)]
    pub sell_price_min: u64,
    #[serde(default)]
    pub sell_price_min_date: Option<String>,
    #[serde(default)]
    pub buy_price_max: u64,
    #[serde(default)]
    pub buy_price_max_date: Option<String>,
}

/// One aggregated point of the raw history payload; optional fields are
/// tolerated and filtered during normalization
#[derive(Debug, Deserialize, Clone)]
pub struct RawHistoryPoint {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub avg_price: Option<f64>,
    #[serde(default)]
    pub item_count: Option<u64>,
}

/// One location/quality group of the history payload
#[derive(Debug, Deserialize, Clone)]
pub struct HistoryGroup {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub quality: Option<u8>,
    #[serde(default)]
    pub data: Vec<RawHistoryPoint>,
}

fn prices_url(base: &str, sel: &Selection) -> String {
    format!(
        "{}/api/v2/stats/prices/{}.json?locations={}&qualities={}",
        base,
        urlencoding::encode(&sel.item),
        urlencoding::encode(&sel.city),
        sel.quality
    )
}

fn history_url(base: &str, sel: &Selection) -> String {
    format!(
        "{}/api/v2/stats/history/{}.json?locations={}&qualities={}&time-scale={}",
        base,
        urlencoding::encode(&sel.item),
        urlencoding::encode(&sel.city),
        sel.quality,
        sel.scale
    )
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T> {
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

    Ok(response.json::<T>().await?)
}

/// Fetch the current-prices snapshot for a selection
pub async fn fetch_prices(sel: &Selection) -> Result<Vec<SnapshotRow>> {
    fetch_prices_from(sel.region.base_url(), sel).await
}

/// Fetch the average-price history for a selection
pub async fn fetch_history(sel: &Selection) -> Result<Vec<HistoryGroup>> {
    fetch_history_from(sel.region.base_url(), sel).await
}

/// Fetches the snapshot from the given host (for testing with mock servers).
pub(crate) async fn fetch_prices_from(base: &str, sel: &Selection) -> Result<Vec<SnapshotRow>> {
    get_json(&prices_url(base, sel)).await
}

/// Fetches the history from the given host (for testing with mock servers).
pub(crate) async fn fetch_history_from(base: &str, sel: &Selection) -> Result<Vec<HistoryGroup>> {
    get_json(&history_url(base, sel)).await
}

#[cfg(test)]
#[path = "aodp_tests.rs"]
mod tests;
