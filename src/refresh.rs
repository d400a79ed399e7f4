//! Concurrent refresh of the main chart data and watchlist sparklines
//!
//! The main refresh joins its two fetches and fails as one unit; sparkline
//! refreshes fan out one task per watchlist entry and fail independently.

use crate::api::aodp::{self, SnapshotRow};
use crate::error::{Error, Result};
use crate::models::Selection;
use crate::series::{self, SeriesPoint, Trend};
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::interval;

/// Trailing points kept for a sparkline preview
pub const SPARK_WINDOW: usize = 40;

/// Default coalescing delay for search-as-you-type adapters
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(80);

/// KPI scalars derived from the snapshot table
#[derive(Debug, Clone, PartialEq)]
pub struct Kpis {
    pub sell_min: u64,
    pub sell_min_date: Option<String>,
    pub buy_max: u64,
    pub buy_max_date: Option<String>,
}

/// Everything a completed main refresh produces; assembled only when both
/// fetches succeeded
#[derive(Debug, Clone)]
pub struct MainRefresh {
    pub points: Vec<SeriesPoint>,
    pub rows: Vec<SnapshotRow>,
    pub kpis: Option<Kpis>,
    pub trend: Option<Trend>,
}

/// Mini-preview data for one watchlist entry
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    /// Most recent average price, if the series has any point
    pub last: Option<f64>,
    /// Trailing window of at most [`SPARK_WINDOW`] points
    pub window: Vec<SeriesPoint>,
}

/// Refresh the main chart: history and snapshot are fetched concurrently,
/// both settle, and any failure aborts the whole refresh with one combined
/// error — no partial result from a half-failed pair.
pub async fn refresh_main(sel: &Selection) -> Result<MainRefresh> {
    refresh_main_from(sel.region.base_url(), sel).await
}

pub(crate) async fn refresh_main_from(base: &str, sel: &Selection) -> Result<MainRefresh> {
    if !sel.has_item() {
        return Err(Error::NoItemSelected);
    }

    let (hist, snap) = tokio::join!(
        aodp::fetch_history_from(base, sel),
        aodp::fetch_prices_from(base, sel)
    );

    let (hist, snap) = match (hist, snap) {
        (Ok(h), Ok(s)) => (h, s),
        (h, s) => {
            let mut parts = Vec::new();
            if let Err(e) = h {
                parts.push(format!("history: {}", e));
            }
            if let Err(e) = s {
                parts.push(format!("snapshot: {}", e));
            }
            return Err(Error::Refresh(parts.join("; ")));
        }
    };

    let points = series::normalize(&hist);
    let trend = series::trend(&points);
    let kpis = kpis_of(&snap);

    log::info!(
        "Loaded {} for {}: {} history points, {} snapshot rows",
        sel.item,
        sel.city,
        points.len(),
        snap.len()
    );

    Ok(MainRefresh {
        points,
        rows: snap,
        kpis,
        trend,
    })
}

/// KPI fields come from the last snapshot row, as the summary table fills
/// them row by row
fn kpis_of(rows: &[SnapshotRow]) -> Option<Kpis> {
    rows.last().map(|r| Kpis {
        sell_min: r.sell_price_min,
        sell_min_date: r.sell_price_min_date.clone(),
        buy_max: r.buy_price_max,
        buy_max_date: r.buy_price_max_date.clone(),
    })
}

/// Refresh every watchlist entry's sparkline, keyed by composite key.
///
/// Each entry's fetch runs in its own task; one entry failing maps to `None`
/// for that key and never blocks or blanks its siblings.
pub async fn refresh_sparklines(entries: &[Selection]) -> HashMap<String, Option<Sparkline>> {
    refresh_sparklines_with(entries, |sel| async move {
        let hist = aodp::fetch_history(&sel).await?;
        Ok(series::normalize(&hist))
    })
    .await
}

pub(crate) async fn refresh_sparklines_from(
    base: &str,
    entries: &[Selection],
) -> HashMap<String, Option<Sparkline>> {
    let base = base.to_string();
    refresh_sparklines_with(entries, move |sel| {
        let base = base.clone();
        async move {
            let hist = aodp::fetch_history_from(&base, &sel).await?;
            Ok(series::normalize(&hist))
        }
    })
    .await
}

async fn refresh_sparklines_with<F, Fut>(
    entries: &[Selection],
    fetch: F,
) -> HashMap<String, Option<Sparkline>>
where
    F: Fn(Selection) -> Fut,
    Fut: Future<Output = Result<Vec<SeriesPoint>>> + Send + 'static,
{
    let tasks: Vec<(String, JoinHandle<Result<Vec<SeriesPoint>>>)> = entries
        .iter()
        .map(|sel| (sel.watch_key(), tokio::spawn(fetch(sel.clone()))))
        .collect();

    let mut results = HashMap::new();
    for (key, handle) in tasks {
        let spark = match handle.await {
            Ok(Ok(points)) => {
                let last = points.last().map(|p| p.v);
                let start = points.len().saturating_sub(SPARK_WINDOW);
                Some(Sparkline {
                    last,
                    window: points[start..].to_vec(),
                })
            }
            Ok(Err(e)) => {
                log::warn!("Sparkline refresh failed for {}: {}", key, e);
                None
            }
            Err(e) => {
                log::warn!("Sparkline task for {} did not complete: {}", key, e);
                None
            }
        };
        results.insert(key, spark);
    }
    results
}

/// Recurring main-refresh timer. At most one interval task is alive;
/// reconfiguring or disabling aborts the previous task before anything else,
/// so replaced schedules can never double-fire.
#[derive(Debug, Default)]
pub struct AutoRefresh {
    handle: Option<JoinHandle<()>>,
}

impl AutoRefresh {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a recurring refresh is scheduled
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().map(|h| !h.is_finished()).unwrap_or(false)
    }

    /// Install a recurring task, or disable with `None`. The first fire
    /// happens one full interval after installation.
    pub fn configure<F, Fut>(&mut self, every: Option<Duration>, mut task: F)
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        self.stop();

        let Some(period) = every else {
            return;
        };
        if period.is_zero() {
            return;
        }

        self.handle = Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            // The first interval tick completes immediately; skip it
            ticker.tick().await;
            loop {
                ticker.tick().await;
                task().await;
            }
        }));
    }

    /// Cancel any scheduled recurrence
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for AutoRefresh {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Cancellable delayed task for coalescing rapid input (search-as-you-type).
/// Re-arming aborts the pending task, so only the latest one runs.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    handle: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            handle: None,
        }
    }

    /// Schedule `task` to run after the delay, replacing any pending task
    pub fn fire<F, Fut>(&mut self, task: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        self.cancel();
        let delay = self.delay;
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task().await;
        }));
    }

    /// Drop the pending task, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "refresh_tests.rs"]
mod tests;
