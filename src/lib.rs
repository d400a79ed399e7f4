pub mod api;
pub mod catalog;
pub mod error;
pub mod format;
pub mod models;
pub mod refresh;
pub mod search;
pub mod series;
pub mod session;
pub mod watchlist;

// Re-export commonly used items
pub use api::{HistoryGroup, RawHistoryPoint, SnapshotRow};
pub use catalog::{CatalogCache, CatalogStore};
pub use error::{Error, Result};
pub use models::{CatalogEntry, Region, Selection};
pub use refresh::{refresh_main, refresh_sparklines, AutoRefresh, Debouncer, MainRefresh, Sparkline};
pub use search::{search, SearchOutcome};
pub use series::{normalize, trend, SeriesPoint, Trend};
pub use session::Session;
pub use watchlist::{AddOutcome, WatchlistStore};
