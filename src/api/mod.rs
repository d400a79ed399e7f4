//! Client for the Albion Online Data Project market API

pub mod aodp;

pub use aodp::{fetch_history, fetch_prices, HistoryGroup, RawHistoryPoint, SnapshotRow};
