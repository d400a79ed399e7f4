//! Normalization of raw history payloads into clean, time-ordered series

use crate::api::aodp::HistoryGroup;
use chrono::{DateTime, NaiveDateTime};

/// One normalized point of an average-price series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    /// Epoch millis (UTC)
    pub t: i64,
    /// Average price
    pub v: f64,
}

/// Price movement between the first and last point of a series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub change: f64,
    pub percent: f64,
}

/// Parse an API timestamp to epoch millis. The history endpoint emits naive
/// `YYYY-MM-DDTHH:MM:SS` datetimes (UTC); full RFC 3339 is accepted too.
pub fn parse_timestamp(s: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Shape a raw history payload into a sorted series.
///
/// Only the first group's data is read; a missing group or data array yields
/// an empty series. Points need a parseable timestamp and a present average
/// price (zero is kept, missing is not). Unparseable timestamps drop that
/// point silently. The result is sorted ascending by timestamp; the sort is
/// stable, so ties keep their input order.
pub fn normalize(payload: &[HistoryGroup]) -> Vec<SeriesPoint> {
    let Some(group) = payload.first() else {
        return Vec::new();
    };

    let mut points: Vec<SeriesPoint> = group
        .data
        .iter()
        .filter_map(|pt| {
            let ts = pt.timestamp.as_deref()?;
            let v = pt.avg_price?;
            parse_timestamp(ts).map(|t| SeriesPoint { t, v })
        })
        .collect();

    points.sort_by_key(|p| p.t);
    points
}

/// Derive the trend from a normalized series.
///
/// Returns `None` below 2 points. Percent is defined as 0 when the first
/// value is 0.
pub fn trend(points: &[SeriesPoint]) -> Option<Trend> {
    if points.len() < 2 {
        return None;
    }
    let first = points[0].v;
    let last = points[points.len() - 1].v;
    let change = last - first;
    let percent = if first == 0.0 {
        0.0
    } else {
        (change / first) * 100.0
    };
    Some(Trend { change, percent })
}
