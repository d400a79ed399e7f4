//! Display helpers for prices and dates

use chrono::NaiveDateTime;

/// Placeholder for absent values
pub const DASH: &str = "—";

/// Thousands-separated integer rendering, dash for nothing
pub fn fmt_price(n: Option<u64>) -> String {
    match n {
        Some(v) => group_thousands(v),
        None => DASH.to_string(),
    }
}

/// Render a price, treating zero as absent (the API reports missing market
/// data as 0)
pub fn fmt_price_nonzero(n: u64) -> String {
    if n == 0 {
        DASH.to_string()
    } else {
        group_thousands(n)
    }
}

fn group_thousands(v: u64) -> String {
    let digits = v.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render an API datetime for humans. Unparseable input falls back to
/// stripping the `T`/`Z` markers; absent input renders a dash.
pub fn fmt_datetime(s: Option<&str>) -> String {
    let Some(s) = s else {
        return DASH.to_string();
    };
    if s.is_empty() {
        return DASH.to_string();
    }
    match NaiveDateTime::parse_from_str(s.trim_end_matches('Z'), "%Y-%m-%dT%H:%M:%S") {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => s.replace('T', " ").replace('Z', ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(fmt_price(Some(0)), "0");
        assert_eq!(fmt_price(Some(999)), "999");
        assert_eq!(fmt_price(Some(1000)), "1,000");
        assert_eq!(fmt_price(Some(1234567)), "1,234,567");
        assert_eq!(fmt_price(None), DASH);
    }

    #[test]
    fn zero_price_renders_as_dash() {
        assert_eq!(fmt_price_nonzero(0), DASH);
        assert_eq!(fmt_price_nonzero(4200), "4,200");
    }

    #[test]
    fn datetime_parses_api_format() {
        assert_eq!(
            fmt_datetime(Some("2024-03-01T18:30:00")),
            "2024-03-01 18:30"
        );
        assert_eq!(fmt_datetime(Some("2024-03-01T18:30:00Z")), "2024-03-01 18:30");
    }

    #[test]
    fn datetime_falls_back_on_odd_input() {
        assert_eq!(fmt_datetime(Some("2024-03-01TnoonZ")), "2024-03-01 noon");
        assert_eq!(fmt_datetime(None), DASH);
        assert_eq!(fmt_datetime(Some("")), DASH);
    }
}
