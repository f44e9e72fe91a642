//! Common display utilities and helpers

use chrono::{DateTime, NaiveDateTime};

/// Placeholder for absent values
pub const NONE: &str = "--";

/// Truncate string to max characters with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Prices are shown in Kenyan shillings with two decimals
pub fn format_price(amount: f64) -> String {
    format!("Kshs {:.2}", amount)
}

/// Five-star rating, e.g. `★★★☆☆`. Values above 5 are capped.
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Format an API timestamp as `YYYY-MM-DD HH:MM`.
///
/// Accepts RFC 3339 and naive ISO date-times; anything else is shown as-is.
pub fn format_datetime(timestamp: Option<&str>) -> String {
    let Some(timestamp) = timestamp.filter(|t| !t.is_empty()) else {
        return NONE.to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, fmt) {
            return dt.format("%Y-%m-%d %H:%M").to_string();
        }
    }
    timestamp.to_string()
}

/// Date part only, for review listings
pub fn format_date(timestamp: Option<&str>) -> String {
    let formatted = format_datetime(timestamp);
    match formatted.split_once(' ') {
        Some((date, _)) => date.to_string(),
        None => formatted,
    }
}
