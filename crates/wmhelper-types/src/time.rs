//! Timestamp display helpers.
//!
//! Server timestamps arrive as RFC 3339 strings. A string that fails
//! to parse is shown as-is rather than erroring the whole view.

use chrono::DateTime;

/// e.g. "Mar 04, 2026". `None` renders as "N/A".
pub fn format_date(timestamp: Option<&str>) -> String {
    match timestamp {
        None => "N/A".to_string(),
        Some(ts) => match DateTime::parse_from_rfc3339(ts) {
            Ok(dt) => dt.format("%b %d, %Y").to_string(),
            Err(_) => ts.to_string(),
        },
    }
}

/// e.g. "14:07".
pub fn format_time(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}
