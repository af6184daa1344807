//! Timestamp parsing for homework `updated_at` values.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parses an API timestamp.
///
/// Accepts RFC 3339 (`2024-01-15T10:30:00Z`, any offset) and the zone-less
/// `2024-01-15T10:30:00` form, which is read as UTC.
///
/// # Examples
///
/// ```
/// use hwstatus_domain::common::parse_timestamp;
/// use chrono::Datelike;
///
/// let dt = parse_timestamp("2024-01-15T10:30:00Z").unwrap();
/// assert_eq!(dt.year(), 2024);
/// assert!(parse_timestamp("2024-01-15T10:30:00").is_some());
/// assert!(parse_timestamp("yesterday").is_none());
/// ```
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}
