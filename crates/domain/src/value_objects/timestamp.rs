//! Ordering key for homework updates

use chrono::{DateTime, Utc};
use std::fmt;

use crate::common::parse_timestamp;

/// The `updated_at` value of a homework.
///
/// The raw text is always kept. `instant` is filled when the text is a
/// recognised timestamp; selection compares instants only when every item in a
/// list has one, and falls back to comparing the raw text otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedAt {
    raw: String,
    instant: Option<DateTime<Utc>>,
}

impl UpdatedAt {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let instant = parse_timestamp(&raw);
        Self { raw, instant }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.instant
    }
}

impl fmt::Display for UpdatedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_raw_and_parses_instant() {
        let ts = UpdatedAt::new("2024-01-01T00:00:00Z");
        assert_eq!(ts.raw(), "2024-01-01T00:00:00Z");
        assert!(ts.instant().is_some());
    }

    #[test]
    fn unparseable_text_has_no_instant() {
        let ts = UpdatedAt::new("last tuesday");
        assert_eq!(ts.instant(), None);
        assert_eq!(ts.to_string(), "last tuesday");
    }
}
