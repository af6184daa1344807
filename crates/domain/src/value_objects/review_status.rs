//! Review status reported by the homework API

use std::fmt;

use crate::error::DomainError;

/// Where a submitted homework is in the review process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewStatus {
    /// A reviewer picked the work up
    Reviewing,
    /// Reviewed, the reviewer left remarks
    Rejected,
    /// Reviewed and accepted
    Approved,
}

impl ReviewStatus {
    /// Every status, in review order
    pub fn all() -> &'static [ReviewStatus] {
        &[
            ReviewStatus::Reviewing,
            ReviewStatus::Rejected,
            ReviewStatus::Approved,
        ]
    }

    /// Wire name used by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Reviewing => "reviewing",
            ReviewStatus::Rejected => "rejected",
            ReviewStatus::Approved => "approved",
        }
    }

    /// Human-readable sentence sent to the chat for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            ReviewStatus::Reviewing => "The work has been taken for review by a reviewer.",
            ReviewStatus::Rejected => "The work has been reviewed: the reviewer has remarks.",
            ReviewStatus::Approved => {
                "The work has been reviewed: the reviewer liked everything. Hooray!"
            }
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = DomainError;

    // Exact match only; the API sends lowercase names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reviewing" => Ok(ReviewStatus::Reviewing),
            "rejected" => Ok(ReviewStatus::Rejected),
            "approved" => Ok(ReviewStatus::Approved),
            _ => Err(DomainError::parse(format!("Unknown review status: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_status() {
        for status in ReviewStatus::all() {
            assert_eq!(status.as_str().parse::<ReviewStatus>(), Ok(*status));
        }
    }

    #[test]
    fn rejects_unknown_and_differently_cased_values() {
        assert!("done".parse::<ReviewStatus>().is_err());
        assert!("Approved".parse::<ReviewStatus>().is_err());
        assert!("".parse::<ReviewStatus>().is_err());
    }

    #[test]
    fn every_status_has_distinct_verdict() {
        let verdicts: std::collections::HashSet<_> =
            ReviewStatus::all().iter().map(|s| s.verdict()).collect();
        assert_eq!(verdicts.len(), ReviewStatus::all().len());
    }
}
