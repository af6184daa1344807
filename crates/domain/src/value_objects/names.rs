//! Validated name newtypes
//!
//! Names are non-empty by construction. Unlike user-entered names, the
//! homework name is kept verbatim (no trimming) so the notification quotes
//! exactly what the API returned.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

// ============================================================================
// HomeworkName
// ============================================================================

/// A validated homework name (non-empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HomeworkName(String);

impl HomeworkName {
    /// Create a new validated homework name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("Homework name cannot be empty"));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HomeworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for HomeworkName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<HomeworkName> for String {
    fn from(name: HomeworkName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_name_verbatim() {
        let name = HomeworkName::new("user__hw_python_oop.zip").unwrap();
        assert_eq!(name.as_str(), "user__hw_python_oop.zip");
        assert_eq!(name.to_string(), "user__hw_python_oop.zip");
    }

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(
            HomeworkName::new(""),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn whitespace_name_is_kept() {
        let name = HomeworkName::new(" ").unwrap();
        assert_eq!(name.as_str(), " ");
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<HomeworkName, _> = serde_json::from_str("\"hw1\"");
        assert!(ok.is_ok());
        let err: Result<HomeworkName, _> = serde_json::from_str("\"\"");
        assert!(err.is_err());
    }
}
