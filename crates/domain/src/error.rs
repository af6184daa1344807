//! Error types for the domain layer
//!
//! `DomainError` covers value-object construction; `SchemaError` covers the
//! shape of payloads received from the status API. Both are plain data so the
//! engine can decide how to log or report them.

use thiserror::Error;

/// Unified error type for value-object construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., empty required field)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for violated invariants.
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Homework name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// The status API returned a payload that does not match the documented shape.
///
/// The same malformed payload will usually come back on the next poll, but the
/// engine treats this as a recoverable iteration failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("response is not a JSON object (got {found})")]
    NotAnObject { found: &'static str },

    #[error("response has no \"homeworks\" key")]
    MissingHomeworks,

    #[error("\"homeworks\" is not a list (got {found})")]
    HomeworksNotAList { found: &'static str },

    #[error("API returned an empty homework list: nothing has been submitted for review yet")]
    EmptyList,

    #[error("homework entry is not a JSON object (got {found})")]
    ItemNotAnObject { found: &'static str },

    #[error("homework #{index} has no \"updated_at\" timestamp")]
    MissingTimestamp { index: usize },

    #[error("homework is missing required field \"{field}\"")]
    MissingField { field: &'static str },

    #[error("homework has unknown status \"{0}\"")]
    UnknownStatus(String),
}

/// Short JSON type name used in schema error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "object",
    }
}
