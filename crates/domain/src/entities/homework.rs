//! Homework entity - one submitted work and its review state

use serde_json::Value;

use crate::common::str_field;
use crate::error::{json_kind, SchemaError};
use crate::value_objects::{HomeworkName, ReviewStatus, StatusMessage, UpdatedAt};

/// Accepted spellings of each field, canonical first.
const NAME_KEYS: &[&str] = &["name", "homework_name"];
const STATUS_KEYS: &[&str] = &["status"];
pub(crate) const UPDATED_AT_KEYS: &[&str] = &["updated_at", "date_updated"];

/// A homework as reported by the status API.
///
/// Only the fields the watcher needs are kept; `id` and anything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    name: HomeworkName,
    status: ReviewStatus,
    updated_at: Option<UpdatedAt>,
}

impl Homework {
    pub fn new(name: HomeworkName, status: ReviewStatus) -> Self {
        Self {
            name,
            status,
            updated_at: None,
        }
    }

    /// Build a homework from one raw list item.
    ///
    /// Checks run in a fixed order (name, status presence, status value) so
    /// the error names the first problem found.
    ///
    /// # Errors
    ///
    /// - `SchemaError::ItemNotAnObject` if the item is not a JSON object
    /// - `SchemaError::MissingField` if `name` or `status` is absent or empty
    /// - `SchemaError::UnknownStatus` if `status` is not a known review status
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        let object = value.as_object().ok_or(SchemaError::ItemNotAnObject {
            found: json_kind(value),
        })?;

        let name = str_field(object, NAME_KEYS)
            .and_then(|raw| HomeworkName::new(raw).ok())
            .ok_or(SchemaError::MissingField { field: "name" })?;

        let raw_status =
            str_field(object, STATUS_KEYS).ok_or(SchemaError::MissingField { field: "status" })?;
        let status = raw_status
            .parse::<ReviewStatus>()
            .map_err(|_| SchemaError::UnknownStatus(raw_status.to_string()))?;

        let updated_at = str_field(object, UPDATED_AT_KEYS).map(UpdatedAt::new);

        Ok(Self {
            name,
            status,
            updated_at,
        })
    }

    pub fn name(&self) -> &HomeworkName {
        &self.name
    }

    pub fn status(&self) -> ReviewStatus {
        self.status
    }

    pub fn updated_at(&self) -> Option<&UpdatedAt> {
        self.updated_at.as_ref()
    }

    /// The notification text for this homework's current status.
    pub fn status_message(&self) -> StatusMessage {
        StatusMessage::status_changed(&self.name, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_well_formed_item() {
        let hw = Homework::from_value(&json!({
            "id": 7,
            "name": "hw1",
            "status": "approved",
            "updated_at": "2024-01-01T00:00:00"
        }))
        .unwrap();

        assert_eq!(hw.name().as_str(), "hw1");
        assert_eq!(hw.status(), ReviewStatus::Approved);
        assert_eq!(hw.updated_at().map(UpdatedAt::raw), Some("2024-01-01T00:00:00"));
    }

    #[test]
    fn accepts_legacy_field_names() {
        let hw = Homework::from_value(&json!({
            "homework_name": "hw_python_oop",
            "status": "reviewing",
            "date_updated": "2024-02-01T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(hw.name().as_str(), "hw_python_oop");
        assert_eq!(hw.status(), ReviewStatus::Reviewing);
        assert!(hw.updated_at().is_some());
    }

    #[test]
    fn missing_status_is_a_schema_error() {
        let err = Homework::from_value(&json!({"name": "hw1"})).unwrap_err();
        assert_eq!(err, SchemaError::MissingField { field: "status" });
    }

    #[test]
    fn empty_status_counts_as_missing() {
        let err = Homework::from_value(&json!({"name": "hw1", "status": ""})).unwrap_err();
        assert_eq!(err, SchemaError::MissingField { field: "status" });
    }

    #[test]
    fn missing_name_is_reported_before_status() {
        let err = Homework::from_value(&json!({"status": "bogus"})).unwrap_err();
        assert_eq!(err, SchemaError::MissingField { field: "name" });
    }

    #[test]
    fn empty_name_counts_as_missing() {
        let err = Homework::from_value(&json!({"name": "", "status": "approved"})).unwrap_err();
        assert_eq!(err, SchemaError::MissingField { field: "name" });
    }

    #[test]
    fn whitespace_name_is_accepted_verbatim() {
        let hw = Homework::from_value(&json!({"name": " ", "status": "approved"})).unwrap();
        assert_eq!(hw.name().as_str(), " ");
        assert!(hw.status_message().as_str().starts_with("Status changed for \" \"."));
    }

    #[test]
    fn unknown_status_is_a_schema_error() {
        let err = Homework::from_value(&json!({"name": "hw1", "status": "done"})).unwrap_err();
        assert_eq!(err, SchemaError::UnknownStatus("done".to_string()));
    }

    #[test]
    fn non_object_item_is_a_schema_error() {
        let err = Homework::from_value(&json!("hw1")).unwrap_err();
        assert!(matches!(err, SchemaError::ItemNotAnObject { found: "string" }));
    }

    #[test]
    fn status_message_uses_name_and_verdict() {
        let hw = Homework::new(HomeworkName::new("hw1").unwrap(), ReviewStatus::Rejected);
        assert_eq!(
            hw.status_message().as_str(),
            "Status changed for \"hw1\". The work has been reviewed: the reviewer has remarks."
        );
    }
}
