//! Notification text derived from a homework's review status

use std::fmt;

use crate::value_objects::{HomeworkName, ReviewStatus};

/// A derived "status changed" notification.
///
/// Two messages are equal exactly when the homework name and status are, which
/// is what duplicate suppression relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusMessage(String);

impl StatusMessage {
    /// Build the notification for `name` reaching `status`.
    pub fn status_changed(name: &HomeworkName, status: ReviewStatus) -> Self {
        Self(format!(
            "Status changed for \"{}\". {}",
            name,
            status.verdict()
        ))
    }

    /// Returns the message text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<StatusMessage> for String {
    fn from(message: StatusMessage) -> String {
        message.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fixed_template() {
        let name = HomeworkName::new("hw1").unwrap();
        let message = StatusMessage::status_changed(&name, ReviewStatus::Approved);
        assert_eq!(
            message.as_str(),
            "Status changed for \"hw1\". The work has been reviewed: the reviewer liked everything. Hooray!"
        );
    }

    #[test]
    fn different_status_gives_different_message() {
        let name = HomeworkName::new("hw1").unwrap();
        assert_ne!(
            StatusMessage::status_changed(&name, ReviewStatus::Reviewing),
            StatusMessage::status_changed(&name, ReviewStatus::Approved)
        );
    }
}
