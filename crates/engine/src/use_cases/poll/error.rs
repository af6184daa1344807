//! Errors from one poll iteration.

use hwstatus_domain::SchemaError;

use crate::infrastructure::ports::{DeliveryError, FetchError};

/// Everything that can go wrong inside one iteration, by kind.
///
/// None of these stop the watcher; the loop logs them and tries again after
/// the retry period.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PollError {
    /// No HTTP response (DNS, connection, timeout).
    #[error("request to status API failed: {0}")]
    Transport(String),

    /// The status API answered with a non-200 code.
    #[error("status API answered {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The status API body was not JSON.
    #[error("status API body is not valid JSON: {0}")]
    Parse(String),

    /// The JSON did not have the documented shape.
    #[error("unexpected response format: {0}")]
    Schema(#[from] SchemaError),

    /// The chat did not confirm a notification.
    #[error("notification was not delivered: {0}")]
    Delivery(#[from] DeliveryError),

    /// Anything not covered above.
    #[error("unexpected failure: {0}")]
    Unknown(String),
}

impl PollError {
    /// Whether this failure should be reported to the chat.
    ///
    /// Delivery failures are log-only: the chat is what failed.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, PollError::Delivery(_))
    }
}

impl From<FetchError> for PollError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Transport(msg) => PollError::Transport(msg),
            FetchError::HttpStatus { status, body } => PollError::HttpStatus { status, body },
            FetchError::Parse(msg) => PollError::Parse(msg),
            FetchError::Other(msg) => PollError::Unknown(msg),
        }
    }
}
