//! Error types for port operations.

/// Failure to obtain a usable response body from the status API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// DNS, connection, TLS or timeout failure - no HTTP response at all.
    #[error("request to status API failed: {0}")]
    Transport(String),

    /// The API answered with something other than 200 OK.
    #[error("status API answered {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The body was not valid JSON.
    #[error("status API body is not valid JSON: {0}")]
    Parse(String),

    /// The request could not be built or followed (bad URL, redirect loop).
    #[error("status API request could not be made: {0}")]
    Other(String),
}

impl FetchError {
    pub fn transport(message: impl ToString) -> Self {
        Self::Transport(message.to_string())
    }

    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    pub fn parse(message: impl ToString) -> Self {
        Self::Parse(message.to_string())
    }

    pub fn other(message: impl ToString) -> Self {
        Self::Other(message.to_string())
    }
}

/// The messaging channel did not confirm delivery.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    /// The request never got an answer.
    #[error("message send failed: {0}")]
    Request(String),

    /// The messaging API answered but refused the message.
    #[error("message rejected ({status}): {description}")]
    Rejected { status: u16, description: String },
}

impl DeliveryError {
    pub fn request(message: impl ToString) -> Self {
        Self::Request(message.to_string())
    }

    pub fn rejected(status: u16, description: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            description: description.into(),
        }
    }
}
