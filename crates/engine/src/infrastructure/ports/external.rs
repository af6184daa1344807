//! External service port traits (status API, messaging channel).

use async_trait::async_trait;

use super::error::{DeliveryError, FetchError};

// =============================================================================
// Status Source
// =============================================================================

/// Where homework statuses come from.
///
/// Returns the parsed JSON body untouched; shape validation belongs to the
/// domain envelope, not to the transport.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusSourcePort: Send + Sync {
    /// Fetch every homework updated since `from_date` (unix seconds, 0 = all).
    async fn fetch_statuses(&self, from_date: i64) -> Result<serde_json::Value, FetchError>;
}

// =============================================================================
// Notifier
// =============================================================================

/// The chat the watcher reports to.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotifierPort: Send + Sync {
    /// Deliver one text message. `Ok` means the channel confirmed the send.
    async fn notify(&self, text: String) -> Result<(), DeliveryError>;
}
