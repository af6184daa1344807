//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - The homework status API (could swap the HTTP client for a fixture)
//! - The messaging channel (could swap Telegram for another chat)

mod error;
mod external;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{NotifierPort, StatusSourcePort};

#[cfg(test)]
pub use external::{MockNotifierPort, MockStatusSourcePort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::{DeliveryError, FetchError};
