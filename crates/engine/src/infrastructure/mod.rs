//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies, plus the
//! startup configuration and logging setup they are built from.

pub mod config;
pub mod logging;
pub mod ports;
pub mod practicum;
pub mod telegram;

#[cfg(test)]
pub(crate) mod test_support;
