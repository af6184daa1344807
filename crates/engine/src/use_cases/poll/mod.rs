//! Homework status polling.

mod check_status;
mod error;
mod runner;

pub use check_status::{CheckHomeworkStatus, IterationOutcome};
pub use error::PollError;
pub use runner::{StatusWatcher, FAILURE_REPORT_PREFIX};
