//! Use cases - orchestration across ports.

pub mod poll;

pub use poll::{CheckHomeworkStatus, IterationOutcome, PollError, StatusWatcher};
