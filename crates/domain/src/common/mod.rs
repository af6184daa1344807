//! Small pure helpers shared by the domain types.
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Minimal dependencies** - chrono for timestamps, serde_json for payload fields

pub mod datetime;
pub mod string;

pub use datetime::parse_timestamp;
pub use string::{none_if_empty, str_field};
