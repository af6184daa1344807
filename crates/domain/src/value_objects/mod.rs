//! Value objects - Immutable objects defined by their attributes

mod names;
mod review_status;
mod status_message;
mod timestamp;

pub use names::HomeworkName;
pub use review_status::ReviewStatus;
pub use status_message::StatusMessage;
pub use timestamp::UpdatedAt;
