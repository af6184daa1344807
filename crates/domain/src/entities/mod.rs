//! Domain entities - Core business objects

mod envelope;
mod homework;

pub use envelope::{EmptyListPolicy, HomeworkEnvelope};
pub use homework::Homework;
