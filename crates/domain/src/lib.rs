extern crate self as hwstatus_domain;

pub mod common;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{EmptyListPolicy, Homework, HomeworkEnvelope};

pub use error::{DomainError, SchemaError};

pub use value_objects::{HomeworkName, ReviewStatus, StatusMessage, UpdatedAt};
