//! Homework status bot engine.
//!
//! ## Structure
//!
//! - `use_cases/` - the poll iteration and the long-running watcher loop
//! - `infrastructure/` - configuration, logging, ports and their HTTP adapters
//! - `app` - composition of adapters into a watcher

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
