//! CLI command implementations.

pub mod browse;
pub mod demo;
pub mod search;
pub mod sets;

pub use browse::BrowseCommand;
pub use demo::DemoCommand;
pub use search::{SearchCommand, SearchOptions};
pub use sets::SetsCommand;
