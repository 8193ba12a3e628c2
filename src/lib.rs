//! tcg-explorer - search, sort and inspect Pokemon TCG cards
//!
//! The pipeline is: catalog client -> normalizer -> view controller (filter,
//! sort, select) -> renderer.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod filters;
pub mod format;
pub mod normalize;
pub mod sort;
pub mod view;

pub use catalog::{CatalogClient, CatalogSource, RawCard, SetSummary};
pub use config::Config;
pub use error::CatalogError;
pub use normalize::{normalize, select_price, NormalizedCard};
pub use sort::SortKey;
pub use view::{Phase, ViewController, ViewState};
