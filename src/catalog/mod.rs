//! Catalog API access: HTTP client, raw records and search filter expressions.

pub mod client;
#[cfg(test)]
pub(crate) mod mock;
pub mod models;
pub mod query;

pub use client::{CatalogClient, CatalogSource};
pub use models::{
    CardMarket, CardMarketPrices, RawCard, RawImages, RawSet, SetSummary, TcgPlayer, VariantPrice,
};
pub use query::filter_expression;
