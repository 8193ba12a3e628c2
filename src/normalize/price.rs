//! Best-price selection from TCGplayer variant prices.

use crate::catalog::models::{TcgPlayer, VariantPrice};
use std::collections::HashMap;

/// Variants consulted for a card's price, highest priority first.
pub const VARIANT_PRIORITY: [&str; 5] =
    ["normal", "holofoil", "1stEditionHolofoil", "1stEditionNormal", "unlimited"];

/// Picks the market price of the first variant in [`VARIANT_PRIORITY`] that has one.
///
/// Returns `0.0` ("not available") when there is no price map, it is empty,
/// or none of the listed variants carries a positive market price.
pub fn select_price(prices: Option<&HashMap<String, VariantPrice>>) -> f64 {
    let Some(prices) = prices.filter(|p| !p.is_empty()) else {
        return 0.0;
    };

    VARIANT_PRIORITY
        .iter()
        .filter_map(|variant| prices.get(*variant))
        .filter_map(|price| price.market)
        .find(|market| *market > 0.0)
        .unwrap_or(0.0)
}

/// Every variant's market price, listed variants in priority order first,
/// then the rest by name.
pub fn variant_markets(prices: &HashMap<String, VariantPrice>) -> Vec<(&str, Option<f64>)> {
    let rank = |variant: &str| {
        VARIANT_PRIORITY.iter().position(|v| *v == variant).unwrap_or(VARIANT_PRIORITY.len())
    };

    let mut markets: Vec<(&str, Option<f64>)> =
        prices.iter().map(|(variant, price)| (variant.as_str(), price.market)).collect();
    markets.sort_by(|a, b| rank(a.0).cmp(&rank(b.0)).then_with(|| a.0.cmp(b.0)));
    markets
}

/// Convenience wrapper over an optional `tcgplayer` block.
pub fn tcgplayer_price(tcgplayer: Option<&TcgPlayer>) -> f64 {
    select_price(tcgplayer.and_then(|t| t.prices.as_ref()))
}
