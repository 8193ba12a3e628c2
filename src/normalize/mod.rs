//! Card normalization: raw API records into fixed-shape display records.

pub mod price;

use crate::catalog::models::RawCard;
use serde::{Deserialize, Serialize};

pub use price::{select_price, tcgplayer_price, variant_markets, VARIANT_PRIORITY};

/// Placeholder for absent text fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// A card with every field resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCard {
    pub id: String,
    pub name: String,
    pub set_name: String,
    pub set_id: String,
    pub rarity: String,
    /// Market price in USD, `0.0` when not available
    pub price: f64,
    pub image_small: String,
    pub image_large: String,
    /// Set release date as sent by the API, empty when unknown
    pub release_date: String,
    pub card_type: String,
    pub artist: String,
}

impl NormalizedCard {
    /// Returns true if a market price was found.
    pub fn has_price(&self) -> bool {
        self.price > 0.0
    }
}

/// Maps a raw record to a [`NormalizedCard`].
pub fn normalize(raw: &RawCard) -> NormalizedCard {
    NormalizedCard {
        id: raw.id.clone(),
        name: raw.name.clone(),
        set_name: raw.set.name.clone(),
        set_id: raw.set.id.clone(),
        rarity: raw.rarity.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        price: tcgplayer_price(raw.tcgplayer.as_ref()),
        image_small: raw.images.small.clone(),
        image_large: raw.images.large.clone().unwrap_or_else(|| raw.images.small.clone()),
        release_date: raw.set.release_date.clone().unwrap_or_default(),
        card_type: raw
            .types
            .as_ref()
            .and_then(|t| t.first())
            .cloned()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        artist: raw.artist.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    }
}

/// Normalizes a batch, preserving order.
pub fn normalize_all(raw: &[RawCard]) -> Vec<NormalizedCard> {
    raw.iter().map(normalize).collect()
}
