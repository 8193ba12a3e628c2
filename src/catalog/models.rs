//! Raw records as returned by the catalog API.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// A card record as the API sends it. Only the fields the explorer reads are modeled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub types: Option<Vec<String>>,
    pub set: RawSet,
    pub images: RawImages,
    #[serde(default)]
    pub tcgplayer: Option<TcgPlayer>,
    #[serde(default)]
    pub cardmarket: Option<CardMarket>,
}

/// The `set` object embedded in a card record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSet {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// Image URLs for a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawImages {
    pub small: String,
    #[serde(default)]
    pub large: Option<String>,
}

/// TCGplayer market data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TcgPlayer {
    #[serde(default)]
    pub url: Option<String>,
    /// Prices keyed by print variant (`normal`, `holofoil`, ...)
    ///
    /// Variant entries that are not objects (e.g. `null`) are dropped.
    #[serde(default, deserialize_with = "lenient_prices")]
    pub prices: Option<HashMap<String, VariantPrice>>,
}

/// Price points for one print variant. Non-numeric values read as `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantPrice {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub low: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub mid: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub high: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub market: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub direct_low: Option<f64>,
}

/// Cardmarket (EUR) market data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CardMarket {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub prices: Option<CardMarketPrices>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMarketPrices {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub average_sell_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub trend_price: Option<f64>,
}

/// Reads a number, or a numeric string. Anything else is `None`.
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_prices<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<HashMap<String, VariantPrice>>, D::Error> {
    let serde_json::Value::Object(entries) = serde_json::Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    let prices = entries
        .into_iter()
        .filter_map(|(variant, entry)| match serde_json::from_value(entry) {
            Ok(price) => Some((variant, price)),
            Err(e) => {
                debug!("Ignoring price variant {}: {}", variant, e);
                None
            }
        })
        .collect();
    Ok(Some(prices))
}

fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Summary of a card set from `GET /sets`.
///
/// Read from the API's camelCase keys, written out in snake_case like every
/// other record the explorer prints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SetSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub total: Option<u32>,
}

/// Response envelope shared by every list endpoint.
///
/// A missing `data` field decodes as `None`; callers treat that as an empty list.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub data: Option<Vec<serde_json::Value>>,
}
