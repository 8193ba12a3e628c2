//! Price range filter.

use super::Filter;
use crate::normalize::NormalizedCard;

/// Filters cards by market price. Bounds are inclusive.
pub struct PriceFilter {
    min: Option<f64>,
    max: Option<f64>,
}

impl PriceFilter {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }
}

impl Filter for PriceFilter {
    fn matches(&self, card: &NormalizedCard) -> bool {
        // Cards without a market price are kept
        if !card.has_price() {
            return true;
        }

        if let Some(min) = self.min {
            if card.price < min {
                return false;
            }
        }

        if let Some(max) = self.max {
            if card.price > max {
                return false;
            }
        }

        true
    }

    fn description(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("Price: ${:.2} - ${:.2}", min, max),
            (Some(min), None) => format!("Price: >= ${:.2}", min),
            (None, Some(max)) => format!("Price: <= ${:.2}", max),
            (None, None) => "Price: any".to_string(),
        }
    }
}
