//! Composable filters applied to normalized cards before sorting.

pub mod price;
pub mod rarity;

use crate::normalize::NormalizedCard;

pub use price::PriceFilter;
pub use rarity::RarityFilter;

/// Trait for filtering cards.
pub trait Filter: Send + Sync {
    /// Returns true if the card passes the filter.
    fn matches(&self, card: &NormalizedCard) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}

/// A chain of filters that must all pass.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Creates an empty filter chain.
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Adds a filter to the chain.
    pub fn add(&mut self, filter: impl Filter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Checks if a card passes all filters.
    pub fn matches(&self, card: &NormalizedCard) -> bool {
        self.filters.iter().all(|f| f.matches(card))
    }

    /// Filters a collection of cards, preserving order.
    pub fn apply(&self, cards: Vec<NormalizedCard>) -> Vec<NormalizedCard> {
        cards.into_iter().filter(|c| self.matches(c)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns descriptions of all filters.
    pub fn descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a FilterChain from configuration.
pub struct FilterChainBuilder {
    chain: FilterChain,
}

impl FilterChainBuilder {
    pub fn new() -> Self {
        Self { chain: FilterChain::new() }
    }

    /// Adds a price range filter.
    pub fn price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        if min.is_some() || max.is_some() {
            self.chain.add(PriceFilter::new(min, max));
        }
        self
    }

    /// Adds a rarity filter.
    pub fn rarities(mut self, rarities: Vec<String>) -> Self {
        if !rarities.is_empty() {
            self.chain.add(RarityFilter::new(rarities));
        }
        self
    }

    pub fn build(self) -> FilterChain {
        self.chain
    }
}

impl Default for FilterChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn make_card(name: &str, rarity: &str, price: f64) -> NormalizedCard {
        NormalizedCard {
            id: name.to_lowercase(),
            name: name.to_string(),
            set_name: "Base".to_string(),
            set_id: "base1".to_string(),
            rarity: rarity.to_string(),
            price,
            image_small: "https://img/s.png".to_string(),
            image_large: "https://img/l.png".to_string(),
            release_date: "1999/01/09".to_string(),
            card_type: "Colorless".to_string(),
            artist: "Ken Sugimori".to_string(),
        }
    }

    #[test]
    fn test_filter_chain_new() {
        let chain = FilterChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
    }

    #[test]
    fn test_filter_chain_empty_matches_all() {
        let chain = FilterChain::default();
        assert!(chain.matches(&make_card("Ditto", "Rare", 0.0)));
    }

    #[test]
    fn test_filter_chain() {
        let mut chain = FilterChain::new();
        chain.add(PriceFilter::new(Some(1.0), Some(50.0)));
        chain.add(RarityFilter::new(vec!["Rare Holo".to_string()]));
        assert_eq!(chain.len(), 2);

        assert!(chain.matches(&make_card("Mewtwo", "Rare Holo", 20.0)));
        assert!(!chain.matches(&make_card("Mewtwo", "Rare Holo", 75.0)));
        assert!(!chain.matches(&make_card("Rattata", "Common", 20.0)));
    }

    #[test]
    fn test_filter_chain_apply_preserves_order() {
        let chain = FilterChainBuilder::new().price_range(Some(5.0), None).build();
        let cards = vec![
            make_card("A", "Rare", 9.0),
            make_card("B", "Rare", 2.0),
            make_card("C", "Rare", 6.0),
        ];

        let names: Vec<String> = chain.apply(cards).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_filter_chain_builder_skips_disabled() {
        let chain = FilterChainBuilder::default().price_range(None, None).rarities(Vec::new()).build();
        assert!(chain.is_empty());
    }

    #[test]
    fn test_filter_chain_descriptions() {
        let chain = FilterChainBuilder::new()
            .price_range(Some(1.0), Some(2.0))
            .rarities(vec!["Rare".to_string()])
            .build();

        let descriptions = chain.descriptions();
        assert_eq!(descriptions.len(), 2);
        assert!(descriptions[0].contains("Price"));
        assert!(descriptions[1].contains("Rarity"));
    }
}
