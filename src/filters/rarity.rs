//! Rarity filter.

use super::Filter;
use crate::normalize::NormalizedCard;

/// Keeps cards whose rarity is one of the listed values (case-insensitive).
pub struct RarityFilter {
    rarities: Vec<String>,
}

impl RarityFilter {
    pub fn new(rarities: Vec<String>) -> Self {
        Self { rarities: rarities.into_iter().map(|r| r.trim().to_lowercase()).collect() }
    }
}

impl Filter for RarityFilter {
    fn matches(&self, card: &NormalizedCard) -> bool {
        let rarity = card.rarity.to_lowercase();
        self.rarities.iter().any(|r| *r == rarity)
    }

    fn description(&self) -> String {
        format!("Rarity: {}", self.rarities.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::tests::make_card;

    #[test]
    fn test_rarity_case_insensitive() {
        let filter = RarityFilter::new(vec!["rare holo".to_string(), " Promo ".to_string()]);
        assert!(filter.matches(&make_card("A", "Rare Holo", 1.0)));
        assert!(filter.matches(&make_card("A", "PROMO", 1.0)));
        assert!(!filter.matches(&make_card("A", "Rare", 1.0)));
    }

    #[test]
    fn test_missing_rarity_matches_na() {
        let filter = RarityFilter::new(vec!["N/A".to_string()]);
        assert!(filter.matches(&make_card("A", "N/A", 1.0)));
    }

    #[test]
    fn test_description() {
        let filter = RarityFilter::new(vec!["Rare".to_string(), "Common".to_string()]);
        assert_eq!(filter.description(), "Rarity: rare | common");
    }
}
