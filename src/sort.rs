//! Sort orders for normalized cards.

use crate::normalize::NormalizedCard;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The eight orderings offered by the sort selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    PriceHigh,
    PriceLow,
    NameAsc,
    NameDesc,
    SetAsc,
    SetDesc,
    DateNew,
    DateOld,
}

impl SortKey {
    /// All keys in selector order.
    pub fn all() -> &'static [SortKey] {
        &[
            SortKey::PriceHigh,
            SortKey::PriceLow,
            SortKey::NameAsc,
            SortKey::NameDesc,
            SortKey::SetAsc,
            SortKey::SetDesc,
            SortKey::DateNew,
            SortKey::DateOld,
        ]
    }

    /// Stable identifier used on the command line and in config files.
    pub fn key(&self) -> &'static str {
        match self {
            SortKey::PriceHigh => "price-high",
            SortKey::PriceLow => "price-low",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::SetAsc => "set-asc",
            SortKey::SetDesc => "set-desc",
            SortKey::DateNew => "date-new",
            SortKey::DateOld => "date-old",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::PriceHigh => "Price (High to Low)",
            SortKey::PriceLow => "Price (Low to High)",
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
            SortKey::SetAsc => "Set (A-Z)",
            SortKey::SetDesc => "Set (Z-A)",
            SortKey::DateNew => "Release Date (Newest)",
            SortKey::DateOld => "Release Date (Oldest)",
        }
    }

    /// Ascending comparison on this key's field; direction is applied by [`SortKey::compare`].
    fn compare_field(&self, a: &NormalizedCard, b: &NormalizedCard) -> Ordering {
        match self {
            SortKey::PriceHigh | SortKey::PriceLow => a.price.total_cmp(&b.price),
            SortKey::NameAsc | SortKey::NameDesc => a.name.cmp(&b.name),
            SortKey::SetAsc | SortKey::SetDesc => a.set_name.cmp(&b.set_name),
            SortKey::DateNew | SortKey::DateOld => a.release_date.cmp(&b.release_date),
        }
    }

    fn is_descending(&self) -> bool {
        matches!(self, SortKey::PriceHigh | SortKey::NameDesc | SortKey::SetDesc | SortKey::DateNew)
    }

    /// Compares two cards in this key's direction.
    pub fn compare(&self, a: &NormalizedCard, b: &NormalizedCard) -> Ordering {
        let ord = self.compare_field(a, b);
        if self.is_descending() {
            ord.reverse()
        } else {
            ord
        }
    }
}

/// Sorts cards in place. Stable: ties keep their current relative order.
pub fn sort_cards(cards: &mut [NormalizedCard], key: SortKey) {
    cards.sort_by(|a, b| key.compare(a, b));
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        SortKey::all()
            .iter()
            .find(|k| k.key() == needle || k.label().to_lowercase() == needle)
            .copied()
            .ok_or_else(|| {
                let keys: Vec<&str> = SortKey::all().iter().map(|k| k.key()).collect();
                format!("Unknown sort: {}. Use: {}", s, keys.join(", "))
            })
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, name: &str, set: &str, price: f64, date: &str) -> NormalizedCard {
        NormalizedCard {
            id: id.to_string(),
            name: name.to_string(),
            set_name: set.to_string(),
            set_id: set.to_lowercase(),
            rarity: "Common".to_string(),
            price,
            image_small: format!("https://img/{}.png", id),
            image_large: format!("https://img/{}_hires.png", id),
            release_date: date.to_string(),
            card_type: "Fire".to_string(),
            artist: "N/A".to_string(),
        }
    }

    fn ids(cards: &[NormalizedCard]) -> Vec<&str> {
        cards.iter().map(|c| c.id.as_str()).collect()
    }

    fn sample() -> Vec<NormalizedCard> {
        vec![
            card("a", "Charmander", "Base", 3.0, "1999/01/09"),
            card("b", "Abra", "Jungle", 10.0, "1999/06/16"),
            card("c", "Zubat", "Fossil", 1.0, ""),
        ]
    }

    #[test]
    fn test_price_high_to_low() {
        let mut cards = sample();
        sort_cards(&mut cards, SortKey::PriceHigh);
        let prices: Vec<f64> = cards.iter().map(|c| c.price).collect();
        assert_eq!(prices, vec![10.0, 3.0, 1.0]);
    }

    #[test]
    fn test_price_low_to_high() {
        let mut cards = sample();
        sort_cards(&mut cards, SortKey::PriceLow);
        let prices: Vec<f64> = cards.iter().map(|c| c.price).collect();
        assert_eq!(prices, vec![1.0, 3.0, 10.0]);
    }

    #[test]
    fn test_name_and_set() {
        let mut cards = sample();
        sort_cards(&mut cards, SortKey::NameAsc);
        assert_eq!(ids(&cards), vec!["b", "a", "c"]);
        sort_cards(&mut cards, SortKey::NameDesc);
        assert_eq!(ids(&cards), vec!["c", "a", "b"]);
        sort_cards(&mut cards, SortKey::SetAsc);
        assert_eq!(ids(&cards), vec!["a", "c", "b"]);
        sort_cards(&mut cards, SortKey::SetDesc);
        assert_eq!(ids(&cards), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_empty_release_date_is_oldest() {
        let mut cards = sample();
        sort_cards(&mut cards, SortKey::DateOld);
        assert_eq!(ids(&cards), vec!["c", "a", "b"]);
        sort_cards(&mut cards, SortKey::DateNew);
        assert_eq!(ids(&cards), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        // every card ties on every key
        let tied = vec![
            card("1", "Pikachu", "Base", 2.0, "1999/01/09"),
            card("2", "Pikachu", "Base", 2.0, "1999/01/09"),
            card("3", "Pikachu", "Base", 2.0, "1999/01/09"),
        ];
        for key in SortKey::all() {
            let mut cards = tied.clone();
            sort_cards(&mut cards, *key);
            assert_eq!(ids(&cards), vec!["1", "2", "3"], "{key:?}");
        }
    }

    #[test]
    fn test_set_and_date_ties_keep_input_order() {
        let mut cards = vec![
            card("1", "Zubat", "Jungle", 1.0, "1999/06/16"),
            card("2", "Abra", "Base", 3.0, "1999/01/09"),
            card("3", "Mew", "Jungle", 2.0, "1999/06/16"),
            card("4", "Onix", "Base", 4.0, "1999/01/09"),
        ];

        sort_cards(&mut cards, SortKey::SetAsc);
        assert_eq!(ids(&cards), vec!["2", "4", "1", "3"]);
        sort_cards(&mut cards, SortKey::SetDesc);
        assert_eq!(ids(&cards), vec!["1", "3", "2", "4"]);
        sort_cards(&mut cards, SortKey::DateOld);
        assert_eq!(ids(&cards), vec!["2", "4", "1", "3"]);
        sort_cards(&mut cards, SortKey::DateNew);
        assert_eq!(ids(&cards), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_sorting_twice_is_stable() {
        for key in SortKey::all() {
            let mut once = sample();
            sort_cards(&mut once, *key);
            let mut twice = once.clone();
            sort_cards(&mut twice, *key);
            assert_eq!(ids(&once), ids(&twice), "{key:?}");
        }
    }

    #[test]
    fn test_parse_keys_and_labels() {
        assert_eq!("price-high".parse::<SortKey>().unwrap(), SortKey::PriceHigh);
        assert_eq!("Release Date (Oldest)".parse::<SortKey>().unwrap(), SortKey::DateOld);
        assert_eq!("name (z-a)".parse::<SortKey>().unwrap(), SortKey::NameDesc);

        let err = "rarity".parse::<SortKey>().unwrap_err();
        assert!(err.contains("Unknown sort"));
        assert!(err.contains("date-old"));
    }

    #[test]
    fn test_key_roundtrip_and_serde() {
        for key in SortKey::all() {
            assert_eq!(key.key().parse::<SortKey>().unwrap(), *key);
            let json = serde_json::to_string(key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.key()));
        }
        assert_eq!(SortKey::all().len(), 8);
        assert_eq!(SortKey::default().to_string(), "Price (High to Low)");
    }
}
