//! In-memory catalog for unit tests.

use crate::catalog::{CatalogSource, RawCard, SetSummary};
use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

type Call = (Option<String>, Option<String>);

/// Mock catalog; records every search it receives.
///
/// Searches return the cards registered for the query with [`MockCatalog::with`],
/// falling back to `cards`. A query registered with [`MockCatalog::delayed`]
/// sleeps before answering.
pub(crate) struct MockCatalog {
    pub sets: std::result::Result<Vec<SetSummary>, CatalogError>,
    pub cards: Vec<RawCard>,
    pub by_query: HashMap<String, Vec<RawCard>>,
    pub delays: HashMap<String, Duration>,
    pub fail_search: bool,
    pub calls: Mutex<Vec<Call>>,
}

impl MockCatalog {
    pub fn with(mut self, query: &str, cards: Vec<RawCard>) -> Self {
        self.by_query.insert(query.to_string(), cards);
        self
    }

    pub fn delayed(mut self, query: &str, millis: u64) -> Self {
        self.delays.insert(query.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self {
            sets: Ok(Vec::new()),
            cards: Vec::new(),
            by_query: HashMap::new(),
            delays: HashMap::new(),
            fail_search: false,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn fetch_sets(&self) -> Result<Vec<SetSummary>> {
        match &self.sets {
            Ok(sets) => Ok(sets.clone()),
            Err(CatalogError::Http { status, body }) => {
                Err(CatalogError::Http { status: *status, body: body.clone() })
            }
            Err(other) => Err(CatalogError::Http { status: 500, body: other.to_string() }),
        }
    }

    async fn search_cards(&self, query: Option<&str>, set_id: Option<&str>) -> Result<Vec<RawCard>> {
        self.calls.lock().unwrap().push((query.map(String::from), set_id.map(String::from)));

        let query = query.unwrap_or_default();
        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        if self.fail_search {
            return Err(CatalogError::Http { status: 503, body: "unavailable".to_string() });
        }
        Ok(self.by_query.get(query).unwrap_or(&self.cards).clone())
    }
}

/// A rare Base-set card with a `normal` market price.
pub(crate) fn raw_card(id: &str, name: &str, market: f64) -> RawCard {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "rarity": "Rare",
        "artist": "Ken Sugimori",
        "set": {"id": "base1", "name": "Base", "releaseDate": "1999/01/09"},
        "images": {"small": format!("https://img/{}.png", id)},
        "tcgplayer": {"prices": {"normal": {"market": market}}}
    }))
    .unwrap()
}
