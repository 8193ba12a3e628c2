//! The view controller: owns [`ViewState`] and drives it from user actions.

use crate::catalog::{CatalogSource, RawCard};
use crate::error::{CatalogError, Result};
use crate::filters::FilterChain;
use crate::normalize::{normalize_all, NormalizedCard};
use crate::sort::{sort_cards, SortKey};
use crate::view::state::{Phase, ViewState};
use tracing::{debug, info, warn};

/// A submitted search, tagged with the sequence number it was issued under.
///
/// Holds no borrow of the controller, so the fetch can run while newer
/// searches are submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
    pub set_id: Option<String>,
}

impl SearchRequest {
    /// Runs the fetch against a catalog source.
    pub async fn send<S: CatalogSource + ?Sized>(&self, source: &S) -> Result<Vec<RawCard>> {
        source.search_cards(Some(&self.query), self.set_id.as_deref()).await
    }
}

/// Session controller for the search, sort, select and display pipeline.
pub struct ViewController {
    state: ViewState,
    filters: FilterChain,
    latest_seq: u64,
}

impl ViewController {
    pub fn new(sort_key: SortKey) -> Self {
        Self::with_filters(sort_key, FilterChain::new())
    }

    /// Creates a controller that applies `filters` to every result set.
    pub fn with_filters(sort_key: SortKey, filters: FilterChain) -> Self {
        Self { state: ViewState::new(sort_key), filters, latest_seq: 0 }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Submits a query.
    ///
    /// A blank query returns the session to `Idle` and yields `None`; no
    /// fetch is needed. Otherwise the phase becomes `Searching` and the
    /// returned request must be sent and handed to [`Self::complete_search`].
    /// Results and selection are left untouched until then.
    pub fn begin_search(&mut self, query: &str) -> Option<SearchRequest> {
        let query = query.trim();
        if query.is_empty() {
            self.clear();
            return None;
        }

        self.latest_seq += 1;
        self.state.query = query.to_string();
        self.state.phase = Phase::Searching;

        info!("Search #{} for {:?}", self.latest_seq, query);
        Some(SearchRequest {
            seq: self.latest_seq,
            query: query.to_string(),
            set_id: self.state.set_id.clone(),
        })
    }

    /// Applies the outcome of a search.
    ///
    /// Returns false and leaves the state untouched if `seq` is not the latest
    /// issued search.
    pub fn complete_search(
        &mut self,
        seq: u64,
        outcome: std::result::Result<Vec<RawCard>, CatalogError>,
    ) -> bool {
        if seq != self.latest_seq {
            debug!("Discarding stale response #{} (latest is #{})", seq, self.latest_seq);
            return false;
        }

        self.state.selected_card = None;

        match outcome {
            Ok(raw) => {
                let fetched = raw.len();
                let mut cards = self.filters.apply(normalize_all(&raw));
                sort_cards(&mut cards, self.state.sort_key);

                info!("Search #{} returned {} cards ({} after filtering)", seq, fetched, cards.len());
                self.state.phase = if cards.is_empty() { Phase::Empty } else { Phase::Results };
                self.state.results = cards;
            }
            Err(e) => {
                warn!("Search #{} failed: {}", seq, e);
                let message = match e.status() {
                    Some(429) => format!("{} (rate limited; an API key raises the limit)", e),
                    _ => e.to_string(),
                };
                self.state.phase = Phase::Error(message);
                self.state.results = Vec::new();
            }
        }
        true
    }

    /// Submits a query and waits for its result.
    pub async fn search<S: CatalogSource + ?Sized>(&mut self, source: &S, query: &str) {
        if let Some(request) = self.begin_search(query) {
            let outcome = request.send(source).await;
            self.complete_search(request.seq, outcome);
        }
    }

    /// Returns to `Idle`, dropping results, selection and any in-flight search.
    pub fn clear(&mut self) {
        // bump so a straggling response cannot repopulate the view
        self.latest_seq += 1;
        self.state.query.clear();
        self.state.phase = Phase::Idle;
        self.state.results = Vec::new();
        self.state.selected_card = None;
        debug!("Session cleared");
    }

    /// Changes the sort order and re-sorts the current results without refetching.
    pub fn set_sort(&mut self, key: SortKey) {
        self.state.sort_key = key;
        sort_cards(&mut self.state.results, key);
        debug!("Sorted {} cards by {}", self.state.results.len(), key);
    }

    /// Scopes future searches to a set, or removes the scope.
    pub fn set_scope(&mut self, set_id: Option<String>) {
        self.state.set_id = set_id.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
    }

    /// Opens the detail overlay for the card at `index` in the current results.
    ///
    /// Replaces any open selection. Returns `None` and changes nothing if there
    /// are no results shown or the index is out of range.
    pub fn select(&mut self, index: usize) -> Option<&NormalizedCard> {
        if self.state.phase != Phase::Results {
            return None;
        }
        let card = self.state.results.get(index)?.clone();
        debug!("Selected {} ({})", card.name, card.id);
        self.state.selected_card = Some(card);
        self.state.selected_card.as_ref()
    }

    /// Closes the detail overlay.
    pub fn close_detail(&mut self) {
        self.state.selected_card = None;
    }
}
