//! Session view state.

use crate::normalize::NormalizedCard;
use crate::sort::SortKey;
use serde::Serialize;

/// Where the session is in the search lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "message", rename_all = "lowercase")]
pub enum Phase {
    /// No query entered
    Idle,
    /// A search is in flight
    Searching,
    /// The last search returned cards
    Results,
    /// The last search succeeded with no cards
    Empty,
    /// The last search failed
    Error(String),
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub query: String,
    /// Set id that scopes searches
    pub set_id: Option<String>,
    pub sort_key: SortKey,
    pub phase: Phase,
    pub results: Vec<NormalizedCard>,
    pub selected_card: Option<NormalizedCard>,
}

impl ViewState {
    pub fn new(sort_key: SortKey) -> Self {
        Self {
            query: String::new(),
            set_id: None,
            sort_key,
            phase: Phase::Idle,
            results: Vec::new(),
            selected_card: None,
        }
    }

    /// Returns true if the detail overlay should be drawn.
    ///
    /// The overlay is hidden while idle or searching even if a card is still selected.
    pub fn detail_open(&self) -> bool {
        self.selected_card.is_some() && !matches!(self.phase, Phase::Idle | Phase::Searching)
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(SortKey::default())
    }
}
