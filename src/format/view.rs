//! Renders a [`ViewState`] as a full screen: search box, sort selector,
//! results header, card grid and the detail overlay.

use super::{price_text, truncate, Formatter};
use crate::config::OutputFormat;
use crate::normalize::NormalizedCard;
use crate::sort::SortKey;
use crate::view::{rows, Phase, ViewState, GRID_WIDTH};

const TILE_WIDTH: usize = 34;
const OVERLAY_WIDTH: usize = 72;

/// Draws view state in the configured output format.
pub struct ViewRenderer {
    format: OutputFormat,
}

impl ViewRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render(&self, state: &ViewState) -> String {
        match self.format {
            OutputFormat::Table => self.render_screen(state),
            OutputFormat::Json => {
                serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Markdown => self.render_markdown(state),
            OutputFormat::Csv => Formatter::new(OutputFormat::Csv).format_cards(&state.results),
        }
    }

    fn render_screen(&self, state: &ViewState) -> String {
        let mut lines = Vec::new();

        let scope = state.set_id.as_deref().map(|s| format!("  (set: {})", s)).unwrap_or_default();
        lines.push(format!("Search: [{}]{}", state.query, scope));
        lines.push("Sort by:".to_string());
        for key in SortKey::all() {
            let mark = if *key == state.sort_key { "(*)" } else { "( )" };
            lines.push(format!("  {} {}", mark, key.label()));
        }
        lines.push(String::new());

        match &state.phase {
            Phase::Idle => lines.push("Enter a search term to find Pokemon cards!".to_string()),
            Phase::Searching => lines.push(format!("Searching for \"{}\"...", state.query)),
            Phase::Empty => lines.push("No cards found. Try a different search term!".to_string()),
            Phase::Error(message) => lines.push(format!("Error: {}", message)),
            Phase::Results => {
                lines.push(format!("Found Cards ({} results)", state.result_count()));
                lines.push(format!("Sorted by: {}", state.sort_key.label()));
                lines.push(String::new());

                if state.detail_open() {
                    if let Some(card) = &state.selected_card {
                        lines.extend(overlay_lines(card));
                        lines.push(String::new());
                    }
                }

                lines.extend(grid_lines(&state.results));
            }
        }

        lines.join("\n")
    }

    fn render_markdown(&self, state: &ViewState) -> String {
        let mut lines = vec![format!("# Search: {}", state.query)];
        lines.push(String::new());
        lines.push(format!("**Sorted by:** {}", state.sort_key.label()));
        lines.push(String::new());

        match &state.phase {
            Phase::Idle => lines.push("_Enter a search term to find Pokemon cards!_".to_string()),
            Phase::Searching => lines.push("_Searching..._".to_string()),
            Phase::Empty => lines.push("_No cards found._".to_string()),
            Phase::Error(message) => lines.push(format!("**Error:** {}", message)),
            Phase::Results => {
                let formatter = Formatter::new(OutputFormat::Markdown);
                if state.detail_open() {
                    if let Some(card) = &state.selected_card {
                        lines.push(formatter.format_card(card));
                        lines.push(String::new());
                    }
                }
                lines.push(formatter.format_cards(&state.results));
            }
        }

        lines.join("\n")
    }
}

/// Lines of one grid tile, each exactly `TILE_WIDTH` wide.
fn tile_lines(position: usize, card: &NormalizedCard) -> Vec<String> {
    let inner = TILE_WIDTH - 4;
    [
        format!("[{}] {}", position, card.name),
        card.image_small.clone(),
        format!("Set: {}", card.set_name),
        format!("Rarity: {}", card.rarity),
        format!("Price: {}", price_text(card)),
    ]
    .iter()
    .map(|text| format!("| {:<inner$} |", truncate(text, inner)))
    .collect()
}

fn grid_lines(cards: &[NormalizedCard]) -> Vec<String> {
    let border = format!("+{}+", "-".repeat(TILE_WIDTH - 2));
    let mut lines = Vec::new();

    for (row_index, row) in rows(cards, GRID_WIDTH).enumerate() {
        let tiles: Vec<Vec<String>> = row
            .iter()
            .enumerate()
            .map(|(col, card)| tile_lines(row_index * GRID_WIDTH + col + 1, card))
            .collect();

        lines.push(vec![border.as_str(); tiles.len()].join(" "));
        let height = tiles.first().map(|t| t.len()).unwrap_or(0);
        for line in 0..height {
            let cells: Vec<&str> = tiles.iter().map(|t| t[line].as_str()).collect();
            lines.push(cells.join(" "));
        }
        lines.push(vec![border.as_str(); tiles.len()].join(" "));
    }

    lines
}

fn overlay_lines(card: &NormalizedCard) -> Vec<String> {
    let inner = OVERLAY_WIDTH - 4;
    let title = " Card Detail ";
    let top = format!("+=={}{}+", title, "=".repeat(OVERLAY_WIDTH - 4 - title.len()));
    let bottom = format!("+{}+", "=".repeat(OVERLAY_WIDTH - 2));

    let body = [
        card.image_large.clone(),
        format!("Name:         {}", card.name),
        format!("Set:          {}", card.set_name),
        format!("Rarity:       {}", card.rarity),
        format!("Price:        {}", price_text(card)),
        format!("Release Date: {}", card.release_date),
        format!("Artist:       {}", card.artist),
        String::new(),
        "[x] close".to_string(),
    ];

    let mut lines = vec![top];
    lines.extend(body.iter().map(|text| format!("| {:<inner$} |", truncate(text, inner))));
    lines.push(bottom);
    lines
}
