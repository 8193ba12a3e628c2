//! Output formatting for cards and sets (table, JSON, markdown, CSV).

pub mod view;

use crate::catalog::SetSummary;
use crate::config::OutputFormat;
use crate::normalize::NormalizedCard;

pub use view::ViewRenderer;

/// Price as shown to users: `$12.50`, or `Not available` when unpriced.
pub fn price_text(card: &NormalizedCard) -> String {
    if card.has_price() {
        format!("${:.2}", card.price)
    } else {
        "Not available".to_string()
    }
}

/// Shortens `s` to at most `max` characters, ending in `...` when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Formats cards and sets for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single card with all details.
    pub fn format_card(&self, card: &NormalizedCard) -> String {
        match self.format {
            OutputFormat::Json => self.json_single(card),
            OutputFormat::Table => self.table_single(card),
            OutputFormat::Markdown => self.markdown_single(card),
            OutputFormat::Csv => self.csv_cards(std::slice::from_ref(card)),
        }
    }

    /// Formats a list of cards.
    pub fn format_cards(&self, cards: &[NormalizedCard]) -> String {
        if cards.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => Self::csv_header(),
                _ => "No cards found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_cards(cards),
            OutputFormat::Table => self.table_cards(cards),
            OutputFormat::Markdown => self.markdown_cards(cards),
            OutputFormat::Csv => self.csv_cards(cards),
        }
    }

    /// Formats a list of sets.
    pub fn format_sets(&self, sets: &[SetSummary]) -> String {
        if sets.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => "id,name,series,release_date,total".to_string(),
                _ => "No sets found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(sets).unwrap_or_else(|_| "[]".to_string())
            }
            OutputFormat::Table => self.table_sets(sets),
            OutputFormat::Markdown => self.markdown_sets(sets),
            OutputFormat::Csv => self.csv_sets(sets),
        }
    }

    // JSON formatting

    fn json_single(&self, card: &NormalizedCard) -> String {
        serde_json::to_string_pretty(card).unwrap_or_else(|_| "{}".to_string())
    }

    fn json_cards(&self, cards: &[NormalizedCard]) -> String {
        serde_json::to_string_pretty(cards).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_single(&self, card: &NormalizedCard) -> String {
        [
            format!("Name:     {}", card.name),
            format!("Set:      {} ({})", card.set_name, card.set_id),
            format!("Rarity:   {}", card.rarity),
            format!("Type:     {}", card.card_type),
            format!("Price:    {}", price_text(card)),
            format!("Released: {}", card.release_date),
            format!("Artist:   {}", card.artist),
            format!("Image:    {}", card.image_large),
        ]
        .join("\n")
    }

    fn table_cards(&self, cards: &[NormalizedCard]) -> String {
        let id_width = 14;
        let name_width = 28;
        let set_width = 24;
        let rarity_width = 18;
        let price_width = 13;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<id_width$}  {:<name_width$}  {:<set_width$}  {:<rarity_width$}  {:>price_width$}",
            "ID", "Name", "Set", "Rarity", "Price"
        ));
        lines.push(format!(
            "{:-<id_width$}  {:-<name_width$}  {:-<set_width$}  {:-<rarity_width$}  {:->price_width$}",
            "", "", "", "", ""
        ));

        for card in cards {
            lines.push(format!(
                "{:<id_width$}  {:<name_width$}  {:<set_width$}  {:<rarity_width$}  {:>price_width$}",
                truncate(&card.id, id_width),
                truncate(&card.name, name_width),
                truncate(&card.set_name, set_width),
                truncate(&card.rarity, rarity_width),
                price_text(card)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} cards", cards.len()));

        lines.join("\n")
    }

    fn table_sets(&self, sets: &[SetSummary]) -> String {
        let mut lines = Vec::new();

        lines.push(format!("{:<12}  {:<36}  {:<10}  {:>5}", "ID", "Name", "Released", "Cards"));
        lines.push(format!("{:-<12}  {:-<36}  {:-<10}  {:->5}", "", "", "", ""));

        for set in sets {
            let total = set.total.map(|t| t.to_string()).unwrap_or_else(|| "?".to_string());
            lines.push(format!(
                "{:<12}  {:<36}  {:<10}  {:>5}",
                set.id,
                truncate(&set.name, 36),
                set.release_date.as_deref().unwrap_or("N/A"),
                total
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} sets", sets.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_single(&self, card: &NormalizedCard) -> String {
        [
            format!("## {}", card.name),
            String::new(),
            format!("![{}]({})", card.name, card.image_large),
            String::new(),
            format!("- **Set:** {} ({})", card.set_name, card.set_id),
            format!("- **Rarity:** {}", card.rarity),
            format!("- **Type:** {}", card.card_type),
            format!("- **Price:** {}", price_text(card)),
            format!("- **Release Date:** {}", card.release_date),
            format!("- **Artist:** {}", card.artist),
        ]
        .join("\n")
    }

    fn markdown_cards(&self, cards: &[NormalizedCard]) -> String {
        let mut lines = Vec::new();

        lines.push("| Name | Set | Rarity | Price | Image |".to_string());
        lines.push("|------|-----|--------|-------|-------|".to_string());

        for card in cards {
            lines.push(format!(
                "| {} | {} | {} | {} | [view]({}) |",
                truncate(&card.name, 40),
                card.set_name,
                card.rarity,
                price_text(card),
                card.image_small
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} cards found*", cards.len()));

        lines.join("\n")
    }

    fn markdown_sets(&self, sets: &[SetSummary]) -> String {
        let mut lines = Vec::new();

        lines.push("| ID | Name | Released | Cards |".to_string());
        lines.push("|----|------|----------|-------|".to_string());

        for set in sets {
            lines.push(format!(
                "| {} | {} | {} | {} |",
                set.id,
                set.name,
                set.release_date.as_deref().unwrap_or("N/A"),
                set.total.map(|t| t.to_string()).unwrap_or_default()
            ));
        }

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header() -> String {
        "id,name,set,set_id,rarity,price,card_type,release_date,artist,image_small,image_large"
            .to_string()
    }

    fn csv_cards(&self, cards: &[NormalizedCard]) -> String {
        let mut lines = Vec::new();
        lines.push(Self::csv_header());

        for card in cards {
            // unpriced cards get an empty price field
            let price = if card.has_price() { card.price.to_string() } else { String::new() };

            lines.push(format!(
                "{},{},{},{},{},{},{},{},{},{},{}",
                Self::csv_escape(&card.id),
                Self::csv_escape(&card.name),
                Self::csv_escape(&card.set_name),
                Self::csv_escape(&card.set_id),
                Self::csv_escape(&card.rarity),
                price,
                Self::csv_escape(&card.card_type),
                Self::csv_escape(&card.release_date),
                Self::csv_escape(&card.artist),
                Self::csv_escape(&card.image_small),
                Self::csv_escape(&card.image_large)
            ));
        }

        lines.join("\n")
    }

    fn csv_sets(&self, sets: &[SetSummary]) -> String {
        let mut lines = vec!["id,name,series,release_date,total".to_string()];

        for set in sets {
            lines.push(format!(
                "{},{},{},{},{}",
                Self::csv_escape(&set.id),
                Self::csv_escape(&set.name),
                Self::csv_escape(set.series.as_deref().unwrap_or_default()),
                Self::csv_escape(set.release_date.as_deref().unwrap_or_default()),
                set.total.map(|t| t.to_string()).unwrap_or_default()
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
