//! Non-interactive demo: list sets, then show sample searches.

use crate::catalog::{CatalogClient, CatalogSource, RawCard};
use crate::config::{Config, OutputFormat};
use crate::format::Formatter;
use crate::normalize::{normalize_all, variant_markets};
use crate::sort::sort_cards;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::Write;
use tracing::{error, info};

/// Prints the set list followed by results for the demo query and for the first set.
///
/// Fetch failures are logged and reported inline; they never fail the command.
pub struct DemoCommand {
    config: Config,
}

impl DemoCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn execute(&self, out: &mut impl Write) -> Result<()> {
        let client = CatalogClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, out).await
    }

    /// Runs the demo with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl CatalogSource,
        out: &mut impl Write,
    ) -> Result<()> {
        let formatter = Formatter::new(self.config.format);

        writeln!(out, "Pokemon TCG API Demo")?;
        writeln!(out, "====================")?;

        writeln!(out, "\nFetching card sets...")?;
        let sets = match client.fetch_sets().await {
            Ok(sets) => {
                writeln!(out, "{}", formatter.format_sets(&sets))?;
                sets
            }
            Err(e) => {
                error!("Failed to fetch sets: {}", e);
                writeln!(out, "Could not fetch sets: {}", e)?;
                Vec::new()
            }
        };

        let query = self.config.demo_query.as_str();
        writeln!(out, "\nSearching for \"{}\" cards...", query)?;
        self.print_search(client, Some(query), None, &formatter, out).await?;

        if let Some(first) = sets.first() {
            writeln!(out, "\nSearching for cards in the {} set...", first.name)?;
            self.print_search(client, None, Some(&first.id), &formatter, out).await?;
        }

        writeln!(out, "\n--- Demo finished ---")?;
        info!("Demo finished");
        Ok(())
    }

    async fn print_search(
        &self,
        client: &impl CatalogSource,
        query: Option<&str>,
        set_id: Option<&str>,
        formatter: &Formatter,
        out: &mut impl Write,
    ) -> Result<()> {
        match client.search_cards(query, set_id).await {
            Ok(raw) => {
                let mut cards = normalize_all(&raw);
                sort_cards(&mut cards, self.config.sort);
                writeln!(out, "{}", formatter.format_cards(&cards))?;

                if self.config.format == OutputFormat::Table && !cards.is_empty() {
                    let by_id: HashMap<&str, &RawCard> =
                        raw.iter().map(|card| (card.id.as_str(), card)).collect();

                    writeln!(out, "\nMarket prices:")?;
                    for card in cards.iter().filter_map(|c| by_id.get(c.id.as_str())) {
                        writeln!(out, "{}", market_lines(card).join("\n"))?;
                    }
                }
            }
            Err(e) => {
                error!("Card search failed: {}", e);
                writeln!(out, "Could not search cards: {}", e)?;
            }
        }
        Ok(())
    }
}

/// Per-card market listing: Cardmarket average and every TCGplayer variant.
fn market_lines(card: &RawCard) -> Vec<String> {
    let mut lines = vec![
        format!("- {} ({})", card.name, card.id),
        format!("  Set: {} ({})", card.set.name, card.set.id),
    ];

    if let Some(prices) = card.cardmarket.as_ref().and_then(|c| c.prices.as_ref()) {
        let average = prices
            .average_sell_price
            .map(|p| format!("\u{20ac}{:.2}", p))
            .unwrap_or_else(|| "N/A".to_string());
        lines.push(format!("  Price (CardMarket): {}", average));
    }

    if let Some(prices) = card.tcgplayer.as_ref().and_then(|t| t.prices.as_ref()) {
        if !prices.is_empty() {
            lines.push("  TCGPlayer Prices:".to_string());
            for (variant, market) in variant_markets(prices) {
                let market = market.map(|m| format!("${:.2}", m)).unwrap_or_else(|| "N/A".to_string());
                lines.push(format!("    - {}: {}", variant, market));
            }
        }
    }

    lines
}
