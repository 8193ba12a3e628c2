//! One-shot search command: runs a query through the view controller and renders the view.

use crate::catalog::{CatalogClient, CatalogSource};
use crate::config::Config;
use crate::filters::FilterChainBuilder;
use crate::format::ViewRenderer;
use crate::view::ViewController;
use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Per-invocation search options.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub query: String,
    pub set_id: Option<String>,
    /// 1-based position of the card to open in the detail overlay
    pub open: Option<usize>,
}

/// Executes a card search.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Builds a controller with the configured sort order and filters.
    pub fn controller(config: &Config) -> ViewController {
        let filters = FilterChainBuilder::new()
            .price_range(config.min_price, config.max_price)
            .rarities(config.rarities.clone())
            .build();

        if !filters.is_empty() {
            debug!("{} active filters: {}", filters.len(), filters.descriptions().join(", "));
        }

        ViewController::with_filters(config.sort, filters)
    }

    /// Executes the search and returns the rendered view.
    pub async fn execute(&self, options: &SearchOptions) -> Result<String> {
        let client = CatalogClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, options).await
    }

    /// Executes the search with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl CatalogSource,
        options: &SearchOptions,
    ) -> Result<String> {
        let mut controller = Self::controller(&self.config);
        controller.set_scope(options.set_id.clone());
        controller.search(client, &options.query).await;

        if let Some(position) = options.open {
            let opened = position.checked_sub(1).and_then(|index| controller.select(index));
            if opened.is_none() {
                warn!("No card at position {}", position);
            }
        }

        Ok(ViewRenderer::new(self.config.format).render(controller.state()))
    }
}
