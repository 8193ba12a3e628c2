//! Set listing command.

use crate::catalog::{CatalogClient, CatalogSource};
use crate::config::Config;
use crate::format::Formatter;
use anyhow::{Context, Result};
use tracing::info;

/// Lists every set in the catalog.
pub struct SetsCommand {
    config: Config,
}

impl SetsCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn execute(&self) -> Result<String> {
        let client = CatalogClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client).await
    }

    pub async fn execute_with_client(&self, client: &impl CatalogSource) -> Result<String> {
        let sets = client.fetch_sets().await.context("Failed to fetch sets")?;
        info!("Fetched {} sets", sets.len());

        Ok(Formatter::new(self.config.format).format_sets(&sets))
    }
}
