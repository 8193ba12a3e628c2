//! HTTP client for the Pokemon TCG catalog API.

use crate::catalog::models::{Envelope, RawCard, SetSummary};
use crate::catalog::query::filter_expression;
use crate::config::Config;
use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;

/// Trait for catalog lookups - enables mocking for tests.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Lists every card set.
    async fn fetch_sets(&self) -> Result<Vec<SetSummary>>;

    /// Searches cards by name and/or set id.
    async fn search_cards(&self, query: Option<&str>, set_id: Option<&str>) -> Result<Vec<RawCard>>;
}

/// Catalog API client.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    page_size: Option<u32>,
}

impl CatalogClient {
    /// Creates a new client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            builder = builder.proxy(wreq::Proxy::all(proxy_url)?);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            page_size: config.page_size,
        })
    }

    /// Builds the `GET /cards` URL for a search.
    fn cards_url(&self, query: Option<&str>, set_id: Option<&str>) -> String {
        let mut params = Vec::new();
        if let Some(expr) = filter_expression(query, set_id) {
            params.push(format!("q={}", urlencoding::encode(&expr)));
        }
        if let Some(size) = self.page_size {
            params.push(format!("pageSize={}", size));
        }

        if params.is_empty() {
            format!("{}/cards", self.base_url)
        } else {
            format!("{}/cards?{}", self.base_url, params.join("&"))
        }
    }

    /// Performs a GET request and returns the body on 2xx.
    async fn get(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let mut request = self.client.get(url).header("Accept", "application/json");
        if let Some(key) = &self.api_key {
            request = request.header("X-Api-Key", key.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Catalog request failed with status {}", status);
            return Err(CatalogError::Http { status: status.as_u16(), body });
        }

        Ok(response.text().await?)
    }

    /// Fetches a list endpoint and decodes each entry of `data`.
    async fn get_list<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        let body = self.get(url).await?;
        decode_list(&body)
    }
}

/// Unwraps the `data` array of a list response.
///
/// A missing `data` field yields an empty list. Entries that do not match
/// `T` (for cards: lacking `name`, `set` or `images`) are skipped.
pub(crate) fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>> {
    let envelope: Envelope = serde_json::from_str(body)?;

    let Some(entries) = envelope.data else {
        warn!("Response has no `data` field, treating as empty");
        return Ok(Vec::new());
    };

    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value(entry) {
            Ok(item) => items.push(item),
            Err(e) => warn!("Skipping malformed record: {}", e),
        }
    }
    Ok(items)
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_sets(&self) -> Result<Vec<SetSummary>> {
        let url = format!("{}/sets", self.base_url);

        info!("Fetching sets");
        self.get_list(&url).await
    }

    async fn search_cards(&self, query: Option<&str>, set_id: Option<&str>) -> Result<Vec<RawCard>> {
        let url = self.cards_url(query, set_id);

        info!("Searching cards: query={:?} set={:?}", query, set_id);
        self.get_list(&url).await
    }
}
