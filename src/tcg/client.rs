//! Catalog client: one request per call, no retries, no caching

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::tcg::envelope::decode_list;
use crate::tcg::models::{CatalogCard, CatalogSet};
use crate::tcg::Provider;
use crate::utils::http::build_client;
use reqwest::Url;

const RAPIDAPI_KEY_HEADER: &str = "X-RapidAPI-Key";
const RAPIDAPI_HOST_HEADER: &str = "X-RapidAPI-Host";

struct RapidApiAuth {
    key: String,
    host: String,
}

/// Client over whichever provider was selected at construction
pub struct CatalogClient {
    http: reqwest::Client,
    provider: Provider,
    base_url: String,
    auth: Option<RapidApiAuth>,
}

impl CatalogClient {
    /// Select the provider from `config` and build the HTTP client.
    ///
    /// A non-blank alternate key selects the alternate provider for the whole
    /// lifetime of the client; later configuration changes are not observed.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let auth = config.alternate_key().map(|key| RapidApiAuth {
            key: key.to_string(),
            host: config.alternate_host.clone(),
        });

        let (provider, base_url) = match auth {
            Some(_) => (Provider::Alternate, config.alternate_base_url()),
            None => (Provider::Primary, config.primary_base_url()),
        };

        log::info!("Using {} catalog at {}", provider, base_url);

        Ok(Self {
            http: build_client()?,
            provider,
            base_url,
            auth,
        })
    }

    /// Build from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(CatalogConfig::from_env())
    }

    /// Point the client at another base URL (mock servers, mirrors)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List every set the provider knows
    pub async fn list_sets(&self) -> Result<Vec<CatalogSet>> {
        let body = self.get(Provider::SETS_PATH).await?;
        let sets: Vec<CatalogSet> = decode_list(&body)?;
        log::info!("Fetched {} sets", sets.len());
        Ok(sets)
    }

    /// List the cards of one set, dropping cards without an image
    pub async fn list_cards(&self, set_id: &str) -> Result<Vec<CatalogCard>> {
        let body = self.get(&self.provider.set_cards_path(set_id)).await?;
        let cards = with_images(decode_list(&body)?);
        log::info!("Fetched {} cards for set {}", cards.len(), set_id);
        Ok(cards)
    }

    /// Search cards by name, dropping cards without an image
    pub async fn search_cards(&self, query: &str) -> Result<Vec<CatalogCard>> {
        let body = self
            .get(&self.provider.search_path(query))
            .await
            .map_err(|e| match e {
                CatalogError::InvalidRequest(reason) => CatalogError::InvalidQuery(reason),
                other => other,
            })?;
        let cards = with_images(decode_list(&body)?);
        log::info!("Search {:?} returned {} cards", query, cards.len());
        Ok(cards)
    }

    /// Display price of the top search hit for `name` and `number`
    pub async fn resolve_price(&self, name: &str, number: &str) -> Result<f64> {
        let query = format!("{} {}", name.trim(), number.trim())
            .trim()
            .to_string();

        let cards = self.search_cards(&query).await?;
        cards
            .first()
            .and_then(CatalogCard::market_price)
            .ok_or(CatalogError::NoPriceAvailable { query })
    }

    async fn get(&self, path_and_query: &str) -> Result<Vec<u8>> {
        let raw = format!("{}{}", self.base_url.trim_end_matches('/'), path_and_query);
        let url =
            Url::parse(&raw).map_err(|e| CatalogError::InvalidRequest(format!("{}: {}", raw, e)))?;

        log::debug!("GET {}", url);

        let mut request = self.http.get(url).header("Accept", "application/json");
        if let Some(auth) = &self.auth {
            request = request
                .header(RAPIDAPI_KEY_HEADER, &auth.key)
                .header(RAPIDAPI_HOST_HEADER, &auth.host);
        }

        let response = request.send().await?.error_for_status()?;
        log::debug!("Response status: {}", response.status());

        Ok(response.bytes().await?.to_vec())
    }
}

fn with_images(cards: Vec<CatalogCard>) -> Vec<CatalogCard> {
    let total = cards.len();
    let kept: Vec<CatalogCard> = cards.into_iter().filter(|c| c.image.is_some()).collect();
    if kept.len() < total {
        log::warn!("Dropped {} cards without an image", total - kept.len());
    }
    kept
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
