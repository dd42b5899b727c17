use crate::models::catalog::{parse_volumes, CatalogItem};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Status reported to callers when the catalog could not be reached or
/// returned something unreadable.
pub const BAD_GATEWAY: u16 = 502;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog responded with status {0}")]
    Status(u16),
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Status(code) => *code,
            CatalogError::Transport(_) | CatalogError::Decode(_) => BAD_GATEWAY,
        }
    }
}

#[derive(Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl CatalogClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    /// `query` must already be encoded; it is embedded as-is.
    pub fn volumes_url(&self, query: &str) -> String {
        match &self.api_key {
            Some(key) => format!(
                "{}?q={}&key={}",
                self.base_url,
                query,
                url_escape::encode_component(key)
            ),
            None => format!("{}?q={}", self.base_url, query),
        }
    }

    /// One round trip to the catalog. No retries.
    pub async fn fetch(&self, query: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        info!("Querying catalog with q={}", query);

        let response = self.client.get(self.volumes_url(query)).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let items = parse_volumes(&body)?;

        info!("Catalog returned {} usable items", items.len());
        Ok(items)
    }
}
