use super::snapshot::Catalog;
use super::traits::CatalogSource;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Catalog published as a JSON document at a URL
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, Duration::from_secs(30))
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn load(&self) -> Result<Catalog> {
        info!("Fetching catalog from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            warn!("Catalog URL returned status: {}", response.status());
        }
        let response = response.error_for_status()?;

        let json = response.text().await?;
        debug!("Downloaded {} bytes of catalog JSON", json.len());

        Catalog::from_json(&json)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
