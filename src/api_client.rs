use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Deserialize, Clone)]
pub struct LanguageRecord {
    pub name: String,
    pub code: String,
    #[serde(rename = "nativeName")]
    pub native_name: String,
    #[serde(rename = "deprecatedCodes")]
    pub deprecated_codes: Vec<String>,
}

/// Catalog payload as served by the languages endpoint:
/// `{"_embedded": {"items": [...]}}`.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    #[serde(rename = "_embedded")]
    pub embedded: Embedded,
}

#[derive(Debug, Deserialize)]
pub struct Embedded {
    pub items: Vec<LanguageRecord>,
}

#[derive(Clone)]
pub struct CatalogClient {
    endpoint_url: String,
    client: reqwest::blocking::Client,
}

impl CatalogClient {
    pub fn new(endpoint_url: &str) -> Self {
        Self {
            endpoint_url: endpoint_url.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Fetches the full language catalog and returns its records in
    /// payload order.
    pub fn fetch_languages(&self) -> Result<Vec<LanguageRecord>> {
        debug!(target: "api", "GET {}", self.endpoint_url);

        let response = self
            .client
            .get(&self.endpoint_url)
            .send()
            .with_context(|| format!("request to {} failed", self.endpoint_url))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            return Err(anyhow!("API error ({}): {}", status, error_text));
        }

        let catalog: CatalogResponse = response
            .json()
            .context("response body did not match the expected catalog shape")?;

        info!(target: "api", "fetched {} language records", catalog.embedded.items.len());
        Ok(catalog.embedded.items)
    }
}
