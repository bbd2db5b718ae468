//! API Ninjas animal lookup.

use async_trait::async_trait;
use reqwest::Client;

use super::{LookupError, ProviderError, TaxonomyProvider};
use crate::config::TaxonomyConfig;
use crate::models::TaxonomyRecord;

#[derive(Debug, Clone)]
pub struct NinjasTaxonomyClient {
    client: Client,
    config: TaxonomyConfig,
}

impl NinjasTaxonomyClient {
    pub fn new(client: Client, config: TaxonomyConfig) -> Self {
        Self { client, config }
    }

    fn animals_url(&self) -> String {
        format!("{}/animals", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TaxonomyProvider for NinjasTaxonomyClient {
    async fn fetch_taxonomy(&self, name: &str) -> Result<TaxonomyRecord, LookupError> {
        let response = self
            .client
            .get(self.animals_url())
            .query(&[("name", name)])
            .header("X-Api-Key", &self.config.api_key)
            .send()
            .await
            .map_err(ProviderError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Taxonomy lookup for {:?} failed with {}", name, status);
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let records: Vec<TaxonomyRecord> = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        tracing::debug!("Taxonomy lookup for {:?} returned {} records", name, records.len());
        records.into_iter().next().ok_or(LookupError::NotFound)
    }
}
