//! HTTP client for a critterdex server's own API.
//!
//! Implements the provider traits against `/api/animal*`, so the orchestrator can run
//! against a remote server the same way it runs against the upstream services.
//! Configuration is via environment variable:
//! - `CRITTERDEX_URL` - Base URL (default: `http://localhost:3000`)

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::models::{IllustrationAsset, PromptMode, TaxonomyRecord, DEFAULT_IMAGE_MIME};
use crate::providers::{
    IllustrationProvider, LookupError, NarrativeProvider, ProviderError, Providers,
    TaxonomyProvider,
};

/// Default URL for local development.
const DEFAULT_URL: &str = "http://localhost:3000";

/// HTTP client for the critterdex API.
#[derive(Debug, Clone)]
pub struct CritterdexClient {
    base_url: String,
    client: Client,
}

impl CritterdexClient {
    /// Create client from `CRITTERDEX_URL`.
    pub fn from_env() -> Self {
        Self::new(crate::config::remote_url_from_env().unwrap_or_else(|| DEFAULT_URL.to_string()))
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Use this client for all three provider roles.
    pub fn into_providers(self) -> Providers {
        let shared = std::sync::Arc::new(self);
        Providers::new(shared.clone(), shared.clone(), shared)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(format!("{}{}", self.base_url, path))
    }

    /// Convert an error status into a ProviderError.
    async fn status_error(response: reqwest::Response) -> ProviderError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        ProviderError::Status {
            status: status.as_u16(),
            body,
        }
    }
}

#[async_trait]
impl TaxonomyProvider for CritterdexClient {
    async fn fetch_taxonomy(&self, name: &str) -> Result<TaxonomyRecord, LookupError> {
        let response = self
            .get("/api/animal")
            .query(&[("animalName", name)])
            .send()
            .await
            .map_err(ProviderError::from)?;

        match response.status() {
            status if status.is_success() => response
                .json()
                .await
                .map_err(|e| LookupError::Provider(ProviderError::Decode(e.to_string()))),
            StatusCode::NOT_FOUND => Err(LookupError::NotFound),
            _ => Err(Self::status_error(response).await.into()),
        }
    }
}

#[async_trait]
impl IllustrationProvider for CritterdexClient {
    async fn generate_illustration(
        &self,
        name: &str,
        mode: PromptMode,
    ) -> Result<IllustrationAsset, ProviderError> {
        let is_real_animal = if mode.is_real_animal() { "true" } else { "false" };
        let response = self
            .get("/api/animal/image")
            .query(&[("animalName", name), ("isRealAnimal", is_real_animal)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_IMAGE_MIME)
            .to_string();
        let bytes = response.bytes().await?;
        Ok(IllustrationAsset::new(bytes.to_vec(), mode).with_mime_type(mime_type))
    }
}

#[async_trait]
impl NarrativeProvider for CritterdexClient {
    async fn generate_narrative(&self, name: &str, mode: PromptMode) -> String {
        let result: Result<String, ProviderError> = async {
            let response = self
                .get("/api/animal/summary")
                .query(&[("animalName", name), ("mode", mode.as_str())])
                .send()
                .await?;
            if !response.status().is_success() {
                return Err(Self::status_error(response).await);
            }
            response
                .json::<String>()
                .await
                .map_err(|e| ProviderError::Decode(e.to_string()))
        }
        .await;

        result.unwrap_or_else(|e| {
            tracing::warn!("Remote narrative for {:?} failed: {}", name, e);
            String::new()
        })
    }
}
