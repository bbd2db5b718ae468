//! Provider contracts and their HTTP implementations.
//!
//! The orchestrator only sees the three traits below. Two families implement them:
//! - direct clients for the upstream services ([`NinjasTaxonomyClient`],
//!   [`GeminiIllustrationClient`], [`GeminiNarrativeClient`])
//! - [`crate::client::CritterdexClient`], which calls a critterdex server's own API

mod gemini;
mod illustration;
mod narrative;
mod taxonomy;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::{IllustrationAsset, PromptMode, TaxonomyRecord};

pub use gemini::GeminiClient;
pub use illustration::{illustration_prompt, GeminiIllustrationClient};
pub use narrative::{narrative_prompt, GeminiNarrativeClient};
pub use taxonomy::NinjasTaxonomyClient;

/// Failure talking to an upstream provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode provider response: {0}")]
    Decode(String),

    #[error("Image generation failed: no candidates returned")]
    NoCandidates,

    #[error("Image generation failed: candidate contained no image data")]
    NoImageData,
}

impl ProviderError {
    /// True when the provider answered with an error status rather than failing in
    /// transport or decoding.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

/// Failure of a taxonomy lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Animal not found")]
    NotFound,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

#[async_trait]
pub trait TaxonomyProvider: Send + Sync {
    /// Look up `name` and return the first matching record.
    async fn fetch_taxonomy(&self, name: &str) -> Result<TaxonomyRecord, LookupError>;
}

#[async_trait]
pub trait IllustrationProvider: Send + Sync {
    /// Generate one image of `name` using the prompt template for `mode`.
    async fn generate_illustration(
        &self,
        name: &str,
        mode: PromptMode,
    ) -> Result<IllustrationAsset, ProviderError>;
}

#[async_trait]
pub trait NarrativeProvider: Send + Sync {
    /// Generate a short description of `name`.
    ///
    /// Best-effort: implementations return an empty string when generation fails.
    async fn generate_narrative(&self, name: &str, mode: PromptMode) -> String;
}

/// The three collaborators the orchestrator and HTTP handlers call.
#[derive(Clone)]
pub struct Providers {
    pub taxonomy: Arc<dyn TaxonomyProvider>,
    pub illustrator: Arc<dyn IllustrationProvider>,
    pub narrator: Arc<dyn NarrativeProvider>,
}

impl Providers {
    pub fn new(
        taxonomy: Arc<dyn TaxonomyProvider>,
        illustrator: Arc<dyn IllustrationProvider>,
        narrator: Arc<dyn NarrativeProvider>,
    ) -> Self {
        Self {
            taxonomy,
            illustrator,
            narrator,
        }
    }

    /// Direct upstream clients built from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ProviderError> {
        let http = build_http_client(config.http_timeout)?;
        let gemini = GeminiClient::new(http.clone(), config.gemini.clone());

        Ok(Self::new(
            Arc::new(NinjasTaxonomyClient::new(http, config.taxonomy.clone())),
            Arc::new(GeminiIllustrationClient::new(gemini.clone())),
            Arc::new(GeminiNarrativeClient::new(gemini)),
        ))
    }
}

/// Shared reqwest client for all direct providers.
pub fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, ProviderError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
