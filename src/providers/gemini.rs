//! Minimal client for Gemini's `generateContent` endpoint.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::ProviderError;
use crate::config::GeminiConfig;

/// Shared by the image and text providers.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

// Gemini API request/response structures

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseModalities")]
    response_modalities: Vec<&'static str>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(rename = "inlineData", default)]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InlineData {
    #[serde(rename = "mimeType", default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub data: String,
}

impl GenerateResponse {
    /// Parts of the first candidate, or `None` when no candidates came back.
    pub(crate) fn first_candidate_parts(&self) -> Option<&[ResponsePart]> {
        self.candidates
            .first()
            .map(|c| c.content.as_ref().map(|c| c.parts.as_slice()).unwrap_or(&[]))
    }

    /// Concatenated text of the first candidate.
    pub(crate) fn text(&self) -> Option<String> {
        let text: String = self
            .first_candidate_parts()?
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        Some(text)
    }
}

impl GeminiClient {
    pub fn new(client: Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    pub fn image_model(&self) -> &str {
        &self.config.image_model
    }

    pub fn text_model(&self) -> &str {
        &self.config.text_model
    }

    fn build_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    /// Send one prompt. `with_image` requests combined text and image output.
    pub(crate) async fn generate(
        &self,
        model: &str,
        prompt: &str,
        with_image: bool,
    ) -> Result<GenerateResponse, ProviderError> {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: with_image.then(|| GenerationConfig {
                response_modalities: vec!["TEXT", "IMAGE"],
            }),
        };

        let response = self
            .client
            .post(self.build_url(model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }
}
