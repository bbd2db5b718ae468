pub mod pages;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{ApiError, AppState};
use crate::models::{PromptMode, TaxonomyRecord};
use crate::providers::LookupError;

/// Query parameters shared by the `/api/animal*` endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct AnimalQuery {
    #[serde(rename = "animalName")]
    pub animal_name: Option<String>,
    #[serde(rename = "isRealAnimal")]
    pub is_real_animal: Option<String>,
    pub mode: Option<String>,
}

impl AnimalQuery {
    /// The trimmed animal name, or `MissingName` when absent or blank.
    fn name(&self) -> Result<&str, ApiError> {
        self.animal_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(ApiError::MissingName)
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Taxonomy
// ============================================================

pub async fn get_animal(
    State(state): State<AppState>,
    Query(query): Query<AnimalQuery>,
) -> Result<Json<TaxonomyRecord>, ApiError> {
    let name = query.name()?;

    let mut record = match state.providers.taxonomy.fetch_taxonomy(name).await {
        Ok(record) => record,
        Err(LookupError::NotFound) => return Err(ApiError::NotFound),
        Err(LookupError::Provider(e)) => return Err(ApiError::internal(e)),
    };

    if state.inline_summary && record.embedded_summary().is_none() {
        let summary = state
            .providers
            .narrator
            .generate_narrative(&record.name, PromptMode::Factual)
            .await;
        record.summary = Some(summary).filter(|s| !s.trim().is_empty());
    }

    Ok(Json(record))
}

// ============================================================
// Generated content
// ============================================================

pub async fn get_animal_image(
    State(state): State<AppState>,
    Query(query): Query<AnimalQuery>,
) -> Result<Response, ApiError> {
    let name = query.name()?;
    let mode = PromptMode::from_is_real_animal(query.is_real_animal.as_deref());

    let asset = state
        .providers
        .illustrator
        .generate_illustration(name, mode)
        .await
        .map_err(|e| {
            tracing::warn!("Image generation for {:?} failed: {}", name, e);
            ApiError::GenerationFailed
        })?;

    let disposition = format!("inline; filename=\"{}.png\"", header_safe_filename(name));
    Ok((
        [
            (header::CONTENT_TYPE, asset.mime_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        asset.bytes,
    )
        .into_response())
}

pub async fn get_animal_summary(
    State(state): State<AppState>,
    Query(query): Query<AnimalQuery>,
) -> Result<Json<String>, ApiError> {
    let name = query.name()?;
    let mode = match query.mode.as_deref().and_then(PromptMode::from_str) {
        Some(PromptMode::Factual) => PromptMode::Factual,
        _ => PromptMode::Fanciful,
    };

    let summary = state.providers.narrator.generate_narrative(name, mode).await;
    Ok(Json(summary))
}

/// Keep a filename usable inside a quoted header parameter.
fn header_safe_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c == ' ' || c.is_ascii_graphic() => c,
            _ => '_',
        })
        .collect()
}
