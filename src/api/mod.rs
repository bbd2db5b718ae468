mod error;
mod handlers;

use std::path::PathBuf;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub use error::ApiError;

use crate::config::{AppConfig, NarrativePolicy, DEFAULT_ASSETS_DIR};
use crate::providers::Providers;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub providers: Providers,
    /// Success-path narrative behaviour for searches run by the HTML page.
    pub narrative_policy: NarrativePolicy,
    /// Attach a factual summary to `/api/animal` responses.
    pub inline_summary: bool,
    /// Its `images/` subdirectory is served under `/images`.
    pub assets_dir: PathBuf,
}

impl AppState {
    pub fn new(providers: Providers) -> Self {
        Self {
            providers,
            narrative_policy: NarrativePolicy::default(),
            inline_summary: false,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }

    pub fn from_config(config: &AppConfig, providers: Providers) -> Self {
        Self {
            providers,
            narrative_policy: config.narrative_policy,
            inline_summary: config.inline_summary,
            assets_dir: config.assets_dir.clone(),
        }
    }

    pub fn with_narrative_policy(mut self, policy: NarrativePolicy) -> Self {
        self.narrative_policy = policy;
        self
    }

    pub fn with_inline_summary(mut self, enabled: bool) -> Self {
        self.inline_summary = enabled;
        self
    }

    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Taxonomy
        .route("/animal", get(handlers::get_animal))
        // Generated content
        .route("/animal/image", get(handlers::get_animal_image))
        .route("/animal/summary", get(handlers::get_animal_summary));

    Router::new()
        .nest("/api", api)
        // Pages
        .route("/", get(handlers::pages::home))
        .route("/kingdom/{kingdom}", get(handlers::pages::kingdom))
        .route("/phylum/{phylum}", get(handlers::pages::phylum))
        .route("/class/{class}", get(handlers::pages::class))
        // Static images (continent badges)
        .nest_service("/images", ServeDir::new(state.assets_dir.join("images")))
        // Health
        .route("/health", get(handlers::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
