//! Runtime configuration loaded from environment variables.
//!
//! Provider credentials are only ever read from the environment:
//! - `API_NINJAS_API_KEY` - taxonomy provider key
//! - `GEMINI_API_KEY` - image and text model key

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_TAXONOMY_URL: &str = "https://api.api-ninjas.com/v1";
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.0-flash-exp-image-generation";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";
/// Static files served under `/images`.
pub const DEFAULT_ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// What the orchestrator does for the narrative when the lookup found the animal.
///
/// - `Embedded`: use the record's inline summary if the server attached one; never call
/// - `Always`: use the inline summary, or ask the narrative provider for a factual one
/// - `Never`: leave the narrative empty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NarrativePolicy {
    Never,
    #[default]
    Embedded,
    Always,
}

impl NarrativePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Embedded => "embedded",
            Self::Always => "always",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" => Some(Self::Never),
            "embedded" => Some(Self::Embedded),
            "always" => Some(Self::Always),
            _ => None,
        }
    }
}

/// Settings for the API Ninjas taxonomy client.
#[derive(Debug, Clone)]
pub struct TaxonomyConfig {
    pub api_key: String,
    pub base_url: String,
}

/// Settings for the Gemini image and text clients.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub image_model: String,
    pub text_model: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_GEMINI_URL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub taxonomy: TaxonomyConfig,
    pub gemini: GeminiConfig,
    pub narrative_policy: NarrativePolicy,
    /// Attach a factual summary to `/api/animal` responses.
    pub inline_summary: bool,
    /// Optional timeout for outbound provider requests.
    pub http_timeout: Option<Duration>,
    /// Root of the static assets directory.
    pub assets_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(var))
        };
        let optional = |var: &str, default: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let taxonomy = TaxonomyConfig {
            api_key: required("API_NINJAS_API_KEY")?,
            base_url: optional("CRITTERDEX_TAXONOMY_URL", DEFAULT_TAXONOMY_URL),
        };

        let gemini = GeminiConfig {
            api_key: required("GEMINI_API_KEY")?,
            base_url: optional("CRITTERDEX_GEMINI_URL", DEFAULT_GEMINI_URL),
            image_model: optional("CRITTERDEX_IMAGE_MODEL", DEFAULT_IMAGE_MODEL),
            text_model: optional("CRITTERDEX_TEXT_MODEL", DEFAULT_TEXT_MODEL),
        };

        let narrative_policy = match lookup("CRITTERDEX_SUCCESS_NARRATIVE") {
            Some(value) => {
                NarrativePolicy::from_str(&value).ok_or(ConfigError::Invalid {
                    var: "CRITTERDEX_SUCCESS_NARRATIVE",
                    value,
                })?
            }
            None => NarrativePolicy::default(),
        };

        let inline_summary = match lookup("CRITTERDEX_INLINE_SUMMARY") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
                var: "CRITTERDEX_INLINE_SUMMARY",
                value,
            })?,
            None => false,
        };

        let http_timeout = match lookup("CRITTERDEX_HTTP_TIMEOUT_SECS") {
            Some(value) => {
                let secs = value.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                    var: "CRITTERDEX_HTTP_TIMEOUT_SECS",
                    value: value.clone(),
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let assets_dir = PathBuf::from(optional("CRITTERDEX_ASSETS_DIR", DEFAULT_ASSETS_DIR));

        Ok(Self {
            taxonomy,
            gemini,
            narrative_policy,
            inline_summary,
            http_timeout,
            assets_dir,
        })
    }
}

/// Base URL of a remote critterdex server, from `CRITTERDEX_URL`.
pub fn remote_url_from_env() -> Option<String> {
    std::env::var("CRITTERDEX_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
