use chrono::{DateTime, Utc};
use serde::Serialize;

use super::illustration::{IllustrationAsset, PromptMode};
use super::taxonomy::TaxonomyRecord;

/// A trimmed, non-empty animal name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of the taxonomy lookup for one search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found { record: TaxonomyRecord },
    NotFound { query: String },
    TransientError { message: String },
}

impl SearchOutcome {
    /// Prompt family for the dependent calls. `None` when the lookup failed and no
    /// dependent calls are made.
    pub fn prompt_mode(&self) -> Option<PromptMode> {
        match self {
            Self::Found { .. } => Some(PromptMode::Factual),
            Self::NotFound { .. } => Some(PromptMode::Fanciful),
            Self::TransientError { .. } => None,
        }
    }

    /// Name used for the illustration and narrative prompts: the provider-normalized
    /// name when found, otherwise the submitted query. `None` for a found record with
    /// a blank name; callers fall back to the query.
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::Found { record } if !record.name.trim().is_empty() => Some(record.name.trim()),
            Self::Found { .. } => None,
            Self::NotFound { query } => Some(query),
            Self::TransientError { .. } => None,
        }
    }

    pub fn record(&self) -> Option<&TaxonomyRecord> {
        match self {
            Self::Found { record } => Some(record),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Which dependent call a searching session is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStep {
    LookingUp,
    Illustrating,
    Narrating,
}

/// Lifecycle of a search session.
///
/// - `Idle`: No search has started
/// - `Searching`: Waiting on the taxonomy lookup or one of its dependent calls
/// - `Resolved`: Lookup finished (found or not found) and dependent calls have settled
/// - `Failed`: Lookup failed with a provider error; no dependent calls were made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchPhase {
    Idle,
    Searching { step: SearchStep },
    Resolved,
    Failed,
}

impl SearchPhase {
    pub fn is_searching(&self) -> bool {
        matches!(self, Self::Searching { .. })
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Resolved | Self::Failed)
    }
}

/// User-facing message for the presentation layer.
///
/// Kept as a discriminated value so each case gets its own copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// The lookup could not be completed (transport or decode failure).
    ApiError,
    /// The taxonomy provider knows no animal by this name.
    UnknownAnimal { name: String },
    /// The taxonomy provider answered with an error status. Only the status is kept;
    /// the response body stays in the server log.
    ProviderError { status: u16 },
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Self::ApiError => "API error".to_string(),
            Self::UnknownAnimal { name } => format!(
                "We couldn't find an animal called \"{}\", so we imagined one instead.",
                name
            ),
            Self::ProviderError { status } => format!(
                "The taxonomy service is unavailable (HTTP {}). Please try again later.",
                status
            ),
        }
    }

    /// True for the failure cases that end a search.
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::UnknownAnimal { .. })
    }
}

/// State of the current search.
///
/// Sessions are **ephemeral**: starting a new search replaces the whole session.
/// `sequence` increases with every search; updates carrying an older sequence are
/// discarded by the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchSession {
    pub sequence: u64,
    pub query: Option<SearchQuery>,
    pub phase: SearchPhase,
    pub outcome: Option<SearchOutcome>,
    pub illustration: Option<IllustrationAsset>,
    pub narrative: Option<String>,
    pub notice: Option<Notice>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::idle()
    }
}

impl SearchSession {
    pub fn idle() -> Self {
        Self {
            sequence: 0,
            query: None,
            phase: SearchPhase::Idle,
            outcome: None,
            illustration: None,
            narrative: None,
            notice: None,
            started_at: None,
            completed_at: None,
        }
    }

    /// A fresh session for `query`, waiting on the taxonomy lookup.
    pub fn started(sequence: u64, query: SearchQuery) -> Self {
        Self {
            sequence,
            query: Some(query),
            phase: SearchPhase::Searching {
                step: SearchStep::LookingUp,
            },
            started_at: Some(Utc::now()),
            ..Self::idle()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_searching()
    }

    pub fn step(&self) -> Option<SearchStep> {
        match self.phase {
            SearchPhase::Searching { step } => Some(step),
            _ => None,
        }
    }

    pub fn record(&self) -> Option<&TaxonomyRecord> {
        self.outcome.as_ref().and_then(SearchOutcome::record)
    }

    pub(crate) fn enter_step(&mut self, step: SearchStep) {
        self.phase = SearchPhase::Searching { step };
    }

    pub(crate) fn finish(&mut self, phase: SearchPhase) {
        self.phase = phase;
        self.completed_at = Some(Utc::now());
    }
}
