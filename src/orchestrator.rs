//! Lookup orchestration.
//!
//! One search runs three sequential calls: taxonomy lookup, then illustration, then
//! narrative. The lookup outcome picks the [`PromptMode`] for the other two:
//!
//! ```text
//! Idle ─▶ Searching{LookingUp} ─┬─▶ Failed                          (provider error)
//!                               └─▶ Searching{Illustrating}
//!                                     ─▶ Searching{Narrating} ─▶ Resolved
//! ```
//!
//! State lives in a [`watch`] channel so observers see each stage as it lands. Every
//! search bumps the session's sequence number; updates from a superseded search are
//! dropped and that search stops issuing calls.

use tokio::sync::watch;

use crate::config::NarrativePolicy;
use crate::models::*;
use crate::providers::{LookupError, ProviderError, Providers};

pub struct LookupOrchestrator {
    providers: Providers,
    policy: NarrativePolicy,
    state: watch::Sender<SearchSession>,
}

impl LookupOrchestrator {
    pub fn new(providers: Providers, policy: NarrativePolicy) -> Self {
        let (state, _) = watch::channel(SearchSession::idle());
        Self {
            providers,
            policy,
            state,
        }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> SearchSession {
        self.state.borrow().clone()
    }

    /// Receiver that observes every session update.
    pub fn subscribe(&self) -> watch::Receiver<SearchSession> {
        self.state.subscribe()
    }

    pub fn policy(&self) -> NarrativePolicy {
        self.policy
    }

    /// Run one search to completion and return the session as it stands afterwards.
    ///
    /// Blank input is ignored: no calls are made and the session is left untouched.
    pub async fn run_search(&self, input: &str) -> SearchSession {
        let Some(query) = SearchQuery::parse(input) else {
            tracing::debug!("Ignoring blank search");
            return self.session();
        };

        let sequence = self.begin(query.clone());
        tracing::info!("Search #{} started for {:?}", sequence, query.as_str());

        let outcome = match self.providers.taxonomy.fetch_taxonomy(query.as_str()).await {
            Ok(record) => SearchOutcome::Found { record },
            Err(LookupError::NotFound) => SearchOutcome::NotFound {
                query: query.as_str().to_string(),
            },
            Err(LookupError::Provider(e)) => {
                self.fail(sequence, &e);
                return self.session();
            }
        };

        let Some(mode) = outcome.prompt_mode() else {
            return self.session();
        };
        let subject = outcome.subject().unwrap_or(query.as_str()).to_string();
        let embedded = outcome
            .record()
            .and_then(TaxonomyRecord::embedded_summary)
            .map(str::to_string);

        let notice = outcome.is_not_found().then(|| Notice::UnknownAnimal {
            name: query.as_str().to_string(),
        });
        if !self.apply(sequence, |s| {
            s.outcome = Some(outcome);
            s.notice = notice;
            s.enter_step(SearchStep::Illustrating);
        }) {
            return self.session();
        }

        if !self.illustrate(sequence, &subject, mode).await {
            return self.session();
        }
        if !self.narrate(sequence, &subject, mode, embedded).await {
            return self.session();
        }

        self.apply(sequence, |s| s.finish(SearchPhase::Resolved));
        tracing::info!("Search #{} resolved", sequence);
        self.session()
    }

    /// Replace the session with a fresh one and return its sequence number.
    fn begin(&self, query: SearchQuery) -> u64 {
        let mut sequence = 0;
        self.state.send_modify(|s| {
            sequence = s.sequence + 1;
            *s = SearchSession::started(sequence, query);
        });
        sequence
    }

    /// Apply `update` if `sequence` is still the current search.
    fn apply(&self, sequence: u64, update: impl FnOnce(&mut SearchSession)) -> bool {
        let applied = self.state.send_if_modified(|s| {
            if s.sequence == sequence {
                update(s);
                true
            } else {
                false
            }
        });
        if !applied {
            tracing::debug!("Search #{} superseded, dropping update", sequence);
        }
        applied
    }

    fn fail(&self, sequence: u64, error: &ProviderError) {
        tracing::error!("Search #{} taxonomy lookup failed: {}", sequence, error);

        let notice = match error {
            ProviderError::Status { status, .. } => Notice::ProviderError { status: *status },
            _ => Notice::ApiError,
        };
        self.apply(sequence, |s| {
            s.outcome = Some(SearchOutcome::TransientError {
                message: notice.message(),
            });
            s.notice = Some(notice);
            s.finish(SearchPhase::Failed);
        });
    }

    /// Returns false when the search was superseded.
    async fn illustrate(&self, sequence: u64, subject: &str, mode: PromptMode) -> bool {
        match self
            .providers
            .illustrator
            .generate_illustration(subject, mode)
            .await
        {
            Ok(asset) => self.apply(sequence, |s| {
                s.illustration = Some(asset);
                s.enter_step(SearchStep::Narrating);
            }),
            Err(e) => {
                tracing::warn!("Search #{} illustration unavailable: {}", sequence, e);
                self.apply(sequence, |s| s.enter_step(SearchStep::Narrating))
            }
        }
    }

    /// Returns false when the search was superseded.
    async fn narrate(
        &self,
        sequence: u64,
        subject: &str,
        mode: PromptMode,
        embedded: Option<String>,
    ) -> bool {
        let narrative = match (mode, self.policy) {
            (PromptMode::Fanciful, _) => Some(self.call_narrator(subject, mode).await),
            (PromptMode::Factual, NarrativePolicy::Never) => None,
            (PromptMode::Factual, NarrativePolicy::Embedded) => embedded,
            (PromptMode::Factual, NarrativePolicy::Always) => match embedded {
                Some(summary) => Some(summary),
                None => Some(self.call_narrator(subject, mode).await),
            },
        };

        let narrative = narrative.filter(|n| !n.trim().is_empty());
        self.apply(sequence, |s| s.narrative = narrative)
    }

    async fn call_narrator(&self, subject: &str, mode: PromptMode) -> String {
        self.providers.narrator.generate_narrative(subject, mode).await
    }
}
