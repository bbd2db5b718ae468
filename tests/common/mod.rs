#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use critterdex::models::*;
use critterdex::providers::*;
use tokio::sync::Notify;

/// Every call the fake providers received, in order.
#[derive(Debug, Default, Clone)]
pub struct Calls {
    pub taxonomy: Vec<String>,
    pub illustration: Vec<(String, PromptMode)>,
    pub narrative: Vec<(String, PromptMode)>,
}

impl Calls {
    pub fn total(&self) -> usize {
        self.taxonomy.len() + self.illustration.len() + self.narrative.len()
    }
}

#[derive(Debug, Clone, Copy)]
pub enum TaxonomyFailure {
    /// Provider answered with this status.
    Status(u16),
    /// Provider response could not be read.
    Transport,
}

/// Holds a lookup for `name` until `release` is notified; signals `started` first.
pub struct Gate {
    pub name: String,
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl Gate {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }

    /// Handles for the test body: (started, release).
    pub fn handles(&self) -> (Arc<Notify>, Arc<Notify>) {
        (self.started.clone(), self.release.clone())
    }

    async fn pass(&self, name: &str) {
        if self.name == name {
            self.started.notify_one();
            self.release.notified().await;
        }
    }
}

/// In-memory stand-in for all three providers.
pub struct FakeProviders {
    pub calls: Arc<Mutex<Calls>>,
    records: HashMap<String, TaxonomyRecord>,
    taxonomy_failure: Option<TaxonomyFailure>,
    illustration_fails: bool,
    narrative: String,
    gate: Option<Gate>,
    illustration_gate: Option<Gate>,
}

impl FakeProviders {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Calls::default())),
            records: HashMap::new(),
            taxonomy_failure: None,
            illustration_fails: false,
            narrative: "A goose with the legs of a horse.".to_string(),
            gate: None,
            illustration_gate: None,
        }
    }

    /// Register a record, found by its lowercase name.
    pub fn with_animal(mut self, record: TaxonomyRecord) -> Self {
        self.records.insert(record.name.to_lowercase(), record);
        self
    }

    /// Register a record under an explicit lookup key.
    pub fn with_animal_as(mut self, key: &str, record: TaxonomyRecord) -> Self {
        self.records.insert(key.to_lowercase(), record);
        self
    }

    pub fn failing_taxonomy(mut self, failure: TaxonomyFailure) -> Self {
        self.taxonomy_failure = Some(failure);
        self
    }

    pub fn failing_illustrations(mut self) -> Self {
        self.illustration_fails = true;
        self
    }

    /// Text returned by every narrative call. Empty simulates a swallowed failure.
    pub fn with_narrative(mut self, text: &str) -> Self {
        self.narrative = text.to_string();
        self
    }

    pub fn gated(mut self, gate: Gate) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn gated_illustration(mut self, gate: Gate) -> Self {
        self.illustration_gate = Some(gate);
        self
    }

    /// Wrap for use by the orchestrator or router; returns the call log too.
    pub fn build(self) -> (Providers, Arc<Mutex<Calls>>) {
        let calls = self.calls.clone();
        let shared = Arc::new(self);
        (Providers::new(shared.clone(), shared.clone(), shared), calls)
    }
}

#[async_trait]
impl TaxonomyProvider for FakeProviders {
    async fn fetch_taxonomy(&self, name: &str) -> Result<TaxonomyRecord, LookupError> {
        self.calls.lock().unwrap().taxonomy.push(name.to_string());

        if let Some(gate) = &self.gate {
            gate.pass(name).await;
        }

        match self.taxonomy_failure {
            Some(TaxonomyFailure::Status(status)) => {
                return Err(ProviderError::Status {
                    status,
                    body: "upstream exploded".to_string(),
                }
                .into())
            }
            Some(TaxonomyFailure::Transport) => {
                return Err(ProviderError::Decode("connection reset".to_string()).into())
            }
            None => {}
        }

        self.records
            .get(&name.to_lowercase())
            .cloned()
            .ok_or(LookupError::NotFound)
    }
}

#[async_trait]
impl IllustrationProvider for FakeProviders {
    async fn generate_illustration(
        &self,
        name: &str,
        mode: PromptMode,
    ) -> Result<IllustrationAsset, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .illustration
            .push((name.to_string(), mode));

        if let Some(gate) = &self.illustration_gate {
            gate.pass(name).await;
        }

        if self.illustration_fails {
            Err(ProviderError::NoImageData)
        } else {
            Ok(IllustrationAsset::new(vec![0x89, b'P', b'N', b'G'], mode))
        }
    }
}

#[async_trait]
impl NarrativeProvider for FakeProviders {
    async fn generate_narrative(&self, name: &str, mode: PromptMode) -> String {
        self.calls
            .lock()
            .unwrap()
            .narrative
            .push((name.to_string(), mode));
        self.narrative.clone()
    }
}

pub fn taxonomy_record(name: &str) -> TaxonomyRecord {
    TaxonomyRecord {
        name: name.to_string(),
        taxonomy: Taxonomy {
            kingdom: "Animalia".to_string(),
            phylum: "Chordata".to_string(),
            class: "Mammalia".to_string(),
            order: "Carnivora".to_string(),
            family: "Felidae".to_string(),
            genus: "Panthera".to_string(),
            scientific_name: Some("Panthera leo".to_string()),
        },
        locations: vec!["Africa".to_string(), "Asia".to_string()],
        characteristics: BTreeMap::from([
            ("diet".to_string(), "Carnivore".to_string()),
            ("lifespan".to_string(), "8 - 15 years".to_string()),
        ]),
        summary: None,
    }
}

pub fn lion() -> TaxonomyRecord {
    taxonomy_record("Lion")
}
