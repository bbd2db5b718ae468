use async_trait::async_trait;

use super::gemini::GeminiClient;
use super::NarrativeProvider;
use crate::models::PromptMode;

/// Text prompt for `name`.
pub fn narrative_prompt(name: &str, mode: PromptMode) -> String {
    match mode {
        PromptMode::Factual => format!(
            "Provide a brief summary of the {}: where it lives, what it eats \
             and what makes it distinctive. Keep it to one short paragraph.",
            name
        ),
        PromptMode::Fanciful => format!(
            "Provide a short humorous made up description of a mythical animal called a {}. \
             Try to include the words goose or horse in the description.",
            name
        ),
    }
}

/// Generates narratives with Gemini's text model.
#[derive(Debug, Clone)]
pub struct GeminiNarrativeClient {
    gemini: GeminiClient,
}

impl GeminiNarrativeClient {
    pub fn new(gemini: GeminiClient) -> Self {
        Self { gemini }
    }
}

#[async_trait]
impl NarrativeProvider for GeminiNarrativeClient {
    async fn generate_narrative(&self, name: &str, mode: PromptMode) -> String {
        let prompt = narrative_prompt(name, mode);

        match self
            .gemini
            .generate(self.gemini.text_model(), &prompt, false)
            .await
        {
            Ok(response) => response.text().unwrap_or_default().trim().to_string(),
            Err(e) => {
                tracing::warn!("Narrative generation for {:?} failed: {}", name, e);
                String::new()
            }
        }
    }
}
