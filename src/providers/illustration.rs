use async_trait::async_trait;

use super::gemini::{GeminiClient, GenerateResponse};
use super::{IllustrationProvider, ProviderError};
use crate::models::{decode_image, IllustrationAsset, PromptMode};

/// Image prompt for `name`.
pub fn illustration_prompt(name: &str, mode: PromptMode) -> String {
    match mode {
        PromptMode::Factual => {
            format!("Create a realistic image of a {} in its natural habitat.", name)
        }
        PromptMode::Fanciful => format!(
            "Create a colourful cartoon image of a mythical animal called a {}. \
             It should look impossible, like a creature that could never exist in nature.",
            name
        ),
    }
}

/// Generates illustrations with Gemini's image model.
#[derive(Debug, Clone)]
pub struct GeminiIllustrationClient {
    gemini: GeminiClient,
}

impl GeminiIllustrationClient {
    pub fn new(gemini: GeminiClient) -> Self {
        Self { gemini }
    }
}

#[async_trait]
impl IllustrationProvider for GeminiIllustrationClient {
    async fn generate_illustration(
        &self,
        name: &str,
        mode: PromptMode,
    ) -> Result<IllustrationAsset, ProviderError> {
        let prompt = illustration_prompt(name, mode);
        tracing::debug!("Requesting {} illustration: {}", mode.as_str(), prompt);

        let response = self
            .gemini
            .generate(self.gemini.image_model(), &prompt, true)
            .await?;

        extract_image(&response, mode)
    }
}

/// Pull the first inline image out of a response.
fn extract_image(
    response: &GenerateResponse,
    mode: PromptMode,
) -> Result<IllustrationAsset, ProviderError> {
    let Some(parts) = response.first_candidate_parts() else {
        tracing::warn!("No candidates found in image response");
        return Err(ProviderError::NoCandidates);
    };

    let Some(inline) = parts
        .iter()
        .filter_map(|p| p.inline_data.as_ref())
        .find(|d| !d.data.is_empty())
    else {
        tracing::warn!("Image data not found in response ({} parts)", parts.len());
        return Err(ProviderError::NoImageData);
    };

    let bytes = decode_image(&inline.data).map_err(|e| ProviderError::Decode(e.to_string()))?;
    let asset = IllustrationAsset::new(bytes, mode);
    Ok(match &inline.mime_type {
        Some(mime) if mime.starts_with("image/") => asset.with_mime_type(mime.clone()),
        _ => asset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> GenerateResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn factual_prompt_asks_for_realistic_habitat() {
        assert_eq!(
            illustration_prompt("Lion", PromptMode::Factual),
            "Create a realistic image of a Lion in its natural habitat."
        );
    }

    #[test]
    fn fanciful_prompt_describes_a_mythical_creature() {
        let prompt = illustration_prompt("flerbnoggin", PromptMode::Fanciful);
        assert!(prompt.contains("mythical animal called a flerbnoggin"));
        assert!(!prompt.contains("realistic"));
    }

    #[test]
    fn extracts_first_inline_image_after_text_parts() {
        let response = response(
            r#"{"candidates":[{"content":{"parts":[
                {"text":"Here is your lion."},
                {"inlineData":{"mimeType":"image/png","data":"AQID"}}
            ]}}]}"#,
        );

        let asset = extract_image(&response, PromptMode::Factual).unwrap();
        assert_eq!(asset.bytes, vec![1, 2, 3]);
        assert_eq!(asset.mime_type, "image/png");
        assert!(asset.realistic);
    }

    #[test]
    fn keeps_reported_image_mime_type() {
        let response = response(
            r#"{"candidates":[{"content":{"parts":[{"inlineData":{"mimeType":"image/jpeg","data":"AQID"}}]}}]}"#,
        );
        let asset = extract_image(&response, PromptMode::Fanciful).unwrap();
        assert_eq!(asset.mime_type, "image/jpeg");
        assert!(!asset.realistic);
    }

    #[test]
    fn distinguishes_missing_candidates_from_missing_image() {
        let no_candidates = response(r#"{"candidates":[]}"#);
        assert!(matches!(
            extract_image(&no_candidates, PromptMode::Factual),
            Err(ProviderError::NoCandidates)
        ));

        let text_only = response(r#"{"candidates":[{"content":{"parts":[{"text":"Sorry."}]}}]}"#);
        assert!(matches!(
            extract_image(&text_only, PromptMode::Factual),
            Err(ProviderError::NoImageData)
        ));
    }

    #[test]
    fn rejects_corrupt_image_payload() {
        let response = response(
            r#"{"candidates":[{"content":{"parts":[{"inlineData":{"data":"%%%"}}]}}]}"#,
        );
        assert!(matches!(
            extract_image(&response, PromptMode::Factual),
            Err(ProviderError::Decode(_))
        ));
    }
}
