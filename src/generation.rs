use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    postprocess::clean_generated_text,
    prompt::{build_system_prompt, build_user_prompt},
    provider::{ProviderKind, TextProvider},
    suggestions::fetch_suggestions,
    types::{GenerationRequest, GenerationResult, Usage},
};

/// The stateless generation pipeline: prompt assembly, one provider call,
/// post-processing, then the best-effort suggestions call. Upstream failures
/// come back as failure results, never as errors.
pub struct GenerationService {
    provider: Arc<dyn TextProvider>,
    suggestion_provider: Arc<dyn TextProvider>,
    kind: ProviderKind,
}

impl GenerationService {
    pub fn new(
        provider: Arc<dyn TextProvider>,
        suggestion_provider: Arc<dyn TextProvider>,
        kind: ProviderKind,
    ) -> Self {
        Self {
            provider,
            suggestion_provider,
            kind,
        }
    }

    pub async fn generate(&self, request: GenerationRequest) -> GenerationResult {
        let system_prompt = build_system_prompt(&request);
        let user_prompt = build_user_prompt(&request);
        let max_tokens = request.length.token_budget();

        let response = match self
            .provider
            .generate(&system_prompt, &user_prompt, max_tokens)
            .await
        {
            Ok(response) => response,
            Err(error) => {
                warn!(provider = self.kind.as_str(), ?error, "generation failed");
                return GenerationResult {
                    success: false,
                    provider: Some(self.kind.as_str().to_owned()),
                    error: Some(format!("{} API エラー: {error}", self.kind.display_name())),
                    ..GenerationResult::default()
                };
            }
        };

        let generated_text = clean_generated_text(&response.text, request.max_length);
        let suggestions = fetch_suggestions(
            self.suggestion_provider.clone(),
            request.field_type,
            &request.prompt,
        )
        .await;

        info!(
            provider = self.kind.as_str(),
            text_chars = generated_text.chars().count(),
            tokens = response.tokens,
            suggestion_count = suggestions.len(),
            "generation succeeded"
        );

        GenerationResult {
            success: true,
            generated_text: Some(generated_text),
            suggestions,
            provider: Some(self.kind.as_str().to_owned()),
            usage: Some(Usage {
                tokens: response.tokens,
                cost: response.cost,
            }),
            error: None,
        }
    }
}
