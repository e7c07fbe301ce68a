use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{generation::GenerationService, types::GenerationRequest};

const MAX_PROMPT_CHARS: usize = 1000;
const MIN_MAX_LENGTH: usize = 50;
const MAX_MAX_LENGTH: usize = 2000;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<GenerationService>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/generate", post(generate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Field-level validation happens here, before the pipeline runs; the
/// pipeline itself trusts its input. Upstream failures still come back as a
/// 200 envelope with `success: false`.
async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<crate::types::GenerationResult>, (StatusCode, String)> {
    validate(&request).map_err(|message| (StatusCode::BAD_REQUEST, message))?;

    let result = state.service.generate(request).await;
    info!(
        success = result.success,
        provider = result.provider.as_deref().unwrap_or("none"),
        text_chars = result
            .generated_text
            .as_deref()
            .map(|text| text.chars().count())
            .unwrap_or(0),
        "generate request handled"
    );

    Ok(Json(result))
}

fn validate(request: &GenerationRequest) -> Result<(), String> {
    if request.prompt.trim().is_empty() {
        return Err("プロンプトを入力してください".to_owned());
    }
    if request.prompt.chars().count() > MAX_PROMPT_CHARS {
        return Err(format!(
            "プロンプトは{MAX_PROMPT_CHARS}文字以内で入力してください"
        ));
    }
    if !(MIN_MAX_LENGTH..=MAX_MAX_LENGTH).contains(&request.max_length) {
        return Err(format!(
            "max_lengthは{MIN_MAX_LENGTH}〜{MAX_MAX_LENGTH}の範囲で指定してください"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::types::GenerationRequest;

    use super::validate;

    fn request(prompt: &str, max_length: usize) -> GenerationRequest {
        GenerationRequest {
            prompt: prompt.to_owned(),
            field_type: Default::default(),
            tone: Default::default(),
            length: Default::default(),
            max_length,
        }
    }

    #[test]
    fn rejects_blank_prompt() {
        assert!(validate(&request("", 500)).is_err());
        assert!(validate(&request("   ", 500)).is_err());
    }

    #[test]
    fn rejects_over_long_prompt() {
        let prompt = "あ".repeat(1001);
        assert!(validate(&request(&prompt, 500)).is_err());
        let prompt = "あ".repeat(1000);
        assert!(validate(&request(&prompt, 500)).is_ok());
    }

    #[test]
    fn rejects_max_length_outside_range() {
        assert!(validate(&request("内容", 49)).is_err());
        assert!(validate(&request("内容", 2001)).is_err());
        assert!(validate(&request("内容", 50)).is_ok());
        assert!(validate(&request("内容", 2000)).is_ok());
    }
}
