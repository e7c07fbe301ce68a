use std::sync::Arc;

use hojokin_ai::{
    config::AppConfig,
    generation::GenerationService,
    http::{self, AppState},
    provider::{
        self, AnthropicProvider, MockProvider, OpenAiProvider, ProviderKind, TextProvider,
    },
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let kind = provider::select_provider(&config);
    let (primary, suggestion) = build_providers(&config, kind);
    let service = Arc::new(GenerationService::new(primary, suggestion, kind));

    let app = http::router(AppState { service });
    let listener = TcpListener::bind(config.http_bind).await?;
    info!(
        provider = kind.as_str(),
        "hojokin-ai HTTP API listening on {}", config.http_bind
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();
}

/// Builds the primary generation client and the cheaper suggestions client
/// for the selected provider. Without any credential the mock provider keeps
/// the service usable for local development.
fn build_providers(
    config: &AppConfig,
    kind: ProviderKind,
) -> (Arc<dyn TextProvider>, Arc<dyn TextProvider>) {
    match kind {
        ProviderKind::Anthropic => {
            // select_provider only picks Anthropic when a key is configured.
            let api_key = config.anthropic_api_key.clone().unwrap_or_default();
            (
                Arc::new(AnthropicProvider::new(
                    api_key.clone(),
                    config.anthropic_model.clone(),
                )),
                Arc::new(AnthropicProvider::new(
                    api_key,
                    config.anthropic_suggestion_model.clone(),
                )),
            )
        }
        ProviderKind::OpenAi => match config.openai_api_key.clone() {
            Some(api_key) => (
                Arc::new(OpenAiProvider::new(
                    api_key.clone(),
                    config.openai_model.clone(),
                )),
                Arc::new(OpenAiProvider::new(
                    api_key,
                    config.openai_suggestion_model.clone(),
                )),
            ),
            None => {
                warn!("OPENAI_API_KEY not set; using mock text provider");
                (Arc::new(MockProvider), Arc::new(MockProvider))
            }
        },
    }
}
