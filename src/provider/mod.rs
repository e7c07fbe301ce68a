mod anthropic;
mod mock;
mod openai;

use async_trait::async_trait;

pub use anthropic::AnthropicProvider;
pub use mock::MockProvider;
pub use openai::OpenAiProvider;

use crate::config::AppConfig;

/// Upstream LLM vendor serving a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
}

impl ProviderKind {
    /// Wire-format tag used in the `provider` field of results.
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
        }
    }

    /// Display name used in user-facing error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::Anthropic => "Anthropic",
        }
    }
}

/// Picks the provider once at startup from static configuration. Anthropic is
/// used only when preferred and a credential is present; everything else
/// routes to OpenAI. No per-request failover.
pub fn select_provider(config: &AppConfig) -> ProviderKind {
    if config.provider_preference == "anthropic" && config.anthropic_api_key.is_some() {
        ProviderKind::Anthropic
    } else {
        ProviderKind::OpenAi
    }
}

/// A single normalized completion: the text plus the provider-reported token
/// count and its price-table cost estimate.
#[derive(Debug, Clone)]
pub struct NormalizedResponse {
    pub text: String,
    pub tokens: u32,
    pub cost: f64,
}

#[async_trait]
pub trait TextProvider: Send + Sync {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> anyhow::Result<NormalizedResponse>;
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use super::*;

    fn config(preference: &str, anthropic_key: Option<&str>) -> AppConfig {
        AppConfig {
            http_bind: "127.0.0.1:8080".parse::<SocketAddr>().unwrap(),
            provider_preference: preference.to_owned(),
            openai_api_key: Some("sk-test".to_owned()),
            openai_model: "gpt-4".to_owned(),
            openai_suggestion_model: "gpt-3.5-turbo".to_owned(),
            anthropic_api_key: anthropic_key.map(str::to_owned),
            anthropic_model: "claude-3-5-sonnet-20241022".to_owned(),
            anthropic_suggestion_model: "claude-3-5-haiku-20241022".to_owned(),
        }
    }

    #[test]
    fn anthropic_needs_preference_and_credential() {
        assert_eq!(
            select_provider(&config("anthropic", Some("key"))),
            ProviderKind::Anthropic
        );
        assert_eq!(
            select_provider(&config("anthropic", None)),
            ProviderKind::OpenAi
        );
        assert_eq!(
            select_provider(&config("openai", Some("key"))),
            ProviderKind::OpenAi
        );
    }
}
