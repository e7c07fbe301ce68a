use std::{env, net::SocketAddr};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_bind: SocketAddr,
    pub provider_preference: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_suggestion_model: String,
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: String,
    pub anthropic_suggestion_model: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_owned());
        let http_bind = env::var("HTTP_BIND").unwrap_or_else(|_| format!("0.0.0.0:{port}"));
        let http_bind = http_bind.parse()?;

        Ok(Self {
            http_bind,
            provider_preference: env::var("AI_PROVIDER").unwrap_or_else(|_| "openai".to_owned()),
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4".to_owned()),
            openai_suggestion_model: env::var("OPENAI_SUGGESTION_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".to_owned()),
            anthropic_api_key: env::var("ANTHROPIC_API_KEY").ok(),
            anthropic_model: env::var("ANTHROPIC_MODEL")
                .unwrap_or_else(|_| "claude-3-5-sonnet-20241022".to_owned()),
            anthropic_suggestion_model: env::var("ANTHROPIC_SUGGESTION_MODEL")
                .unwrap_or_else(|_| "claude-3-5-haiku-20241022".to_owned()),
        })
    }
}
