use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{NormalizedResponse, TextProvider};

/// USD per 1K tokens, flat over input and output.
const PRICE_PER_1K_TOKENS: f64 = 0.03;

const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 0.9;
const FREQUENCY_PENALTY: f64 = 0.3;
const PRESENCE_PENALTY: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }
}

pub fn estimate_cost(total_tokens: u32) -> f64 {
    f64::from(total_tokens) / 1000.0 * PRICE_PER_1K_TOKENS
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
    frequency_penalty: f64,
    presence_penalty: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    total_tokens: u32,
}

#[async_trait]
impl TextProvider for OpenAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> anyhow::Result<NormalizedResponse> {
        let payload = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            max_tokens,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            frequency_penalty: FREQUENCY_PENALTY,
            presence_penalty: PRESENCE_PENALTY,
        };

        let response = self
            .client
            .post("https://api.openai.com/v1/chat/completions")
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatCompletionResponse>()
            .await?;

        let text = response
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_owned())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| anyhow::anyhow!("OpenAIからの応答を取得できませんでした"))?;

        let tokens = response.usage.map(|usage| usage.total_tokens).unwrap_or(0);

        Ok(NormalizedResponse {
            text,
            tokens,
            cost: estimate_cost(tokens),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::estimate_cost;

    #[test]
    fn cost_is_zero_for_zero_tokens() {
        assert_eq!(estimate_cost(0), 0.0);
    }

    #[test]
    fn cost_is_monotone_in_tokens() {
        let mut previous = 0.0;
        for tokens in [1, 100, 1000, 10_000, 1_000_000] {
            let cost = estimate_cost(tokens);
            assert!(cost >= previous);
            previous = cost;
        }
    }

    #[test]
    fn thousand_tokens_cost_three_cents() {
        assert!((estimate_cost(1000) - 0.03).abs() < 1e-12);
    }
}
