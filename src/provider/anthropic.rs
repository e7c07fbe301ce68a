use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{NormalizedResponse, TextProvider};

/// USD per 1M tokens, priced separately for input and output.
const INPUT_PRICE_PER_1M: f64 = 3.0;
const OUTPUT_PRICE_PER_1M: f64 = 15.0;

const TEMPERATURE: f64 = 0.7;
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Clone)]
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl AnthropicProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }
}

pub fn estimate_cost(input_tokens: u32, output_tokens: u32) -> f64 {
    f64::from(input_tokens) / 1_000_000.0 * INPUT_PRICE_PER_1M
        + f64::from(output_tokens) / 1_000_000.0 * OUTPUT_PRICE_PER_1M
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f64,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Option<MessagesUsage>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct MessagesUsage {
    input_tokens: u32,
    output_tokens: u32,
}

#[async_trait]
impl TextProvider for AnthropicProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> anyhow::Result<NormalizedResponse> {
        let payload = MessagesRequest {
            model: &self.model,
            max_tokens,
            temperature: TEMPERATURE,
            system: system_prompt,
            messages: vec![Message {
                role: "user",
                content: user_prompt,
            }],
        };

        let response = self
            .client
            .post("https://api.anthropic.com/v1/messages")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json::<MessagesResponse>()
            .await?;

        let text = response
            .content
            .iter()
            .find(|block| block.block_type == "text")
            .map(|block| block.text.trim().to_owned())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| anyhow::anyhow!("Anthropicからの応答を取得できませんでした"))?;

        let (input_tokens, output_tokens) = response
            .usage
            .map(|usage| (usage.input_tokens, usage.output_tokens))
            .unwrap_or((0, 0));

        Ok(NormalizedResponse {
            text,
            tokens: input_tokens + output_tokens,
            cost: estimate_cost(input_tokens, output_tokens),
        })
    }
}
