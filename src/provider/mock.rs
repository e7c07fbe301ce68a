use async_trait::async_trait;

use super::{NormalizedResponse, TextProvider};

/// Deterministic stand-in used when no provider credential is configured,
/// and as the stub in service tests.
#[derive(Debug, Default)]
pub struct MockProvider;

#[async_trait]
impl TextProvider for MockProvider {
    async fn generate(
        &self,
        _system_prompt: &str,
        user_prompt: &str,
        _max_tokens: u32,
    ) -> anyhow::Result<NormalizedResponse> {
        Ok(NormalizedResponse {
            text: format!(
                "当社は「{user_prompt}」に関する取り組みを通じて、\
                 業務の効率化と売上の向上を目指します。\
                 本事業では具体的な数値目標を設定し、計画的に実施します。"
            ),
            tokens: 0,
            cost: 0.0,
        })
    }
}
