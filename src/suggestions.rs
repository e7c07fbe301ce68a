//! Best-effort follow-up suggestions. A second, cheaper model call proposes
//! short example keywords; every failure path collapses to an empty list.

use std::sync::Arc;

use tracing::warn;

use crate::{provider::TextProvider, types::FieldType};

const MAX_SUGGESTIONS: usize = 3;
const MAX_SUGGESTION_CHARS: usize = 30;
const SUGGESTION_MAX_TOKENS: u32 = 200;

const SYSTEM_PROMPT: &str =
    "あなたは補助金申請書の作成を支援するアシスタントです。出力は箇条書きのみとしてください。";

fn field_label(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::BusinessDescription => "事業内容",
        FieldType::ProjectSummary => "事業計画概要",
        FieldType::Objectives => "事業目的・目標",
        FieldType::Background => "事業背景・課題",
        FieldType::General => "申請書の記載内容",
    }
}

fn build_instruction(field_type: FieldType, prompt: &str) -> String {
    format!(
        "「{}」について記載する際に参考になるキーワードや例を、\
         ちょうど3つ、それぞれ30文字以内で挙げてください。\n\
         テーマ: {}\n\
         各項目は「- 」で始まる箇条書きとしてください。",
        field_label(field_type),
        prompt
    )
}

/// Keeps only bullet-prefixed lines, strips the marker, drops over-long
/// items, and caps the list at 3.
fn parse_suggestions(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            trimmed
                .strip_prefix('-')
                .or_else(|| trimmed.strip_prefix('・'))
                .or_else(|| trimmed.strip_prefix('•'))
                .map(str::trim)
        })
        .filter(|item| !item.is_empty() && item.chars().count() <= MAX_SUGGESTION_CHARS)
        .map(str::to_owned)
        .take(MAX_SUGGESTIONS)
        .collect()
}

pub async fn fetch_suggestions(
    provider: Arc<dyn TextProvider>,
    field_type: FieldType,
    prompt: &str,
) -> Vec<String> {
    let instruction = build_instruction(field_type, prompt);
    match provider
        .generate(SYSTEM_PROMPT, &instruction, SUGGESTION_MAX_TOKENS)
        .await
    {
        Ok(response) => parse_suggestions(&response.text),
        Err(error) => {
            warn!(?error, "suggestion sub-call failed; returning none");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_suggestions;

    #[test]
    fn keeps_at_most_three_bullets() {
        let raw = "- 生産性向上\n- コスト削減\n- 売上拡大\n- 人材育成\n- 新規顧客開拓";
        let suggestions = parse_suggestions(raw);
        assert_eq!(
            suggestions,
            vec!["生産性向上", "コスト削減", "売上拡大"]
        );
    }

    #[test]
    fn ignores_non_bullet_lines() {
        let raw = "以下が候補です。\n- 生産性向上\nまとめ\n・コスト削減";
        assert_eq!(parse_suggestions(raw), vec!["生産性向上", "コスト削減"]);
    }

    #[test]
    fn drops_items_over_thirty_characters() {
        let long = format!("- {}", "あ".repeat(31));
        let raw = format!("{long}\n- 短い候補");
        assert_eq!(parse_suggestions(&raw), vec!["短い候補"]);
    }

    #[test]
    fn malformed_output_yields_empty_list() {
        assert!(parse_suggestions("箇条書きではない応答").is_empty());
        assert!(parse_suggestions("").is_empty());
    }
}
