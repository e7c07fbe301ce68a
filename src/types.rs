use serde::{Deserialize, Serialize};

/// Which subsidy-application field the generated text is for. Selects the
/// system-prompt persona.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    BusinessDescription,
    ProjectSummary,
    Objectives,
    Background,
    #[default]
    General,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Formal,
    Casual,
    #[default]
    Professional,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl TextLength {
    /// Upstream `max_tokens` budget for each requested length.
    pub fn token_budget(self) -> u32 {
        match self {
            TextLength::Short => 150,
            TextLength::Medium => 400,
            TextLength::Long => 700,
        }
    }

    /// Human-readable character guide embedded in the user prompt.
    pub fn character_guide(self) -> &'static str {
        match self {
            TextLength::Short => "100文字程度で簡潔に",
            TextLength::Medium => "200〜300文字程度で",
            TextLength::Long => "400〜500文字程度で詳しく",
        }
    }
}

fn default_max_length() -> usize {
    500
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub length: TextLength,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

/// Token count and estimated cost reported back to the caller. Estimated
/// against a static price table, not billing-grade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Usage {
    pub tokens: u32,
    pub cost: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_maps_to_fixed_token_budgets() {
        assert_eq!(TextLength::Short.token_budget(), 150);
        assert_eq!(TextLength::Medium.token_budget(), 400);
        assert_eq!(TextLength::Long.token_budget(), 700);
    }

    #[test]
    fn request_defaults_apply() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"prompt": "AI活用による業務効率化"}"#)
                .expect("minimal request should deserialize");
        assert_eq!(request.field_type, FieldType::General);
        assert_eq!(request.tone, Tone::Professional);
        assert_eq!(request.length, TextLength::Medium);
        assert_eq!(request.max_length, 500);
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        let result = serde_json::from_str::<GenerationRequest>(
            r#"{"prompt": "x", "field_type": "market_analysis"}"#,
        );
        assert!(result.is_err());
    }
}
