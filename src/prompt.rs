//! Japanese prompt assembly for the generation call. Pure string building,
//! no I/O.

use crate::types::{FieldType, GenerationRequest, Tone};

fn role_description(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::BusinessDescription => {
            "あなたは中小企業の事業内容を補助金申請書向けに文章化する専門家です。\
             事業の強みと実績が審査員に伝わる説明文を作成してください。"
        }
        FieldType::ProjectSummary => {
            "あなたは補助金申請書の事業計画概要を作成する専門家です。\
             取組の全体像と期待される成果を端的にまとめてください。"
        }
        FieldType::Objectives => {
            "あなたは補助金申請書の事業目的・目標を作成する専門家です。\
             達成基準が明確で測定可能な目標を文章化してください。"
        }
        FieldType::Background => {
            "あなたは補助金申請書の事業背景・課題を作成する専門家です。\
             現状の課題と取組の必要性が伝わる文章を作成してください。"
        }
        FieldType::General => {
            "あなたは中小企業の補助金申請書の作成を支援する専門家です。\
             申請書に適した説得力のある文章を作成してください。"
        }
    }
}

fn tone_instruction(tone: Tone) -> &'static str {
    match tone {
        Tone::Formal => "文体は敬語を用いた格調高い書き言葉としてください。",
        Tone::Casual => "文体は平易なです・ます調としてください。",
        Tone::Professional => "文体はビジネス文書として適切なフォーマルな調子としてください。",
    }
}

pub fn build_system_prompt(request: &GenerationRequest) -> String {
    let sections = [
        role_description(request.field_type).to_owned(),
        tone_instruction(request.tone).to_owned(),
        "制約条件:".to_owned(),
        "- 補助金申請書に掲載できる内容とすること".to_owned(),
        "- 抽象論を避け、具体的な記述とすること".to_owned(),
        "- 審査員が読みやすい構成とすること".to_owned(),
        "- 事実に基づき、誇張や虚偽を含めないこと".to_owned(),
        "- 指定された文字数制限を厳守すること".to_owned(),
        "出力は本文のみとし、前置きや説明は含めないでください。".to_owned(),
    ];
    sections.join("\n")
}

pub fn build_user_prompt(request: &GenerationRequest) -> String {
    format!(
        "次の内容をもとに文章を作成してください。\n\
         内容: {}\n\
         分量: {}まとめてください。\n\
         文字数は最大{}文字以内に収めてください。",
        request.prompt,
        request.length.character_guide(),
        request.max_length
    )
}
