//! 1 試験回の処理
//!
//! 解答表の解析から品質評価まで、1 回分の Markdown を設問の列に変換する。

use tracing::{debug, warn};

use crate::error::ExtractError;
use crate::extract::{
    assess_quality, extract_choices, extract_question_body, extract_question_section,
    parse_answer_key, positional_count, reconcile_questions, split_questions,
};
use crate::models::{ExamSitting, Question};

/// 試験回 1 件を処理して設問の列を返す
///
/// 解答表が基準であり、解答表に載っている問番号だけが設問になる。
/// 解答表・問題セクション・設問マーカーのいずれかが欠けていれば
/// エラーで打ち切る。
pub fn process_sitting(sitting: &ExamSitting) -> Result<Vec<Question>, ExtractError> {
    let answer_key = parse_answer_key(&sitting.markdown, &sitting.id);
    if answer_key.is_empty() {
        return Err(ExtractError::AnswerKeyUnparsable { exam_id: sitting.id.clone() });
    }
    debug!("{}: 解答表 {} 件", sitting.id, answer_key.len());

    let Some((section, pages)) = extract_question_section(&sitting.markdown, &sitting.id) else {
        return Err(ExtractError::QuestionSectionMissing { exam_id: sitting.id.clone() });
    };

    let blocks = split_questions(&section, &pages);
    if blocks.is_empty() {
        return Err(ExtractError::NoQuestionMarkers { exam_id: sitting.id.clone() });
    }
    debug!("{}: 設問ブロック {} 件", sitting.id, blocks.len());

    let reconciled = reconcile_questions(&blocks, &answer_key);
    let positional = positional_count(&reconciled);
    if positional > 0 {
        warn!(
            "{}: {} 問を出現順で割り当てました (番号誤認識の可能性)",
            sitting.id, positional
        );
    }

    let mut questions = Vec::with_capacity(reconciled.len());
    for (number, text) in &reconciled {
        let entry = &answer_key[number];
        let choices = extract_choices(&text.text);
        let body = extract_question_body(&text.text);
        let quality_score = assess_quality(&body, &choices);

        questions.push(Question {
            exam_id: sitting.id.clone(),
            exam_name: sitting.title.clone(),
            question_number: *number,
            question_text: body,
            choices,
            correct_answer: entry.answer,
            field: entry.field,
            category: "",
            subcategory: "",
            importance: 0,
            quality_score,
            image_path: text.image_path.clone(),
        });
    }

    debug!("{}: {} 問を抽出", sitting.id, questions.len());
    Ok(questions)
}
