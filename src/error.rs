//! パイプライン共通のエラー型

use thiserror::Error;

/// 1 試験回の処理、および結果出力で発生するエラー。
#[derive(Debug, Error)]
pub enum ExtractError {
    /// どの解析戦略でも解答表から十分な件数を取れなかった
    #[error("解答表を解析できません: {exam_id}")]
    AnswerKeyUnparsable { exam_id: String },

    /// Markdown 内に午前問題セクションが見つからない
    #[error("午前問題セクションがありません: {exam_id}")]
    QuestionSectionMissing { exam_id: String },

    /// 問題セクションはあるが設問マーカーを 1 件も検出できなかった
    #[error("設問マーカーを検出できません: {exam_id}")]
    NoQuestionMarkers { exam_id: String },

    #[error("入出力エラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON シリアライズエラー: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;
