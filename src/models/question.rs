use std::collections::BTreeMap;

use crate::models::{AnswerLabel, Field};

/// 解答キー1問分のエントリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerKeyEntry {
    pub answer: AnswerLabel,
    pub field: Field,
}

/// 解答キー: 問番号 → (正解, 分野)
pub type AnswerKey = BTreeMap<u32, AnswerKeyEntry>;

/// 選択肢: 記号 → 本文
pub type Choices = BTreeMap<AnswerLabel, String>;

/// OCRテキストから切り出した問題ブロック (番号照合前)
#[derive(Debug, Clone)]
pub struct RawQuestionBlock {
    /// OCRが読み取った問番号 (誤認識・重複の可能性あり)
    pub detected_number: u32,
    /// マーカーから次のマーカーまでの本文
    pub text: String,
    /// 出典ページの画像パス
    pub image_path: String,
}

/// 解答キーの番号と照合済みの問題本文
#[derive(Debug, Clone)]
pub struct ReconciledText {
    pub text: String,
    pub image_path: String,
    /// 番号の直接一致でなく出現順による推定割り当てなら true
    pub positional: bool,
}

/// 抽出済み問題 (最終出力の単位)
///
/// 番号・正解・分野は照合段階で確定する。category/subcategory/importance
/// は全試験の集約後に埋められ、quality_score は抽出時に確定して以後
/// 変化しない。
#[derive(Debug, Clone)]
pub struct Question {
    pub exam_id: String,
    pub exam_name: String,
    pub question_number: u32,
    /// 選択肢を除いた問題文本体
    pub question_text: String,
    pub choices: Choices,
    pub correct_answer: AnswerLabel,
    pub field: Field,
    pub category: &'static str,
    pub subcategory: &'static str,
    /// 重要度 (1-5)
    pub importance: u8,
    /// 品質スコア (0.0-1.0)
    pub quality_score: f64,
    pub image_path: String,
}

impl Question {
    /// 出力レコードのID (例: "2024r06a_q05")
    pub fn record_id(&self) -> String {
        format!("{}_q{:02}", self.exam_id, self.question_number)
    }

    /// 分類の対象テキスト (本文 + 全選択肢)
    pub fn classification_text(&self) -> String {
        let mut text = self.question_text.clone();
        for choice in self.choices.values() {
            text.push(' ');
            text.push_str(choice);
        }
        text
    }
}
