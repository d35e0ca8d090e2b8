//! 結果出力
//!
//! 選定済みコーパスをメタデータ付きの JSON として書き出す。
//! 設問は (カテゴリ昇順, 重要度降順, 試験 ID 昇順) で並べる。

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::models::{AnswerLabel, Question};

/// 出力ファイル全体。
#[derive(Debug, Serialize)]
pub struct OutputEnvelope {
    pub metadata: Metadata,
    pub questions: Vec<QuestionRecord>,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    pub generated_at: String,
    pub total_questions: usize,
    pub source_exams: usize,
    pub total_available: usize,
    pub categories: BTreeMap<&'static str, CategorySummary>,
}

#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub count: usize,
    pub importance_avg: f64,
}

/// JSON に書き出す 1 設問分のレコード。
#[derive(Debug, Serialize)]
pub struct QuestionRecord {
    pub id: String,
    pub exam_id: String,
    pub exam_name: String,
    pub question_number: u32,
    pub field: &'static str,
    pub category: &'static str,
    pub subcategory: &'static str,
    pub importance: u8,
    pub question_text: String,
    pub choices: BTreeMap<AnswerLabel, String>,
    pub correct_answer: AnswerLabel,
    pub quality_score: f64,
    pub image_path: String,
}

impl From<&Question> for QuestionRecord {
    fn from(q: &Question) -> Self {
        Self {
            id: q.record_id(),
            exam_id: q.exam_id.clone(),
            exam_name: q.exam_name.clone(),
            question_number: q.question_number,
            field: q.field.code(),
            category: q.category,
            subcategory: q.subcategory,
            importance: q.importance,
            question_text: q.question_text.clone(),
            choices: q.choices.clone(),
            correct_answer: q.correct_answer,
            quality_score: round2(q.quality_score),
            image_path: q.image_path.clone(),
        }
    }
}

/// 選定結果から出力用の構造体を組み立てる
pub fn build_envelope(
    selected: &[Question],
    source_exams: usize,
    total_available: usize,
) -> OutputEnvelope {
    let mut ordered: Vec<&Question> = selected.iter().collect();
    ordered.sort_by(|a, b| {
        a.category
            .cmp(b.category)
            .then_with(|| b.importance.cmp(&a.importance))
            .then_with(|| a.exam_id.cmp(&b.exam_id))
    });

    let mut categories: BTreeMap<&'static str, (usize, u32)> = BTreeMap::new();
    for question in &ordered {
        let entry = categories.entry(question.category).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += u32::from(question.importance);
    }
    let categories = categories
        .into_iter()
        .map(|(name, (count, importance_sum))| {
            let avg = f64::from(importance_sum) / count as f64;
            (name, CategorySummary { count, importance_avg: round1(avg) })
        })
        .collect();

    OutputEnvelope {
        metadata: Metadata {
            generated_at: chrono::Local::now().to_rfc3339(),
            total_questions: ordered.len(),
            source_exams,
            total_available,
            categories,
        },
        questions: ordered.into_iter().map(QuestionRecord::from).collect(),
    }
}

/// JSON ファイルへ書き出す (親ディレクトリは自動作成)
pub async fn write_envelope(envelope: &OutputEnvelope, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_string_pretty(envelope)?;
    tokio::fs::write(path, &json).await?;
    info!("💾 出力完了: {} ({} 問)", path.display(), envelope.questions.len());
    Ok(())
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;
    use std::collections::BTreeMap as Map;

    fn make_question(
        exam_id: &str,
        number: u32,
        category: &'static str,
        importance: u8,
    ) -> Question {
        let mut choices = Map::new();
        choices.insert(AnswerLabel::A, "選択肢ア".to_string());
        choices.insert(AnswerLabel::E, "選択肢エ".to_string());
        Question {
            exam_id: exam_id.to_string(),
            exam_name: "令和6年度秋期".to_string(),
            question_number: number,
            question_text: "本文".to_string(),
            choices,
            correct_answer: AnswerLabel::E,
            field: Field::Technology,
            category,
            subcategory: "その他",
            importance,
            quality_score: 0.8567,
            image_path: String::new(),
        }
    }

    #[test]
    fn test_record_id_and_rounding() {
        let q = make_question("2024r06a", 7, "セキュリティ", 4);
        let record = QuestionRecord::from(&q);
        assert_eq!(record.id, "2024r06a_q07");
        assert_eq!(record.quality_score, 0.86);
        assert_eq!(record.field, "T");
    }

    #[test]
    fn test_envelope_ordering() {
        let questions = vec![
            make_question("2024r06a", 1, "セキュリティ", 3),
            make_question("2023r05a", 2, "セキュリティ", 5),
            make_question("2024r06a", 3, "基礎理論", 2),
        ];
        let envelope = build_envelope(&questions, 2, 3);

        // カテゴリ昇順 (UTF-8 ではカタカナ < 漢字)、同カテゴリ内は重要度降順
        assert_eq!(envelope.questions[0].category, "セキュリティ");
        assert_eq!(envelope.questions[0].importance, 5);
        assert_eq!(envelope.questions[1].importance, 3);
        assert_eq!(envelope.questions[2].category, "基礎理論");
        assert_eq!(envelope.metadata.total_questions, 3);
        assert_eq!(envelope.metadata.source_exams, 2);
    }

    #[test]
    fn test_image_path_always_serialized() {
        // 画像パスが空でもキー自体は出力される
        let q = make_question("2024r06a", 1, "法務", 3);
        let record = QuestionRecord::from(&q);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["image_path"], "");
    }

    #[test]
    fn test_category_summary_average() {
        let questions = vec![
            make_question("2024r06a", 1, "法務", 5),
            make_question("2024r06a", 2, "法務", 4),
            make_question("2024r06a", 3, "法務", 4),
        ];
        let envelope = build_envelope(&questions, 1, 3);
        let summary = &envelope.metadata.categories["法務"];
        assert_eq!(summary.count, 3);
        assert_eq!(summary.importance_avg, 4.3);
    }
}
