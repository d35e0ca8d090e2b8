//! 重要度推定
//!
//! カテゴリごとの出題頻度から 1〜5 の重要度ティアを割り当てる。
//! 頻度 = (1 回あたり平均出題数) × (出題回率) を五分位で区切り、
//! 頻度が高いカテゴリほど大きいティアになる。

use std::collections::{BTreeMap, BTreeSet};

use crate::models::Question;

/// 五分位の境界として使う累積割合。
const QUINTILES: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

/// 全設問に重要度ティアを書き込む
///
/// カテゴリが 1 種類しかない場合でも必ず 1〜5 のいずれかが入る。
pub fn calculate_importance(questions: &mut [Question]) {
    if questions.is_empty() {
        return;
    }

    let category_freq = compute_category_freq(questions);
    let thresholds = quintile_thresholds(&category_freq);

    for question in questions.iter_mut() {
        let freq = category_freq.get(question.category).copied().unwrap_or(0.0);
        question.importance = tier_for(freq, &thresholds);
    }
}

/// カテゴリごとの出題頻度を算出する
///
/// 頻度 = (総出題数 ÷ 出題された試験回数) × (出題された試験回数 ÷ 全試験回数)。
fn compute_category_freq(questions: &[Question]) -> BTreeMap<&'static str, f64> {
    let total_exams: BTreeSet<&str> = questions.iter().map(|q| q.exam_id.as_str()).collect();
    let total_exam_count = total_exams.len().max(1) as f64;

    let mut per_category: BTreeMap<&'static str, (usize, BTreeSet<&str>)> = BTreeMap::new();
    for question in questions {
        let entry = per_category
            .entry(question.category)
            .or_insert_with(|| (0, BTreeSet::new()));
        entry.0 += 1;
        entry.1.insert(question.exam_id.as_str());
    }

    per_category
        .into_iter()
        .map(|(category, (count, exams))| {
            let exam_count = exams.len() as f64;
            let avg_per_exam = count as f64 / exam_count;
            let appearance_rate = exam_count / total_exam_count;
            (category, avg_per_exam * appearance_rate)
        })
        .collect()
}

/// 頻度分布の五分位境界を返す
fn quintile_thresholds(category_freq: &BTreeMap<&'static str, f64>) -> [f64; 4] {
    let mut freqs: Vec<f64> = category_freq.values().copied().collect();
    freqs.sort_by(f64::total_cmp);
    let n = freqs.len();

    let mut thresholds = [0.0; 4];
    for (i, p) in QUINTILES.iter().enumerate() {
        let idx = ((n as f64 * p) as usize).min(n - 1);
        thresholds[i] = freqs[idx];
    }
    thresholds
}

/// 頻度をティア (1〜5) に写す
fn tier_for(freq: f64, thresholds: &[f64; 4]) -> u8 {
    for (i, t) in thresholds.iter().enumerate() {
        if freq <= *t {
            return (i + 1) as u8;
        }
    }
    5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnswerLabel, Field};
    use std::collections::BTreeMap as Map;

    fn make_question(exam_id: &str, number: u32, category: &'static str) -> Question {
        let mut choices = Map::new();
        choices.insert(AnswerLabel::A, "選択肢".to_string());
        Question {
            exam_id: exam_id.to_string(),
            exam_name: String::new(),
            question_number: number,
            question_text: "本文".to_string(),
            choices,
            correct_answer: AnswerLabel::A,
            field: Field::Technology,
            category,
            subcategory: "",
            importance: 0,
            quality_score: 1.0,
            image_path: String::new(),
        }
    }

    #[test]
    fn test_tiers_within_range() {
        let mut questions = vec![
            make_question("2023r05a", 1, "基礎理論"),
            make_question("2023r05a", 2, "基礎理論"),
            make_question("2023r05a", 3, "セキュリティ"),
            make_question("2024r06a", 1, "セキュリティ"),
            make_question("2024r06a", 2, "ネットワーク"),
            make_question("2024r06a", 3, "データベース"),
            make_question("2024r06a", 4, "法務"),
        ];
        calculate_importance(&mut questions);
        for q in &questions {
            assert!((1..=5).contains(&q.importance), "{} => {}", q.category, q.importance);
        }
    }

    #[test]
    fn test_frequent_category_ranks_higher() {
        let mut questions = Vec::new();
        // セキュリティは全 2 回で出題、法務は 1 回に 1 問のみ
        for exam in ["2023r05a", "2024r06a"] {
            for n in 1..=5 {
                questions.push(make_question(exam, n, "セキュリティ"));
            }
        }
        questions.push(make_question("2023r05a", 6, "法務"));
        questions.push(make_question("2023r05a", 7, "基礎理論"));
        questions.push(make_question("2023r05a", 8, "データベース"));
        questions.push(make_question("2024r06a", 8, "ネットワーク"));

        calculate_importance(&mut questions);

        let security = questions.iter().find(|q| q.category == "セキュリティ").unwrap();
        let law = questions.iter().find(|q| q.category == "法務").unwrap();
        assert!(security.importance > law.importance);
        assert_eq!(law.importance, 1);
        // 最大頻度は最上位の閾値と一致するためティアは 4 になる
        assert_eq!(security.importance, 4);
    }

    #[test]
    fn test_single_category_gets_tier_one() {
        // 頻度が 1 種類しかないと全閾値がその値になり、ティアは 1 になる
        let mut questions = vec![
            make_question("2024r06a", 1, "基礎理論"),
            make_question("2024r06a", 2, "基礎理論"),
        ];
        calculate_importance(&mut questions);
        assert!(questions.iter().all(|q| q.importance == 1));
    }

    #[test]
    fn test_empty_slice_is_noop() {
        let mut questions: Vec<Question> = Vec::new();
        calculate_importance(&mut questions);
    }
}
