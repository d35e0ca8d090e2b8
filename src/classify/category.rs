//! カテゴリ分類
//!
//! 設問本文と選択肢をキーワード照合し、21 カテゴリのうち最も適合する
//! ものを割り当てる。キーワード一致数に、問番号がカテゴリの出題範囲に
//! 収まる場合のボーナス 0.5 を加えた得点で比較する。

use crate::models::Question;
use crate::taxonomy::{categories_for_field, default_category, Category};

/// 問番号が出題範囲内のカテゴリに与えるボーナス。
const RANGE_BONUS: f64 = 0.5;

/// 設問を最も適合するカテゴリへ分類する
///
/// 同一分野のカテゴリのみが候補になる。得点が同点の場合は定義順で
/// 先に現れたカテゴリを採用する。キーワードが一つも当たらなかった
/// 場合は出題範囲のみで判定し、それでも決まらなければ分野ごとの
/// 既定カテゴリへ落とす。
pub fn classify_question(question: &Question) -> &'static Category {
    let text = question.classification_text();
    let text_lower = text.to_lowercase();

    let mut best: Option<(&'static Category, f64)> = None;
    for category in categories_for_field(question.field) {
        let hits = keyword_hits(&text, &text_lower, category.keywords);
        let mut score = hits as f64;
        if category.contains_number(question.question_number) {
            score += RANGE_BONUS;
        }
        if hits > 0 {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((category, score)),
            }
        }
    }

    match best {
        Some((category, _)) => category,
        None => fallback_classify(question),
    }
}

/// カテゴリ内のサブカテゴリを決める
///
/// サブカテゴリのキーワード一致数で比較し、一致がなければ先頭の
/// サブカテゴリを既定として返す。
pub fn classify_subcategory(question: &Question, category: &'static Category) -> &'static str {
    let text = question.classification_text();

    let mut best: Option<(&'static str, usize)> = None;
    for sub in category.subcategories {
        let hits = sub
            .keywords
            .iter()
            .filter(|kw| text.contains(*kw))
            .count();
        if hits > 0 {
            match best {
                Some((_, best_hits)) if hits <= best_hits => {}
                _ => best = Some((sub.name, hits)),
            }
        }
    }

    match best {
        Some((name, _)) => name,
        None => category.subcategories[0].name,
    }
}

/// キーワード一致数を数える
///
/// 英字キーワードは小文字化した本文、日本語キーワードは原文の
/// どちらかに含まれれば一致とみなす。
fn keyword_hits(text: &str, text_lower: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|kw| {
            let kw_lower = kw.to_lowercase();
            text_lower.contains(&kw_lower) || text.contains(*kw)
        })
        .count()
}

/// キーワード不一致時の救済: 出題範囲のみで判定し、最後は既定カテゴリ。
fn fallback_classify(question: &Question) -> &'static Category {
    categories_for_field(question.field)
        .find(|c| c.contains_number(question.question_number))
        .unwrap_or_else(|| default_category(question.field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnswerLabel, Field};
    use std::collections::BTreeMap;

    fn make_question(number: u32, field: Field, text: &str, choice: &str) -> Question {
        let mut choices = BTreeMap::new();
        choices.insert(AnswerLabel::A, choice.to_string());
        Question {
            exam_id: "2024r06a".to_string(),
            exam_name: "令和6年度秋期".to_string(),
            question_number: number,
            question_text: text.to_string(),
            choices,
            correct_answer: AnswerLabel::A,
            field,
            category: "",
            subcategory: "",
            importance: 0,
            quality_score: 1.0,
            image_path: String::new(),
        }
    }

    #[test]
    fn test_keyword_match_wins() {
        let q = make_question(
            9,
            Field::Technology,
            "CPU のキャッシュメモリに関する記述として適切なものはどれか。",
            "ライトスルー方式",
        );
        let category = classify_question(&q);
        assert_eq!(category.name, "コンピュータ構成要素");
    }

    #[test]
    fn test_fallback_uses_default_category() {
        // キーワードが一切当たらず、問番号も範囲外 → 分野の既定カテゴリ
        let q = make_question(10, Field::Management, "zzzz", "yyyy");
        let category = classify_question(&q);
        assert_eq!(category.name, "サービスマネジメント");
    }

    #[test]
    fn test_fallback_uses_range() {
        // キーワードなしでも問番号がマネジメント系の範囲に入れば範囲で決まる
        let q = make_question(52, Field::Management, "zzzz", "yyyy");
        let category = classify_question(&q);
        assert!(category.contains_number(52));
        assert_eq!(category.field, Field::Management);
    }

    #[test]
    fn test_subcategory_by_keyword() {
        let q = make_question(
            27,
            Field::Technology,
            "関係データベースに対して SELECT 文を実行した結果はどれか。",
            "射影",
        );
        let category = classify_question(&q);
        assert_eq!(category.name, "データベース");
        let sub = classify_subcategory(&q, category);
        assert_eq!(sub, "SQL");
    }

    #[test]
    fn test_subcategory_defaults_to_first() {
        let q = make_question(1, Field::Technology, "zzzz zzzz zzzz", "yyyy");
        let category = classify_question(&q);
        let sub = classify_subcategory(&q, category);
        assert_eq!(sub, category.subcategories[0].name);
    }

    #[test]
    fn test_english_keywords_case_insensitive() {
        let q = make_question(
            28,
            Field::Technology,
            "sql インジェクション対策として select 文をどう扱うべきか。",
            "プレースホルダを使う",
        );
        let category = classify_question(&q);
        // 小文字の sql でもデータベース/セキュリティ系のキーワードに一致する
        assert!(category.name == "データベース" || category.name == "セキュリティ");
    }
}
