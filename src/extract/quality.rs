//! 品質スコア算定 (ステージ5)
//!
//! 抽出結果の完全性とOCRノイズの痕跡から [0,1] のスコアを付ける。
//! スコアは抽出時に確定し、以後変化しない。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Choices;

/// 日本語の助詞 (文として成立しているかの代用判定)
static PARTICLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[はがのをにでと]").unwrap());

/// 5文字以上の大文字連続はOCRノイズの典型
static UPPERCASE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]{5,}").unwrap());

/// 品質スコアを算定する
///
/// 1.0から固定の減点を重ねる:
/// - 選択肢が4つ未満: -0.3 (さらに2つ未満: -0.3)
/// - 本文が20文字未満: -0.3
/// - 本文に助詞が1つもない: -0.2
/// - 大文字連続の出現 1回につき -0.1 (最大5回まで)
pub fn assess_quality(question_text: &str, choices: &Choices) -> f64 {
    let mut score = 1.0;

    if choices.len() < 4 {
        score -= 0.3;
    }
    if choices.len() < 2 {
        score -= 0.3;
    }
    if question_text.chars().count() < 20 {
        score -= 0.3;
    }
    if !PARTICLE.is_match(question_text) {
        score -= 0.2;
    }

    let garbage_runs = UPPERCASE_RUN.find_iter(question_text).count();
    score -= 0.1 * garbage_runs.min(5) as f64;

    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnswerLabel;

    fn four_choices() -> Choices {
        AnswerLabel::ALL
            .iter()
            .map(|&label| (label, "選択肢".to_string()))
            .collect()
    }

    #[test]
    fn test_clean_question_scores_full() {
        let body = "このシステムの稼働率を高める構成はどれか。";
        assert_eq!(assess_quality(body, &four_choices()), 1.0);
    }

    #[test]
    fn test_missing_choices_penalty() {
        let body = "このシステムの稼働率を高める構成はどれか。";
        let mut choices = four_choices();
        choices.remove(&AnswerLabel::E);
        assert!((assess_quality(body, &choices) - 0.7).abs() < 1e-9);

        let one: Choices = [(AnswerLabel::A, "x".to_string())].into();
        // 4つ未満と2つ未満の減点は重なる
        assert!((assess_quality(body, &one) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_short_body_penalty() {
        let score = assess_quality("短いのは減点。", &four_choices());
        assert!((score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_no_particle_penalty() {
        // 20文字以上だが助詞を含まない
        let body = "ABC DEF GHI JKL MNO PQR STU VWX YZ1 234";
        let score = assess_quality(body, &four_choices());
        assert!((score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_uppercase_runs_capped() {
        // 大量の大文字連続があってもスコアは0未満にならない
        let body = "AAAAA BBBBB CCCCC DDDDD EEEEE FFFFF GGGGG HHHHH";
        let score = assess_quality(body, &Choices::new());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_score_always_in_unit_range() {
        let cases = [
            ("", Choices::new()),
            ("短い", Choices::new()),
            ("この稼働率の計算方法はどれか。選択肢も完全である。", four_choices()),
        ];
        for (body, choices) in cases {
            let score = assess_quality(body, &choices);
            assert!((0.0..=1.0).contains(&score));
        }
    }
}
