//! 選択肢・本文抽出 (ステージ4)
//!
//! 1問分のOCRテキストを問題文本体と最大4つの選択肢に分解する。
//! レイアウトの揺れに対応するため3方式を順に試す。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{AnswerLabel, Choices};

/// OCRが「エ」を「エエ」と重ねて読む癖
static DOUBLED_E: Lazy<Regex> = Lazy::new(|| Regex::new(r"エエ\s").unwrap());

/// 短い選択肢4つが1行に並ぶインライン形式
static INLINE_COMPACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ア\s+(\S+)\s+イ\s+(\S+)\s+ウ\s+(\S+)\s+エ\s+(\S+)").unwrap());

/// 行末までの長い値を許すゆるいインライン形式
static INLINE_LOOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)ア\s+(.+?)\s+イ\s+(.+?)\s+ウ\s+(.+?)\s+エ\s+(.+?)$").unwrap());

/// 先頭の問番号トークン
static NUMBER_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:問題|問|間|Bil|fal|fa\]|igs|PRO|BIT|BIL)\s*\d+\s*").unwrap()
});

/// 次問の開始とみなす行頭トークン
static NEXT_QUESTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:問|間|Bil|fal|fa\]|igs|PRO|BIT)").unwrap());

type ChoiceStrategy = fn(&str) -> Option<Choices>;

/// 方式は厳密な順に試す。行走査は常に「成立」するため必ず最後に置く。
const STRATEGIES: &[ChoiceStrategy] = &[inline_compact, inline_loose, line_scan];

/// 問題テキストから選択肢を抽出する
///
/// どの方式でも選択肢が見つからなければ空のマップ (品質スコア側で
/// 減点される)。同じ入力に対して常に同じ結果を返す。
pub fn extract_choices(text: &str) -> Choices {
    let normalized = normalize_ocr(text);
    for strategy in STRATEGIES {
        if let Some(choices) = strategy(&normalized) {
            return choices;
        }
    }
    Choices::new()
}

/// 既知の繰り返し記号アーティファクトを正規化する
pub fn normalize_ocr(text: &str) -> String {
    DOUBLED_E.replace_all(text, "エ ").into_owned()
}

/// 方式1: 1行に4つの短い選択肢
fn inline_compact(text: &str) -> Option<Choices> {
    for line in text.lines() {
        if let Some(caps) = INLINE_COMPACT.captures(line) {
            return Some(choices_from_captures(&caps));
        }
    }
    None
}

/// 方式2: ブロック全体に対するゆるいインライン一致
fn inline_loose(text: &str) -> Option<Choices> {
    INLINE_LOOSE
        .captures(text)
        .map(|caps| choices_from_captures(&caps))
}

fn choices_from_captures(caps: &regex::Captures<'_>) -> Choices {
    AnswerLabel::ALL
        .iter()
        .zip(1..)
        .filter_map(|(&label, group)| {
            caps.get(group)
                .map(|m| (label, m.as_str().trim().to_string()))
        })
        .collect()
}

/// 方式3: 行頭の記号で始まる行を選択肢の開始とみなす行走査
///
/// 継続行は直前の選択肢に連結し、次問のマーカー行でブロックを打ち切る。
/// 見つかった分だけ (0個でも) 返す。
fn line_scan(text: &str) -> Option<Choices> {
    let mut collected: Choices = Choices::new();
    let mut current: Option<AnswerLabel> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((label, rest)) = line_opens_choice(line) {
            current = Some(label);
            if !rest.is_empty() {
                append_choice_line(&mut collected, label, rest);
            }
            continue;
        }

        if let Some(label) = current {
            if NEXT_QUESTION.is_match(line) {
                break;
            }
            append_choice_line(&mut collected, label, line);
        }
    }

    Some(collected)
}

fn append_choice_line(choices: &mut Choices, label: AnswerLabel, line: &str) {
    let entry = choices.entry(label).or_default();
    if !entry.is_empty() {
        entry.push(' ');
    }
    entry.push_str(line);
}

/// 行が選択肢記号で始まるか (記号の直後に空白が必要)
fn line_opens_choice(line: &str) -> Option<(AnswerLabel, &str)> {
    for label in AnswerLabel::ALL {
        if let Some(rest) = line.strip_prefix(label.as_str()) {
            if rest.starts_with(char::is_whitespace) {
                return Some((label, rest.trim()));
            }
        }
    }
    None
}

/// 問題文本体 (選択肢を除いた部分) を取り出す
///
/// 先頭の問番号トークンを外し、最初の選択肢領域より前の行を本文と
/// する。何も残らなければ正規化済みテキスト全体で代用する。
pub fn extract_question_body(text: &str) -> String {
    let normalized = normalize_ocr(text);
    let body = NUMBER_PREFIX.replace(&normalized, "");

    let mut body_lines = Vec::new();
    for line in body.lines() {
        let stripped = line.trim();
        if INLINE_COMPACT.is_match(stripped) {
            break;
        }
        if matches!(line_opens_choice(stripped), Some((AnswerLabel::A, _))) {
            break;
        }
        body_lines.push(line);
    }

    let result = body_lines.join("\n").trim().to_string();
    if result.is_empty() {
        body.trim().to_string()
    } else {
        result
    }
}
