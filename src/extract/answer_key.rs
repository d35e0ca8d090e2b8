//! 解答キーパーサー (ステージ1)
//!
//! OCR由来の午前解答セクションから {問番号 → (正解, 分野)} を復元する。
//! レイアウトの異なる3方式を特異度の高い順に試し、最初に閾値以上の
//! エントリが取れた方式の結果を採用する。

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::{AnswerKey, AnswerKeyEntry, AnswerLabel, Field};

/// 採用に必要な最低エントリ数
///
/// ページ単位のOCR失敗で数問欠けることはあるが、80問の過半を失う
/// ことはない、という観察に基づく閾値。
pub const MIN_ENTRIES: usize = 40;

/// 午前問題の問番号上限
const MAX_QUESTION_NUMBER: u32 = 80;

static DETAIL_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<details><summary>テキスト \(OCR\)</summary>\s*(.*?)\s*</details>").unwrap()
});

/// 表形式の3つ組: 問N 解答記号 分野記号 (問の前置語はOCR誤認識の変種を含む)
static TABULAR_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:問|間|fal|fa\]|fl\]|igs)\s*(\d+)\s+([アイウエァx=4])\s+([TMS])").unwrap()
});

static QUESTION_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^問\s*(\d+)").unwrap());

type Strategy = fn(&str, &str) -> AnswerKey;

/// 方式は特異度の高い順に試す
const STRATEGIES: &[(&str, Strategy)] = &[
    ("表形式", parse_tabular),
    ("分野記号付き", parse_fielded),
    ("4列形式", parse_four_column),
];

/// 解答キーをパースする
///
/// 戻り値が空ならこの試験は下流でスキップされる。
pub fn parse_answer_key(markdown: &str, exam_id: &str) -> AnswerKey {
    let Some(section) = answer_section(markdown) else {
        return AnswerKey::new();
    };
    let flat = flatten_details(section);

    for (name, strategy) in STRATEGIES {
        let answers = strategy(&flat, exam_id);
        if answers.len() >= MIN_ENTRIES {
            debug!("{}: 解答キーを{}として解釈 ({}問)", exam_id, name, answers.len());
            return answers;
        }
    }
    AnswerKey::new()
}

/// `## 午前解答` セクションを切り出す
fn answer_section(markdown: &str) -> Option<&str> {
    let start = markdown.find("## 午前解答")?;
    let body = &markdown[start + "## 午前解答".len()..];
    let end = body.find("\n## ").unwrap_or(body.len());
    Some(&body[..end])
}

/// detailsブロック内のOCRテキストを連結して平坦化する
///
/// ブロックが1つもなければセクション本文をそのまま使う。
fn flatten_details(section: &str) -> String {
    let blocks: Vec<&str> = DETAIL_BLOCK
        .captures_iter(section)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();
    if blocks.is_empty() {
        section.to_string()
    } else {
        blocks.join("\n")
    }
}

/// 表形式: 1行に「問N 記号 分野」の3つ組が複数並ぶ
fn parse_tabular(flat: &str, _exam_id: &str) -> AnswerKey {
    let mut answers = AnswerKey::new();
    for caps in TABULAR_ENTRY.captures_iter(flat) {
        let Ok(qnum) = caps[1].parse::<u32>() else {
            continue;
        };
        if !(1..=MAX_QUESTION_NUMBER).contains(&qnum) {
            continue;
        }
        let Some(answer) = AnswerLabel::normalize(&caps[2]) else {
            continue;
        };
        let Some(field) = Field::from_glyph(&caps[3]) else {
            continue;
        };
        answers.insert(qnum, AnswerKeyEntry { answer, field });
    }
    answers
}

/// 分野記号付き: 問番号行 → 解答行 → 分野行 の3行組
///
/// セクション中に全角のＴ/Ｍ/Ｓが現れる場合にのみ成立する。
fn parse_fielded(flat: &str, _exam_id: &str) -> AnswerKey {
    let has_field_glyph = ["Ｔ", "Ｍ", "Ｓ"].iter().any(|g| flat.contains(g));
    if !has_field_glyph {
        return AnswerKey::new();
    }

    let lines = nonempty_lines(flat);
    let mut answers = AnswerKey::new();
    let mut i = 0;
    while i < lines.len() {
        if let Some(qnum) = question_number(lines[i]) {
            if i + 2 < lines.len() {
                if let Some(answer) = AnswerLabel::normalize(lines[i + 1]) {
                    let field = Field::from_glyph(lines[i + 2]).unwrap_or(Field::Technology);
                    answers.insert(qnum, AnswerKeyEntry { answer, field });
                    i += 3;
                    continue;
                }
            }
        }
        i += 1;
    }
    answers
}

/// 4列形式: 分野記号が無く、問1/21/41/61が同じ行グループに並ぶ
///
/// 問番号行の直後2行以内から解答記号を探し、分野は年度ごとの
/// 番号境界から位置的に推定する。
fn parse_four_column(flat: &str, exam_id: &str) -> AnswerKey {
    let lines = nonempty_lines(flat);
    let mut answers = AnswerKey::new();
    for (i, line) in lines.iter().enumerate() {
        let Some(qnum) = question_number(line) else {
            continue;
        };
        for candidate in lines.iter().skip(i + 1).take(2) {
            if let Some(answer) = AnswerLabel::normalize(candidate) {
                let field = Field::for_number(exam_id, qnum);
                answers.insert(qnum, AnswerKeyEntry { answer, field });
                break;
            }
        }
    }
    answers
}

fn nonempty_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// 行頭の「問N」から番号を取り出す (1..=80のみ)
fn question_number(line: &str) -> Option<u32> {
    let caps = QUESTION_LINE.captures(line)?;
    let qnum: u32 = caps[1].parse().ok()?;
    (1..=MAX_QUESTION_NUMBER).contains(&qnum).then_some(qnum)
}
