//! 問題セグメンタ (ステージ2)
//!
//! 午前問題セクションからページごとのOCRテキストを連結し、問番号
//! マーカーで問題ごとのブロックに分割する。各ブロックには出典ページの
//! 画像パスを対応付ける。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::RawQuestionBlock;

/// ページ見出し → 画像リンク → OCRテキスト のページブロック
static PAGE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)###\s*ページ\s*\d+\s*\n.*?!\[.*?\]\((images/[^)]+)\).*?<details><summary>テキスト \(OCR\)</summary>\s*(.*?)\s*</details>",
    )
    .unwrap()
});

/// 問番号マーカー (OCRで問が誤認識される変種を含む)
pub static QUESTION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?:問題|問|間|Bil|fal|fa\]|igs|PRO|BIT|BIL)\s*(\d{1,2})\s").unwrap()
});

/// 検出番号として許容する上限 (OCRが80を89と読むケースに対応)
const MAX_DETECTED_NUMBER: u32 = 89;

/// 連結テキスト内でのページの占有範囲
#[derive(Debug, Clone)]
pub struct PageSpan {
    pub start: usize,
    pub end: usize,
    pub image_path: String,
}

/// `## 午前問題` セクションからOCRテキストとページ対応表を取り出す
///
/// ページブロックが1つも見つからなければ None (試験はスキップ)。
pub fn extract_question_section(markdown: &str, exam_id: &str) -> Option<(String, Vec<PageSpan>)> {
    let start = markdown.find("## 午前問題")?;
    let end = markdown.find("## 午前解答")?;
    if end <= start {
        return None;
    }
    let section = &markdown[start..end];

    let mut text = String::new();
    let mut page_map = Vec::new();
    for caps in PAGE_BLOCK.captures_iter(section) {
        let img_rel = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let ocr_text = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

        if !text.is_empty() {
            text.push_str("\n\n");
        }
        let span_start = text.len();
        text.push_str(ocr_text);
        page_map.push(PageSpan {
            start: span_start,
            end: text.len(),
            image_path: format!("past_exams/markdown/{}_ap/{}", exam_id, img_rel),
        });
    }

    if text.is_empty() {
        None
    } else {
        Some((text, page_map))
    }
}

/// OCRテキストを問題ごとのブロックに分割する
///
/// マーカーが1つも無ければ空を返す。ブロックの範囲はマーカーから
/// 次のマーカー (または末尾) まで。
pub fn split_questions(ocr_text: &str, page_map: &[PageSpan]) -> Vec<RawQuestionBlock> {
    let markers: Vec<(u32, usize)> = QUESTION_MARKER
        .captures_iter(ocr_text)
        .filter_map(|caps| {
            let qnum: u32 = caps.get(1)?.as_str().parse().ok()?;
            let start = caps.get(0)?.start();
            (1..=MAX_DETECTED_NUMBER)
                .contains(&qnum)
                .then_some((qnum, start))
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, &(qnum, start))| {
            let end = markers
                .get(i + 1)
                .map(|&(_, next_start)| next_start)
                .unwrap_or(ocr_text.len());
            RawQuestionBlock {
                detected_number: qnum,
                text: ocr_text[start..end].trim().to_string(),
                image_path: find_image(page_map, start),
            }
        })
        .collect()
}

/// テキスト位置を含むページの画像パスを返す
///
/// どのページにも含まれなければ開始位置が最も近いページで代用する。
fn find_image(page_map: &[PageSpan], pos: usize) -> String {
    for span in page_map {
        if span.start <= pos && pos < span.end {
            return span.image_path.clone();
        }
    }
    page_map
        .iter()
        .min_by_key(|span| span.start.abs_diff(pos))
        .map(|span| span.image_path.clone())
        .unwrap_or_default()
}
