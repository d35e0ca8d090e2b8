use once_cell::sync::Lazy;
use regex::Regex;

/// 試験IDの形式: 西暦4桁 + 元号(r/h) + 元号年2桁 + 季節コード
static EXAM_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})(r|h)(\d{2})(h|a|o|tokubetsu)").unwrap());

/// 1回分の試験実施
///
/// 読み込み後は不変。markdown には問題セクションと解答セクションを
/// 含むドキュメント全文が入る。
#[derive(Debug, Clone)]
pub struct ExamSitting {
    /// 試験ID (例: "2024r06a")
    pub id: String,
    /// 表示用試験名 (例: "令和6年度秋期")
    pub title: String,
    /// Markdownドキュメント全文
    pub markdown: String,
}

impl ExamSitting {
    pub fn new(id: impl Into<String>, markdown: impl Into<String>) -> Self {
        let id = id.into();
        let title = make_title(&id);
        Self {
            id,
            title,
            markdown: markdown.into(),
        }
    }
}

/// 試験IDから日本語試験名を生成する
///
/// 形式外のIDはそのまま返す。
pub fn make_title(exam_id: &str) -> String {
    let Some(caps) = EXAM_ID_PATTERN.captures(exam_id) else {
        return exam_id.to_string();
    };
    let era = if &caps[2] == "r" { "令和" } else { "平成" };
    let era_year: u32 = caps[3].parse().unwrap_or(0);
    let season = match &caps[4] {
        "h" => "春期",
        "a" => "秋期",
        "o" => "10月",
        _ => "特別",
    };
    format!("{era}{era_year}年度{season}")
}
