use serde::{Deserialize, Serialize};

/// 解答記号
///
/// 四択問題の選択肢ラベル (ア/イ/ウ/エ)。並び順はカナ順に一致する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnswerLabel {
    #[serde(rename = "ア")]
    A,
    #[serde(rename = "イ")]
    I,
    #[serde(rename = "ウ")]
    U,
    #[serde(rename = "エ")]
    E,
}

/// OCR誤認識の正規化テーブル
///
/// ア→ァ/7、イ→4、エ→x/= の読み違いが実データで確認されている。
static OCR_CONFUSIONS: phf::Map<&'static str, AnswerLabel> = phf::phf_map! {
    "ア" => AnswerLabel::A,
    "ァ" => AnswerLabel::A,
    "7" => AnswerLabel::A,
    "イ" => AnswerLabel::I,
    "4" => AnswerLabel::I,
    "ウ" => AnswerLabel::U,
    "エ" => AnswerLabel::E,
    "x" => AnswerLabel::E,
    "=" => AnswerLabel::E,
};

impl AnswerLabel {
    /// 全ラベル (定義順 = カナ順)
    pub const ALL: [AnswerLabel; 4] = [
        AnswerLabel::A,
        AnswerLabel::I,
        AnswerLabel::U,
        AnswerLabel::E,
    ];

    /// 正規の記号
    pub fn as_str(self) -> &'static str {
        match self {
            AnswerLabel::A => "ア",
            AnswerLabel::I => "イ",
            AnswerLabel::U => "ウ",
            AnswerLabel::E => "エ",
        }
    }

    /// OCR由来のトークンを正規の記号に正規化する
    ///
    /// 既知の誤認識テーブルを引き、外れた場合はトークン内に正規の
    /// 記号が埋もれていないかを探す。
    pub fn normalize(raw: &str) -> Option<Self> {
        let token = raw.trim();
        if let Some(&label) = OCR_CONFUSIONS.get(token) {
            return Some(label);
        }
        for label in Self::ALL {
            if token.contains(label.as_str()) {
                return Some(label);
            }
        }
        None
    }
}

impl std::fmt::Display for AnswerLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
