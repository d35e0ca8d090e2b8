use serde::{Deserialize, Serialize};

/// 出題分野
///
/// 午前問題の三大分類。解答キーに記号が無い形式では、年度ごとの
/// 問番号境界から位置的に推定する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    /// テクノロジ系
    #[serde(rename = "T")]
    Technology,
    /// マネジメント系
    #[serde(rename = "M")]
    Management,
    /// ストラテジ系
    #[serde(rename = "S")]
    Strategy,
}

/// 年度ごとのT/M/S境界 (t_end, m_end)。特殊な年度のみ列挙する。
static FIELD_BOUNDARIES: phf::Map<&'static str, (u32, u32)> = phf::phf_map! {
    // 2009-2010: T(1-49), M(50-60), S(61-80)
    "2009h21a" => (49, 60),
    "2009h21h" => (49, 60),
    "2010h22a" => (49, 60),
    "2010h22h" => (49, 60),
    // 2011h23a: T(1-49), M(50-59), S(60-80)
    "2011h23a" => (49, 59),
    "2011h23tokubetsu" => (49, 60),
};

/// 既定の境界: T(1-50), M(51-60), S(61-80)
const DEFAULT_BOUNDARY: (u32, u32) = (50, 60);

impl Field {
    /// 分野記号 (半角)
    pub fn code(self) -> &'static str {
        match self {
            Field::Technology => "T",
            Field::Management => "M",
            Field::Strategy => "S",
        }
    }

    /// 分野の日本語名
    pub fn name(self) -> &'static str {
        match self {
            Field::Technology => "テクノロジ系",
            Field::Management => "マネジメント系",
            Field::Strategy => "ストラテジ系",
        }
    }

    /// 分野記号から解析する (全角・半角どちらも受け付ける)
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        match glyph.trim() {
            "T" | "Ｔ" => Some(Field::Technology),
            "M" | "Ｍ" => Some(Field::Management),
            "S" | "Ｓ" => Some(Field::Strategy),
            _ => None,
        }
    }

    /// 問番号から分野を位置的に推定する
    pub fn for_number(exam_id: &str, question_number: u32) -> Self {
        let (t_end, m_end) = FIELD_BOUNDARIES
            .get(exam_id)
            .copied()
            .unwrap_or(DEFAULT_BOUNDARY);
        if question_number <= t_end {
            Field::Technology
        } else if question_number <= m_end {
            Field::Management
        } else {
            Field::Strategy
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_boundary() {
        assert_eq!(Field::for_number("2024r06a", 1), Field::Technology);
        assert_eq!(Field::for_number("2024r06a", 50), Field::Technology);
        assert_eq!(Field::for_number("2024r06a", 51), Field::Management);
        assert_eq!(Field::for_number("2024r06a", 60), Field::Management);
        assert_eq!(Field::for_number("2024r06a", 61), Field::Strategy);
        assert_eq!(Field::for_number("2024r06a", 80), Field::Strategy);
    }

    #[test]
    fn test_special_boundaries() {
        // 2009年度は T が49問まで
        assert_eq!(Field::for_number("2009h21a", 50), Field::Management);
        // 2011h23a は M が59問まで
        assert_eq!(Field::for_number("2011h23a", 60), Field::Strategy);
        assert_eq!(Field::for_number("2011h23tokubetsu", 60), Field::Management);
    }

    #[test]
    fn test_from_glyph() {
        assert_eq!(Field::from_glyph("T"), Some(Field::Technology));
        assert_eq!(Field::from_glyph("Ｍ"), Some(Field::Management));
        assert_eq!(Field::from_glyph(" Ｓ "), Some(Field::Strategy));
        assert_eq!(Field::from_glyph("X"), None);
    }
}
