//! 固定カテゴリ分類表
//!
//! 21カテゴリ × 子カテゴリのキーワード表。起動時から不変の参照データで、
//! 実行中に書き換えられることはない。分類のタイブレークは定義順の先勝ち。

mod tables;

pub use tables::TAXONOMY;

use crate::models::Field;

/// カテゴリ定義
#[derive(Debug)]
pub struct Category {
    pub name: &'static str,
    /// 本文+選択肢との部分一致で数えるキーワード
    pub keywords: &'static [&'static str],
    /// このカテゴリが出題されやすい問番号の範囲 (両端含む)
    pub range: (u32, u32),
    pub field: Field,
    pub subcategories: &'static [Subcategory],
}

/// 子カテゴリ定義
#[derive(Debug)]
pub struct Subcategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

impl Category {
    /// 問番号が定義範囲に収まるか
    pub fn contains_number(&self, question_number: u32) -> bool {
        self.range.0 <= question_number && question_number <= self.range.1
    }
}

/// 指定分野のカテゴリを定義順に返す
pub fn categories_for_field(field: Field) -> impl Iterator<Item = &'static Category> {
    TAXONOMY.iter().filter(move |c| c.field == field)
}

/// 名前でカテゴリを引く
pub fn find(name: &str) -> Option<&'static Category> {
    TAXONOMY.iter().find(|c| c.name == name)
}

/// キーワードでも番号でも分類できない場合の分野別デフォルト
pub fn default_category(field: Field) -> &'static Category {
    let name = match field {
        Field::Technology => "基礎理論",
        Field::Management => "サービスマネジメント",
        Field::Strategy => "経営戦略マネジメント",
    };
    find(name).unwrap_or(&TAXONOMY[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_has_21_categories() {
        assert_eq!(TAXONOMY.len(), 21);
    }

    #[test]
    fn test_category_names_unique() {
        let mut names: Vec<_> = TAXONOMY.iter().map(|c| c.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), TAXONOMY.len());
    }

    #[test]
    fn test_every_category_has_subcategories() {
        for category in TAXONOMY {
            assert!(
                !category.subcategories.is_empty(),
                "{} に子カテゴリがない",
                category.name
            );
            assert!(!category.keywords.is_empty());
        }
    }

    #[test]
    fn test_ranges_within_question_domain() {
        for category in TAXONOMY {
            let (lo, hi) = category.range;
            assert!(1 <= lo && lo <= hi && hi <= 80, "{} の範囲が不正", category.name);
        }
    }

    #[test]
    fn test_default_categories_exist() {
        assert_eq!(default_category(Field::Technology).name, "基礎理論");
        assert_eq!(default_category(Field::Management).name, "サービスマネジメント");
        assert_eq!(default_category(Field::Strategy).name, "経営戦略マネジメント");
    }

    #[test]
    fn test_categories_for_field_filters() {
        for category in categories_for_field(Field::Management) {
            assert_eq!(category.field, Field::Management);
        }
        assert_eq!(categories_for_field(Field::Management).count(), 3);
    }
}
