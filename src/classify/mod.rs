//! 分類レイヤー
//!
//! 抽出済みの設問にカテゴリ・サブカテゴリ・重要度を付与する。

pub mod category;
pub mod importance;

pub use category::{classify_question, classify_subcategory};
pub use importance::calculate_importance;
