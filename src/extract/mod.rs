//! 抽出レイヤー
//!
//! Markdown 化された過去問ファイルから設問データを取り出すまでの各段階。
//! 解答表の解析 → 設問分割 → 照合 → 選択肢・本文抽出 → 品質評価 の順に適用する。

pub mod answer_key;
pub mod choices;
pub mod quality;
pub mod reconcile;
pub mod segmenter;

pub use answer_key::{parse_answer_key, MIN_ENTRIES};
pub use choices::{extract_choices, extract_question_body, normalize_ocr};
pub use quality::assess_quality;
pub use reconcile::{positional_count, reconcile_questions, ReconciledQuestions};
pub use segmenter::{extract_question_section, split_questions, PageSpan};
