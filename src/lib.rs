//! 応用情報技術者試験 (AP) の過去問 Markdown から設問コーパスを構築する
//! パイプライン。
//!
//! # 処理の流れ
//!
//! 1. 解答表の解析 — 3 種の戦略で問番号 → (正解, 分野) の表を得る
//! 2. 問題セグメンテーション — OCR テキストを設問ブロックに分割
//! 3. 照合 — 検出番号と解答表を突き合わせ、残りは出現順で補完
//! 4. 選択肢・本文抽出 — ア/イ/ウ/エ の選択肢と設問本文を分離
//! 5. 品質評価 — 減点方式で 0.0〜1.0 のスコアを付ける
//! 6. カテゴリ分類 — キーワードと出題範囲で 21 カテゴリへ割り当て
//! 7. 重要度推定 — カテゴリ出題頻度の五分位でティア 1〜5
//! 8. コーパス選定 — 品質フィルタとカテゴリ比例割当で目標件数に絞る
//!
//! # レイヤー構成
//!
//! - `models` — ドメイン型と Markdown ローダー
//! - `taxonomy` — 21 カテゴリのキーワード表
//! - `extract` — ステージ 1〜5
//! - `classify` — ステージ 6〜7
//! - `selection` / `output` — ステージ 8 と JSON 出力
//! - `orchestrator` — 並列実行の進行管理

pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod orchestrator;
pub mod output;
pub mod selection;
pub mod taxonomy;
pub mod utils;

pub use config::Config;
pub use error::{ExtractError, Result};
pub use models::{AnswerLabel, ExamSitting, Field, Question};
pub use orchestrator::{process_sitting, App};
