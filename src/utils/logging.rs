//! ログ出力
//!
//! tracing の初期化と、進捗表示用のヘルパー。

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::Question;
use crate::taxonomy::TAXONOMY;

/// tracing を初期化する (RUST_LOG 未設定時は info)
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// 起動時の設定サマリを表示する
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 応用情報技術者試験 設問抽出パイプライン");
    info!("{}", "=".repeat(60));
    info!("  📂 入力ディレクトリ: {}", config.markdown_dir);
    info!("  💾 出力ファイル: {}", config.output_file);
    info!("  🎯 目標件数: {} 問", config.target_count);
    info!("  ⚡ 並列数: {}", config.max_concurrent_sittings);
}

pub fn log_sittings_loaded(count: usize) {
    info!("📚 {} 回分の試験データを読み込みました", count);
}

pub fn log_batch_start(batch_index: usize, total_batches: usize, batch_size: usize) {
    info!(
        "📦 バッチ {}/{} を処理中 ({} 回分)",
        batch_index, total_batches, batch_size
    );
}

pub fn log_batch_complete(batch_index: usize, succeeded: usize, failed: usize) {
    info!(
        "✅ バッチ {} 完了: 成功 {} / 失敗 {}",
        batch_index, succeeded, failed
    );
}

/// カテゴリ別の件数と平均重要度をタクソノミ定義順で表示する
pub fn log_category_distribution(questions: &[Question]) {
    info!("{}", "=".repeat(60));
    info!("📊 カテゴリ別分布 ({} 問)", questions.len());
    for category in TAXONOMY {
        if let Some((count, avg_importance)) = category_stats(questions, category.name) {
            info!(
                "  [{}] {}: {} 問 (平均重要度 {:.1})",
                category.field.code(),
                category.name,
                count,
                avg_importance
            );
        }
    }
}

/// カテゴリの件数と平均重要度 (該当 0 件なら None)
fn category_stats(questions: &[Question], category: &str) -> Option<(usize, f64)> {
    let mut count = 0usize;
    let mut importance_sum = 0u32;
    for q in questions.iter().filter(|q| q.category == category) {
        count += 1;
        importance_sum += u32::from(q.importance);
    }
    (count > 0).then(|| (count, f64::from(importance_sum) / count as f64))
}

/// 最終結果のサマリを表示する (件数の多いカテゴリ順)
pub fn print_final_stats(selected: &[Question], total_available: usize) {
    let mut counts: Vec<(&str, usize)> = TAXONOMY
        .iter()
        .map(|c| {
            let count = selected.iter().filter(|q| q.category == c.name).count();
            (c.name, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    info!("{}", "=".repeat(60));
    info!("🎉 抽出完了");
    info!("{}", "=".repeat(60));
    info!("  候補総数: {} 問", total_available);
    info!("  採用数: {} 問", selected.len());
    for (name, count) in counts {
        info!("    {}: {} 問", name, count);
    }
    info!("{}", "=".repeat(60));
}
