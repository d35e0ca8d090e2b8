//! パイプライン全体の進行管理
//!
//! 試験回の読み込み → 並列抽出 → 分類 → 重要度付与 → 選定 → 出力 を
//! この順で実行する。抽出はセマフォで同時実行数を制限したバッチ処理。

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{error, info};

use crate::classify::{calculate_importance, classify_question, classify_subcategory};
use crate::config::Config;
use crate::models::loaders::load_all_sittings;
use crate::models::{ExamSitting, Question};
use crate::orchestrator::process_sitting;
use crate::output::{build_envelope, write_envelope};
use crate::selection::select_questions;
use crate::utils::logging;

/// パイプラインの実行コンテキスト。
pub struct App {
    config: Config,
    sittings: Vec<ExamSitting>,
}

impl App {
    /// 設定を受け取り、入力ディレクトリから全試験回を読み込む
    pub async fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config);

        let sittings = load_all_sittings(&config.markdown_dir)
            .await
            .with_context(|| format!("試験データの読み込みに失敗: {}", config.markdown_dir))?;
        logging::log_sittings_loaded(sittings.len());

        Ok(Self { config, sittings })
    }

    /// パイプラインを最後まで実行する
    pub async fn run(self) -> Result<()> {
        if self.sittings.is_empty() {
            bail!("処理対象の試験データがありません");
        }
        let source_exams = self.sittings.len();

        let mut questions = self.extract_all().await?;
        if questions.is_empty() {
            bail!("どの試験回からも設問を抽出できませんでした");
        }
        info!("📝 抽出合計: {} 問", questions.len());

        // 分類 → 重要度
        for question in questions.iter_mut() {
            let category = classify_question(question);
            question.category = category.name;
            question.subcategory = classify_subcategory(question, category);
        }
        calculate_importance(&mut questions);
        logging::log_category_distribution(&questions);

        // 選定 → 出力
        let total_available = questions.len();
        let selected = select_questions(&questions, self.config.target_count);
        let envelope = build_envelope(&selected, source_exams, total_available);
        write_envelope(&envelope, Path::new(&self.config.output_file)).await?;

        logging::print_final_stats(&selected, total_available);
        Ok(())
    }

    /// 全試験回をバッチ単位で並列抽出する
    ///
    /// 失敗した試験回はログに残してスキップし、成功分だけを集める。
    async fn extract_all(&self) -> Result<Vec<Question>> {
        let batch_size = self.config.max_concurrent_sittings.max(1);
        let total_batches = (self.sittings.len() + batch_size - 1) / batch_size;
        let semaphore = Arc::new(Semaphore::new(batch_size));

        let mut questions = Vec::new();
        for (batch_index, batch) in self.sittings.chunks(batch_size).enumerate() {
            logging::log_batch_start(batch_index + 1, total_batches, batch.len());

            let mut handles = Vec::with_capacity(batch.len());
            for sitting in batch {
                let sitting = sitting.clone();
                let permit = semaphore.clone().acquire_owned().await?;
                let verbose = self.config.verbose_logging;
                handles.push(tokio::spawn(async move {
                    let _permit = permit;
                    let exam_id = sitting.id.clone();
                    let result = process_sitting(&sitting);
                    if verbose {
                        if let Ok(qs) = &result {
                            for q in qs {
                                info!("  問{:>2} [{}]", q.question_number, q.field.code());
                            }
                        }
                    }
                    (exam_id, result)
                }));
            }

            let mut succeeded = 0;
            let mut failed = 0;
            for joined in join_all(handles).await {
                match joined {
                    Ok((exam_id, Ok(extracted))) => {
                        succeeded += 1;
                        info!("  ✅ {}: {} 問", exam_id, extracted.len());
                        questions.extend(extracted);
                    }
                    Ok((exam_id, Err(e))) => {
                        failed += 1;
                        error!("  ❌ {}: {}", exam_id, e);
                    }
                    Err(e) => {
                        failed += 1;
                        error!("  ❌ タスク異常終了: {}", e);
                    }
                }
            }
            logging::log_batch_complete(batch_index + 1, succeeded, failed);
        }
        Ok(questions)
    }
}
