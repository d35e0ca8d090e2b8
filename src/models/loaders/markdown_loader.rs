use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

use crate::models::ExamSitting;

/// markdownディレクトリから全試験ドキュメントを読み込む
///
/// `<dir>/<exam_id>_ap/<exam_id>_ap.md` の形のファイルをID順に読む。
/// 個別ファイルの読み込み失敗は警告してスキップする。
pub async fn load_all_sittings(markdown_dir: &str) -> Result<Vec<ExamSitting>> {
    let dir = PathBuf::from(markdown_dir);
    if !dir.exists() {
        anyhow::bail!("ディレクトリが存在しません: {}", markdown_dir);
    }

    let mut md_files = Vec::new();
    let mut entries = fs::read_dir(&dir)
        .await
        .with_context(|| format!("ディレクトリを読み取れません: {}", markdown_dir))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if path.is_dir() && name.ends_with("_ap") {
            let md_path = path.join(format!("{name}.md"));
            if md_path.exists() {
                md_files.push(md_path);
            }
        }
    }
    md_files.sort();

    let mut sittings = Vec::new();
    for md_path in md_files {
        match load_sitting(&md_path).await {
            Ok(sitting) => {
                tracing::info!("読み込み: {} ({})", sitting.id, sitting.title);
                sittings.push(sitting);
            }
            Err(e) => {
                tracing::warn!("読み込み失敗 {}: {}", md_path.display(), e);
            }
        }
    }

    Ok(sittings)
}

/// 1つの試験Markdownを読み込む
///
/// 試験IDは親ディレクトリ名から `_ap` を外したもの。
pub async fn load_sitting(md_path: &Path) -> Result<ExamSitting> {
    let markdown = fs::read_to_string(md_path)
        .await
        .with_context(|| format!("Markdownを読み込めません: {}", md_path.display()))?;

    let dir_name = md_path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|s| s.to_str())
        .with_context(|| format!("ディレクトリ名を取得できません: {}", md_path.display()))?;
    let exam_id = dir_name.trim_end_matches("_ap");

    Ok(ExamSitting::new(exam_id, markdown))
}
