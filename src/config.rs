//! 設定管理
//!
//! 既定値 → config.toml → 環境変数の順に上書きする。

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

/// パイプライン全体の設定。
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 過去問 Markdown のルートディレクトリ
    pub markdown_dir: String,
    /// 出力 JSON のパス
    pub output_file: String,
    /// コーパスの目標件数
    pub target_count: usize,
    /// 同時に処理する試験回数の上限
    pub max_concurrent_sittings: usize,
    /// 設問単位の詳細ログを出すか
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            markdown_dir: "past_exams/markdown".to_string(),
            output_file: "data/ap_questions_1000.json".to_string(),
            target_count: 1000,
            max_concurrent_sittings: 8,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 既定値に config.toml と環境変数を重ねて読み込む
    pub fn load() -> Self {
        let config = Self::from_file(Path::new("config.toml")).unwrap_or_default();
        config.with_env_overrides()
    }

    fn from_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                info!("📄 設定ファイルを読み込みました: {}", path.display());
                Some(config)
            }
            Err(e) => {
                warn!("設定ファイルの解析に失敗、既定値を使用します: {e}");
                None
            }
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = std::env::var("AP_MARKDOWN_DIR") {
            self.markdown_dir = v;
        }
        if let Ok(v) = std::env::var("AP_OUTPUT_FILE") {
            self.output_file = v;
        }
        if let Some(v) = env_parse("AP_TARGET_COUNT") {
            self.target_count = v;
        }
        if let Some(v) = env_parse("AP_MAX_CONCURRENT") {
            self.max_concurrent_sittings = v;
        }
        if let Some(v) = env_parse("AP_VERBOSE") {
            self.verbose_logging = v;
        }
        self
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.parse().ok()
}
