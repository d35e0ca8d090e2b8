//! 抽出から出力構築までの一気通貫テスト。
//!
//! 合成した試験回 Markdown をディスクに置き、ローダー → 抽出 →
//! 分類 → 重要度 → 選定 → 出力構築 の全段を通す。

use std::collections::BTreeMap;

use ap_question_extract::classify::{
    calculate_importance, classify_question, classify_subcategory,
};
use ap_question_extract::models::loaders::load_all_sittings;
use ap_question_extract::output::build_envelope;
use ap_question_extract::selection::select_questions;
use ap_question_extract::{process_sitting, App, Config, Field};

/// 問番号ごとに内容の異なる本文を返す (分類が分散するように)
fn question_body(n: u32) -> &'static str {
    match n % 5 {
        0 => "CPU のキャッシュメモリの書込み方式に関する記述として適切なものはどれか。",
        1 => "関係データベースの正規化に関する記述として適切なものはどれか。",
        2 => "公開鍵暗号方式を用いたディジタル署名の説明として適切なものはどれか。",
        3 => "プロジェクトのスケジュール管理に用いるクリティカルパスはどれか。",
        _ => "企業の損益分岐点の計算に関する記述として適切なものはどれか。",
    }
}

fn sitting_markdown() -> String {
    let mut question_blocks = Vec::new();
    for n in 1..=80u32 {
        question_blocks.push(format!(
            "問{} {}\nア 一番目の選択肢である イ 二番目の選択肢である ウ 三番目の選択肢である エ 四番目の選択肢である",
            n,
            question_body(n)
        ));
    }

    let mut key_lines = Vec::new();
    for n in 1..=80u32 {
        let answer = ["ア", "イ", "ウ", "エ"][(n % 4) as usize];
        let field = if n <= 50 {
            "T"
        } else if n <= 60 {
            "M"
        } else {
            "S"
        };
        key_lines.push(format!("問{} {} {}", n, answer, field));
    }

    format!(
        "# 応用情報技術者試験\n\n\
         ## 午前問題\n\n\
         ### ページ 1\n\n\
         ![](images/page_001.png)\n\n\
         <details><summary>テキスト (OCR)</summary>\n\n{}\n\n</details>\n\n\
         ### ページ 2\n\n\
         ![](images/page_002.png)\n\n\
         <details><summary>テキスト (OCR)</summary>\n\n{}\n\n</details>\n\n\
         ## 午前解答\n\n{}\n",
        question_blocks[..40].join("\n\n"),
        question_blocks[40..].join("\n\n"),
        key_lines.join("\n")
    )
}

async fn write_sittings(dir: &std::path::Path, exam_ids: &[&str]) {
    for exam_id in exam_ids {
        let exam_dir = dir.join(format!("{exam_id}_ap"));
        tokio::fs::create_dir_all(&exam_dir).await.unwrap();
        tokio::fs::write(exam_dir.join(format!("{exam_id}_ap.md")), sitting_markdown())
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_pipeline_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    write_sittings(dir.path(), &["2023r05a", "2024r06a"]).await;

    let sittings = load_all_sittings(dir.path().to_str().unwrap()).await.unwrap();
    assert_eq!(sittings.len(), 2);
    assert_eq!(sittings[0].id, "2023r05a");
    assert_eq!(sittings[1].title, "令和6年度秋期");

    let mut questions = Vec::new();
    for sitting in &sittings {
        questions.extend(process_sitting(sitting).unwrap());
    }
    assert_eq!(questions.len(), 160);

    // 問番号は解答表の定義域、分野は番号帯と一致する
    for q in &questions {
        assert!((1..=80).contains(&q.question_number));
        let expected = if q.question_number <= 50 {
            Field::Technology
        } else if q.question_number <= 60 {
            Field::Management
        } else {
            Field::Strategy
        };
        assert_eq!(q.field, expected);
        assert_eq!(q.choices.len(), 4);
        assert!((0.0..=1.0).contains(&q.quality_score));
    }

    // 分類と重要度
    for q in questions.iter_mut() {
        let category = classify_question(q);
        q.category = category.name;
        q.subcategory = classify_subcategory(q, category);
    }
    calculate_importance(&mut questions);
    for q in &questions {
        assert!(!q.category.is_empty());
        assert!(!q.subcategory.is_empty());
        assert!((1..=5).contains(&q.importance));
    }

    // テクノロジ系の暗号問題はセキュリティに寄る
    let crypto = questions
        .iter()
        .find(|q| q.field == Field::Technology && q.question_text.contains("ディジタル署名"))
        .unwrap();
    assert_eq!(crypto.category, "セキュリティ");

    // 選定: 目標より候補が多ければちょうど目標件数になる
    let selected = select_questions(&questions, 100);
    assert_eq!(selected.len(), 100);

    // 出力: カテゴリ昇順、カテゴリ内は重要度降順
    let envelope = build_envelope(&selected, sittings.len(), questions.len());
    assert_eq!(envelope.metadata.total_questions, 100);
    assert_eq!(envelope.metadata.source_exams, 2);
    assert_eq!(envelope.metadata.total_available, 160);
    for pair in envelope.questions.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.category <= b.category);
        if a.category == b.category {
            assert!(a.importance >= b.importance);
        }
    }

    // レコード ID は試験 ID + 0 埋め問番号
    let sample = &envelope.questions[0];
    assert!(sample.id.ends_with(&format!("_q{:02}", sample.question_number)));

    // カテゴリ集計は出力件数と整合する
    let summary_total: usize = envelope.metadata.categories.values().map(|s| s.count).sum();
    assert_eq!(summary_total, 100);
}

#[tokio::test]
async fn test_app_runs_pipeline_and_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let input_dir = dir.path().join("markdown");
    write_sittings(&input_dir, &["2023r05a", "2024r06a"]).await;
    let output_file = dir.path().join("out/questions.json");

    let config = Config {
        markdown_dir: input_dir.to_str().unwrap().to_string(),
        output_file: output_file.to_str().unwrap().to_string(),
        target_count: 50,
        max_concurrent_sittings: 2,
        verbose_logging: false,
    };
    let app = App::initialize(config).await.unwrap();
    app.run().await.unwrap();

    let json = tokio::fs::read_to_string(&output_file).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["metadata"]["total_questions"], 50);
    assert_eq!(parsed["metadata"]["source_exams"], 2);
    assert_eq!(parsed["questions"].as_array().unwrap().len(), 50);
    // 全レコードに image_path が入る
    for record in parsed["questions"].as_array().unwrap() {
        assert!(record.get("image_path").is_some());
    }
}

#[tokio::test]
async fn test_unreadable_sitting_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_sittings(dir.path(), &["2024r06a"]).await;

    // 解答表のない試験回はローダーでは読めるが抽出で失敗する
    let broken_dir = dir.path().join("2022r04a_ap");
    tokio::fs::create_dir_all(&broken_dir).await.unwrap();
    tokio::fs::write(
        broken_dir.join("2022r04a_ap.md"),
        "# 応用情報技術者試験\n\n## 午前問題\n\n本文のみ\n\n## 午前解答\n\nなし\n",
    )
    .await
    .unwrap();

    let sittings = load_all_sittings(dir.path().to_str().unwrap()).await.unwrap();
    assert_eq!(sittings.len(), 2);

    let results: BTreeMap<&str, bool> = sittings
        .iter()
        .map(|s| (s.id.as_str(), process_sitting(s).is_ok()))
        .collect();
    assert!(!results["2022r04a"]);
    assert!(results["2024r06a"]);
}
