//! コーパス選定
//!
//! 品質フィルタを通過した設問から、カテゴリ比率を保ちつつ目標件数の
//! コーパスを組み立てる。各カテゴリには最低枠を保証し、割当の合計が
//! ちょうど min(目標件数, 候補数) になるよう調整する。

use std::collections::BTreeMap;

use tracing::info;

use crate::models::Question;

/// コーパスに採用する最低品質スコア。
pub const MIN_QUALITY: f64 = 0.4;

/// 1 カテゴリに保証する最低件数 (カテゴリの候補数がそれ未満なら全件)。
const CATEGORY_FLOOR: usize = 5;

/// 目標件数に向けて設問を選定する
///
/// 候補が目標以下ならフィルタ通過分を全件返す。超える場合はカテゴリ
/// ごとの比例割当で絞り、カテゴリ内は (重要度, 品質, 試験 ID) の降順に
/// 並べて上位を採る。
pub fn select_questions(questions: &[Question], target: usize) -> Vec<Question> {
    let viable: Vec<&Question> = questions
        .iter()
        .filter(|q| q.quality_score >= MIN_QUALITY)
        .collect();
    info!(
        "品質フィルタ: {} 問中 {} 問が候補 (閾値 {:.1})",
        questions.len(),
        viable.len(),
        MIN_QUALITY
    );

    if viable.len() <= target {
        return viable.into_iter().cloned().collect();
    }

    let mut by_category: BTreeMap<&'static str, Vec<&Question>> = BTreeMap::new();
    for question in &viable {
        by_category.entry(question.category).or_default().push(*question);
    }

    let quotas = allocate_quotas(&by_category, viable.len(), target);

    let mut selected = Vec::with_capacity(target);
    for (category, mut members) in by_category {
        let quota = quotas[category];
        members.sort_by(|a, b| {
            b.importance
                .cmp(&a.importance)
                .then_with(|| b.quality_score.total_cmp(&a.quality_score))
                .then_with(|| b.exam_id.cmp(&a.exam_id))
        });
        selected.extend(members.into_iter().take(quota).cloned());
    }
    selected
}

/// カテゴリごとの割当数を決める
///
/// 初期割当は比例配分と最低枠の大きい方 (候補数が上限)。合計が目標を
/// 超える間は縮小余地のある最大カテゴリを 1 ずつ削り、足りない間は
/// 残り枠が最大のカテゴリへ 1 ずつ足す。
fn allocate_quotas(
    by_category: &BTreeMap<&'static str, Vec<&Question>>,
    viable_total: usize,
    target: usize,
) -> BTreeMap<&'static str, usize> {
    let mut quotas: BTreeMap<&'static str, usize> = BTreeMap::new();
    for (category, members) in by_category {
        let proportional =
            (members.len() as f64 / viable_total as f64 * target as f64).round() as usize;
        let quota = CATEGORY_FLOOR.max(proportional).min(members.len());
        quotas.insert(*category, quota);
    }

    // 合計超過分は、最低枠を割らない範囲で最大の割当から削る
    let mut total: usize = quotas.values().sum();
    while total > target {
        let mut victim: Option<(&'static str, usize)> = None;
        for (category, quota) in &quotas {
            let floor = CATEGORY_FLOOR.min(by_category[category].len());
            if *quota > floor {
                match victim {
                    Some((_, best)) if *quota <= best => {}
                    _ => victim = Some((*category, *quota)),
                }
            }
        }
        let Some((category, _)) = victim else { break };
        *quotas.get_mut(category).unwrap() -= 1;
        total -= 1;
    }

    // 端数で不足した分は、候補の残りが最も多いカテゴリに足す
    while total < target {
        let mut recipient: Option<(&'static str, usize)> = None;
        for (category, quota) in &quotas {
            let headroom = by_category[category].len() - quota;
            if headroom > 0 {
                match recipient {
                    Some((_, best)) if headroom <= best => {}
                    _ => recipient = Some((*category, headroom)),
                }
            }
        }
        let Some((category, _)) = recipient else { break };
        *quotas.get_mut(category).unwrap() += 1;
        total += 1;
    }

    quotas
}
