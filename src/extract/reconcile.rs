//! 問番号の照合 (ステージ3)
//!
//! OCRが読んだ問番号は欠落・誤読・重複がある。解答キーの番号集合を
//! 正とし、OCRブロックを番号に対応付ける。

use std::collections::BTreeMap;

use crate::models::{AnswerKey, RawQuestionBlock, ReconciledText};

/// 照合結果: 解答キーの番号 → 問題本文
pub type ReconciledQuestions = BTreeMap<u32, ReconciledText>;

/// OCRブロックを解答キーの番号集合と照合する
///
/// 2パス方式:
/// 1. OCR番号がそのまま解答キーに存在するブロックは直接割り当てる
/// 2. 残った番号 (昇順) に、残ったブロックを文書内の出現順で対応付ける
///
/// パス2は「OCRの誤番号でも出題順序自体は保たれている」という前提の
/// ベストエフォート。positional フラグで区別できる。対応するブロックが
/// 無い番号は未解決のまま落とす。
pub fn reconcile_questions(
    raw_blocks: &[RawQuestionBlock],
    answer_key: &AnswerKey,
) -> ReconciledQuestions {
    let mut assigned = ReconciledQuestions::new();
    let mut used = vec![false; raw_blocks.len()];

    // パス1: 番号の直接一致 (同番号の2個目以降は残り扱い)
    for (i, block) in raw_blocks.iter().enumerate() {
        if answer_key.contains_key(&block.detected_number)
            && !assigned.contains_key(&block.detected_number)
        {
            assigned.insert(
                block.detected_number,
                ReconciledText {
                    text: block.text.clone(),
                    image_path: block.image_path.clone(),
                    positional: false,
                },
            );
            used[i] = true;
        }
    }

    // パス2: 未割り当て番号 (昇順) × 未使用ブロック (出現順)
    let unassigned_numbers: Vec<u32> = answer_key
        .keys()
        .copied()
        .filter(|n| !assigned.contains_key(n))
        .collect();
    let leftover_blocks = raw_blocks
        .iter()
        .zip(&used)
        .filter(|(_, used)| !**used)
        .map(|(block, _)| block);

    for (number, block) in unassigned_numbers.into_iter().zip(leftover_blocks) {
        assigned.insert(
            number,
            ReconciledText {
                text: block.text.clone(),
                image_path: block.image_path.clone(),
                positional: true,
            },
        );
    }

    assigned
}

/// 位置ベースで割り当てた問数 (信頼度ログ用)
pub fn positional_count(reconciled: &ReconciledQuestions) -> usize {
    reconciled.values().filter(|r| r.positional).count()
}
