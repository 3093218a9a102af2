//! Keyword-based intent classification.
//!
//! Bounded dictionary lookups, nothing more: is the utterance creating a
//! task, completing one, and if completing, which task does it mean.

use crate::agent::store::{Task, TaskStatus};

const CREATION_KEYWORDS: &[&str] = &[
    "タスク",
    "作業",
    "仕事",
    "やること",
    "TODO",
    "todo",
    "作成",
    "作る",
    "書く",
    "準備",
    "用意",
    "調査",
    "確認",
    "までに",
    "まで",
    "期限",
    "締切",
    "資料",
    "報告書",
];

const COMPLETION_KEYWORDS: &[&str] = &[
    "完了",
    "終了",
    "終わった",
    "済んだ",
    "済み",
    "できた",
    "終わり",
    "完成",
    "提出した",
    "送った",
    "提出",
];

/// Domain terms used for loose task matching (営業 → 営業資料 etc.).
const KEY_TERMS: &[&str] = &["営業", "資料", "調査", "報告", "会議", "データ", "分析", "提案"];

pub(crate) fn is_task_creation(text: &str) -> bool {
    CREATION_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

pub(crate) fn is_task_completion(text: &str) -> bool {
    COMPLETION_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

/// Pick the pending task the completion utterance most plausibly refers
/// to: title-word overlap first, shared domain terms second, and as a last
/// resort the most recently created pending task.
pub(crate) fn find_task_to_complete(tasks: &[Task], text: &str) -> Option<usize> {
    let text_lower = text.to_lowercase();
    let pending: Vec<usize> =
        (0..tasks.len()).filter(|&i| tasks[i].status == TaskStatus::Pending).collect();

    for &i in &pending {
        let title_lower = tasks[i].title.to_lowercase();

        let title_words: Vec<&str> =
            title_lower.split_whitespace().filter(|w| w.chars().count() > 2).collect();
        if title_words.iter().any(|word| text_lower.contains(word)) {
            return Some(i);
        }

        if KEY_TERMS.iter().any(|term| title_lower.contains(term) && text_lower.contains(term)) {
            return Some(i);
        }
    }

    pending.last().copied()
}
