//! Task title cleanup and link-label extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Tool keyword → suggested link label, first hit wins.
const LINK_LABELS: &[(&str, &str)] = &[
    ("powerpoint", "PowerPoint Web"),
    ("パワーポイント", "PowerPoint Web"),
    ("プレゼン", "PowerPoint Web"),
    ("スライド", "PowerPoint Web"),
    ("word", "Word Web"),
    ("ワード", "Word Web"),
    ("文書", "Word Web"),
    ("excel", "Excel Web"),
    ("エクセル", "Excel Web"),
    ("表", "Excel Web"),
    ("シート", "Excel Web"),
    ("outlook", "Outlook Web"),
    ("アウトルック", "Outlook Web"),
    ("メール", "Outlook Web"),
    ("連絡", "Outlook Web"),
];

static DATE_EXPRESSIONS: Lazy<Vec<&'static Regex>> = Lazy::new(|| {
    vec![
        regex!(r"\d{4}年\d{1,2}月\d{1,2}日"),
        regex!(r"\d{1,2}月\d{1,2}日"),
        regex!(r"\d{4}-\d{1,2}-\d{1,2}"),
    ]
});

const MAX_TITLE_CHARS: usize = 30;

/// Strip date expressions and filler endings from `text` to get a task
/// title; falls back to the leading meaningful words, then to a stock
/// title, so the result is never empty.
pub(crate) fn extract_title(text: &str) -> String {
    let mut cleaned = text.to_string();
    for pattern in DATE_EXPRESSIONS.iter() {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }

    cleaned = regex!(r"(してください|します|する|です|である)$").replace(&cleaned, "").into_owned();
    cleaned = regex!(r"(までに|まで)$").replace(&cleaned, "").into_owned();
    // Removing a date expression can leave its particle stranded up front.
    cleaned = regex!(r"^(までに|まで)").replace(&cleaned, "").into_owned();
    cleaned = regex!(r"\s+").replace_all(cleaned.trim(), " ").into_owned();

    if cleaned.chars().count() < 3 {
        let meaningful: Vec<&str> = text
            .split_whitespace()
            .filter(|w| w.chars().count() > 1 && !regex!(r"^\d+月\d+日").is_match(w))
            .take(3)
            .collect();
        if !meaningful.is_empty() {
            cleaned = meaningful.join(" ");
        }
    }

    if cleaned.chars().count() > MAX_TITLE_CHARS {
        cleaned = cleaned.chars().take(MAX_TITLE_CHARS).collect::<String>() + "...";
    }

    if cleaned.is_empty() { "新しいタスク".to_string() } else { cleaned }
}

/// Suggest a tool link for the task text; Word Web when nothing matches.
pub(crate) fn extract_link_label(text: &str) -> String {
    let text_lower = text.to_lowercase();
    LINK_LABELS
        .iter()
        .find(|(keyword, _)| text_lower.contains(keyword))
        .map(|&(_, label)| label)
        .unwrap_or("Word Web")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_dates_and_filler_endings() {
        assert_eq!(
            extract_title("6月17日までに営業資料をパワーポイントで作成してください"),
            "営業資料をパワーポイントで作成"
        );
        assert_eq!(extract_title("2024-12-1までに報告書を提出する"), "報告書を提出");
    }

    #[test]
    fn long_titles_are_truncated() {
        let text = "あ".repeat(40);
        let title = extract_title(&text);
        assert_eq!(title.chars().count(), MAX_TITLE_CHARS + 3);
        assert!(title.ends_with("..."));
    }

    #[test]
    fn empty_input_gets_a_stock_title() {
        assert_eq!(extract_title(""), "新しいタスク");
        assert_eq!(extract_title("6月17日まで"), "新しいタスク");
    }

    #[test]
    fn link_labels() {
        assert_eq!(extract_link_label("営業資料をパワーポイントで作成"), "PowerPoint Web");
        assert_eq!(extract_link_label("顧客データの調査をエクセルで"), "Excel Web");
        assert_eq!(extract_link_label("PowerPointのスライド"), "PowerPoint Web");
        assert_eq!(extract_link_label("議事録を書く"), "Word Web");
    }
}
