//! Basic relative keywords.
//!
//! A flat keyword-to-day-offset table, scanned in declaration order with
//! the first hit winning. 再来週 sits above 来週 for the same reason 来月末
//! sits above 月末 in the period stage. 来月 keeps the 30-day
//! approximation used by the numeric stage.

use chrono::{Duration, NaiveDate};

use crate::trigger::BucketMask;
use crate::{Stage, StageDate};

const KEYWORDS: &[(&str, i64)] = &[
    ("今日", 0),
    ("きょう", 0),
    ("明日", 1),
    ("あした", 1),
    ("あす", 1),
    ("明後日", 2),
    ("あさって", 2),
    ("再来週", 14),
    ("来週", 7),
    ("来月", 30),
];

pub(crate) fn stage() -> Stage {
    stage! {
        name: "basic relative",
        buckets: BucketMask::empty(),
        apply: apply,
    }
}

fn apply(text: &str, reference: NaiveDate) -> Option<StageDate> {
    // 来週の水曜 belongs to the weekday grammar below this stage; the bare
    // week offsets only apply when no weekday name is in sight.
    let has_weekday = text.contains('曜');
    let &(_, offset) = KEYWORDS
        .iter()
        .filter(|(keyword, _)| !(has_weekday && matches!(*keyword, "来週" | "再来週")))
        .find(|(keyword, _)| text.contains(keyword))?;
    let date = reference.checked_add_signed(Duration::days(offset))?;
    Some(StageDate::date_only(date))
}
