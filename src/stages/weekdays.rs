//! Bare weekday names.
//!
//! 月曜までに, 火曜日までに, 来週の水曜までに (when the compound grammar
//! did not already claim the phrase). The 明日/明後日 family shares the 日
//! character with 日曜, so an explicit exclusion check runs before the
//! weekday table is consulted.

use chrono::{Duration, NaiveDate};

use crate::trigger::BucketMask;
use crate::{Stage, StageDate, calendar};

pub(crate) fn stage() -> Stage {
    stage! {
        name: "<weekday>",
        buckets: BucketMask::WEEKDAYISH,
        apply: apply,
    }
}

/// True when the text contains a 明日/明後日-family phrase (明日, 明後日,
/// 明々後日). Those sentences belong to the relative stage; reading 日 out
/// of them as a weekday fragment is the classic misparse this guards.
pub(crate) fn mentions_tomorrowish(text: &str) -> bool {
    regex!(r"明[々後日]+").is_match(text)
}

fn apply(text: &str, reference: NaiveDate) -> Option<StageDate> {
    if mentions_tomorrowish(text) {
        return None;
    }

    let weekday = calendar::weekday_index(text)?;
    let next_week = text.contains("来週");
    let ahead = calendar::days_ahead(reference, weekday, next_week);
    let date = reference.checked_add_signed(Duration::days(ahead))?;
    Some(StageDate::date_only(date))
}
