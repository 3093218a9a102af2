//! Date arithmetic shared by the stages.
//!
//! Everything here is pure calendar math on `NaiveDate`. Functions return
//! `Option` so an impossible date (or a year outside chrono's range) reads
//! as "no match" upstream instead of panicking.

use chrono::{Datelike, Duration, NaiveDate};

/// Canonical weekday table, Monday = 0.
///
/// The two-character stems match both the bare form ("月曜") and the full
/// form ("月曜日") by substring containment.
const WEEKDAYS: &[(&str, u32)] = &[
    ("月曜", 0),
    ("火曜", 1),
    ("水曜", 2),
    ("木曜", 3),
    ("金曜", 4),
    ("土曜", 5),
    ("日曜", 6),
];

/// Find the first weekday name contained in `text` and return its index.
pub(crate) fn weekday_index(text: &str) -> Option<u32> {
    WEEKDAYS.iter().find(|(name, _)| text.contains(name)).map(|&(_, idx)| idx)
}

/// Days-ahead normalization for weekday targets.
///
/// The naive delta (target weekday minus reference weekday) is rolled
/// forward into [1,7]; an explicit next-week qualifier (来週/次) then adds
/// another 7, so qualified results land in [8,14]. Never non-positive.
pub(crate) fn days_ahead(reference: NaiveDate, target_weekday: u32, next_week: bool) -> i64 {
    let current = i64::from(reference.weekday().num_days_from_monday());
    let mut ahead = i64::from(target_weekday) - current;
    if ahead <= 0 {
        ahead += 7;
    }
    if next_week {
        ahead += 7;
    }
    ahead
}

/// The coming Saturday; the reference date itself when it is a Saturday.
pub(crate) fn this_weekend(reference: NaiveDate) -> NaiveDate {
    let current = i64::from(reference.weekday().num_days_from_monday());
    reference + Duration::days((5 - current).rem_euclid(7))
}

/// The Saturday one week after [`this_weekend`].
pub(crate) fn next_weekend(reference: NaiveDate) -> NaiveDate {
    this_weekend(reference) + Duration::days(7)
}

/// First day of the month after `reference`'s month.
pub(crate) fn first_of_next_month(reference: NaiveDate) -> Option<NaiveDate> {
    if reference.month() == 12 {
        NaiveDate::from_ymd_opt(reference.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(reference.year(), reference.month() + 1, 1)
    }
}

/// Last calendar day of `reference`'s month.
pub(crate) fn month_end(reference: NaiveDate) -> Option<NaiveDate> {
    Some(first_of_next_month(reference)? - Duration::days(1))
}

/// Last calendar day of the month after `reference`'s month.
pub(crate) fn next_month_end(reference: NaiveDate) -> Option<NaiveDate> {
    month_end(first_of_next_month(reference)?)
}

/// December 31 of `reference`'s year.
pub(crate) fn year_end(reference: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(reference.year(), 12, 31)
}

/// January 1 of the year after `reference`'s year.
pub(crate) fn next_year_start(reference: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(reference.year() + 1, 1, 1)
}

/// Day `day` of the reference month, clamped to the month end when the
/// month is too short (今月31日 in June resolves to June 30).
pub(crate) fn this_month_day(reference: NaiveDate, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(reference.year(), reference.month(), day).or_else(|| month_end(reference))
}

/// Day `day` of the month after the reference month, with December
/// rollover; clamped to that month's end when too short.
pub(crate) fn next_month_day(reference: NaiveDate, day: u32) -> Option<NaiveDate> {
    let first = first_of_next_month(reference)?;
    NaiveDate::from_ymd_opt(first.year(), first.month(), day).or_else(|| next_month_end(reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn weekday_index_matches_bare_and_full_forms() {
        assert_eq!(weekday_index("月曜"), Some(0));
        assert_eq!(weekday_index("火曜日までに"), Some(1));
        assert_eq!(weekday_index("日曜の夜"), Some(6));
        assert_eq!(weekday_index("平日までに"), None);
    }

    #[test]
    fn days_ahead_rolls_into_coming_week() {
        let monday = d(2024, 6, 10);
        assert_eq!(days_ahead(monday, 1, false), 1); // Tuesday
        assert_eq!(days_ahead(monday, 0, false), 7); // same weekday -> next one
        assert_eq!(days_ahead(d(2024, 6, 12), 0, false), 5); // Wed -> Monday
    }

    #[test]
    fn days_ahead_with_qualifier_lands_in_next_week() {
        let monday = d(2024, 6, 10);
        for target in 0..7 {
            let ahead = days_ahead(monday, target, true);
            assert!((8..=14).contains(&ahead), "target {target} gave {ahead}");
        }
    }

    #[test]
    fn this_weekend_is_coming_saturday() {
        assert_eq!(this_weekend(d(2024, 6, 10)), d(2024, 6, 15));
        // A Saturday reference stays put.
        assert_eq!(this_weekend(d(2024, 6, 15)), d(2024, 6, 15));
        assert_eq!(next_weekend(d(2024, 6, 10)), d(2024, 6, 22));
    }

    #[test]
    fn month_end_handles_leap_february() {
        assert_eq!(month_end(d(2024, 2, 10)), Some(d(2024, 2, 29)));
        assert_eq!(month_end(d(2023, 2, 10)), Some(d(2023, 2, 28)));
        assert_eq!(next_month_end(d(2024, 1, 15)), Some(d(2024, 2, 29)));
    }

    #[test]
    fn next_month_end_rolls_over_december() {
        assert_eq!(next_month_end(d(2024, 12, 5)), Some(d(2025, 1, 31)));
    }

    #[test]
    fn month_day_clamps_to_month_end() {
        assert_eq!(this_month_day(d(2024, 6, 10), 25), Some(d(2024, 6, 25)));
        assert_eq!(this_month_day(d(2024, 6, 10), 31), Some(d(2024, 6, 30)));
        assert_eq!(next_month_day(d(2024, 12, 5), 15), Some(d(2025, 1, 15)));
        assert_eq!(next_month_day(d(2024, 1, 5), 30), Some(d(2024, 2, 29)));
    }
}
