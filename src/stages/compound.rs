//! "{qualifier} {weekday} {time-of-day}" constructions.
//!
//! 来週の月曜の午前中, 今度の土曜の夜, 次の金曜の15時. The weekday span and
//! the trailing time span are captured separately; the hour comes from the
//! time span alone, so a stray hour elsewhere in the sentence cannot leak
//! into a compound match.

use chrono::{Duration, NaiveDate};
use regex::Regex;

use crate::trigger::BucketMask;
use crate::{Stage, StageDate, calendar, time_of_day};

pub(crate) fn stage() -> Stage {
    stage! {
        name: "<qualifier>の<weekday>の<time-of-day>",
        buckets: BucketMask::WEEKDAYISH,
        apply: apply,
    }
}

fn patterns() -> [&'static Regex; 3] {
    [regex!(r"来週の(\w+)の(\w+)"), regex!(r"今度の(\w+)の(\w+)"), regex!(r"次の(\w+)の(\w+)")]
}

fn apply(text: &str, reference: NaiveDate) -> Option<StageDate> {
    for pattern in patterns() {
        let Some(caps) = pattern.captures(text) else { continue };
        let weekday_span = caps.get(1)?.as_str();
        let time_span = caps.get(2)?.as_str();

        // A qualifier span with no weekday in it is not ours; let the
        // later stages have the text.
        let Some(weekday) = calendar::weekday_index(weekday_span) else { continue };

        // 来週 and 次 mean the occurrence in the following week; 今度 is
        // just the coming occurrence.
        let next_week = text.contains("来週") || text.contains("次");
        let ahead = calendar::days_ahead(reference, weekday, next_week);
        let date = reference.checked_add_signed(Duration::days(ahead))?;

        return Some(StageDate { date, hour: Some(time_of_day::resolve_hour(time_span)) });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn next_week_weekday_with_time() {
        let out = apply("来週の月曜の午前中までに", monday()).unwrap();
        // Monday + (7 rolled) + 7 qualifier = the Monday after next week's start.
        assert_eq!(out.date, NaiveDate::from_ymd_opt(2024, 6, 24).unwrap());
        assert_eq!(out.hour, Some(12)); // 午前中 carries no resolvable hour
    }

    #[test]
    fn hour_comes_from_the_time_span() {
        let out = apply("来週の水曜の午後3時までに", monday()).unwrap();
        assert_eq!(out.date, NaiveDate::from_ymd_opt(2024, 6, 19).unwrap());
        assert_eq!(out.hour, Some(15));
    }

    #[test]
    fn coming_occurrence_without_next_week() {
        let out = apply("今度の土曜の夜までに", monday()).unwrap();
        assert_eq!(out.date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert_eq!(out.hour, Some(19));
    }

    #[test]
    fn qualifier_without_weekday_is_not_a_match() {
        assert!(apply("来週の会議の資料", monday()).is_none());
    }
}
