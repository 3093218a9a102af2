//! "{N} {unit} 後": numeric offsets from the reference date.
//!
//! 3日後, 2週間後, 2ヶ月後, 1年後. Month and year units use the fixed
//! 30-day/365-day approximation; that is the contract, not an oversight,
//! and downstream behavior depends on it.

use chrono::{Duration, NaiveDate};
use regex::Regex;

use crate::trigger::BucketMask;
use crate::{Stage, StageDate};

pub(crate) fn stage() -> Stage {
    stage! {
        name: "<n><unit>後",
        buckets: BucketMask::HAS_DIGITS,
        apply: apply,
    }
}

/// (pattern, days-per-unit), tried in declaration order.
fn units() -> [(&'static Regex, i64); 4] {
    [
        (regex!(r"(\d+)日後"), 1),
        (regex!(r"(\d+)週間後"), 7),
        (regex!(r"(\d+)ヶ?月後"), 30),
        (regex!(r"(\d+)年後"), 365),
    ]
}

fn apply(text: &str, reference: NaiveDate) -> Option<StageDate> {
    for (pattern, days_per_unit) in units() {
        let Some(caps) = pattern.captures(text) else { continue };
        let Some(count) = caps.get(1).and_then(|m| m.as_str().parse::<i64>().ok()) else {
            continue;
        };
        // Absurd counts overflow the day arithmetic; treat as no match.
        let Some(offset) = count.checked_mul(days_per_unit).and_then(Duration::try_days) else {
            continue;
        };
        let date = reference.checked_add_signed(offset)?;
        return Some(StageDate::date_only(date));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn day_and_week_offsets() {
        assert_eq!(
            apply("3日後までに", reference()).unwrap().date,
            NaiveDate::from_ymd_opt(2024, 6, 13).unwrap()
        );
        assert_eq!(
            apply("1週間後までに", reference()).unwrap().date,
            NaiveDate::from_ymd_opt(2024, 6, 17).unwrap()
        );
    }

    #[test]
    fn month_and_year_use_fixed_approximations() {
        assert_eq!(
            apply("2ヶ月後までに", reference()).unwrap().date,
            reference() + Duration::days(60)
        );
        assert_eq!(apply("2月後", reference()).unwrap().date, reference() + Duration::days(60));
        assert_eq!(apply("1年後", reference()).unwrap().date, reference() + Duration::days(365));
    }

    #[test]
    fn hour_is_left_to_the_full_text_scan() {
        assert_eq!(apply("3日後の18時までに", reference()).unwrap().hour, None);
    }

    #[test]
    fn absurd_counts_do_not_panic() {
        assert!(apply("99999999999999999999日後", reference()).is_none());
    }
}
