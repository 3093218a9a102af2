//! Absolute date shapes.
//!
//! Four literal shapes, most specific first: Y年M月D日, M月D日, Y-M-D, M/D.
//! The year-first ordering keeps 2025年6月17日 from being read as a
//! month-day form with the year dropped. Month and day are range-checked
//! before any date is built; explicit years outside the sane bound are
//! rejected; every failure falls through to the next shape.

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::trigger::BucketMask;
use crate::{Stage, StageDate};

/// Explicit-year forms outside this window are treated as noise (phone
/// numbers, IDs) rather than dates.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 2020..=2030;

pub(crate) fn stage() -> Stage {
    stage! {
        name: "absolute date",
        buckets: BucketMask::HAS_DIGITS,
        apply: apply,
    }
}

enum Shape {
    /// Captures (year, month, day).
    YearMonthDay(&'static Regex),
    /// Captures (month, day); the year is implied by the reference.
    MonthDay(&'static Regex),
}

fn shapes() -> [Shape; 4] {
    [
        Shape::YearMonthDay(regex!(r"(\d{4})年(\d{1,2})月(\d{1,2})日")),
        Shape::MonthDay(regex!(r"(\d{1,2})月(\d{1,2})日")),
        Shape::YearMonthDay(regex!(r"(\d{4})-(\d{1,2})-(\d{1,2})")),
        Shape::MonthDay(regex!(r"(\d{1,2})/(\d{1,2})")),
    ]
}

fn apply(text: &str, reference: NaiveDate) -> Option<StageDate> {
    for shape in shapes() {
        let candidate = match shape {
            Shape::YearMonthDay(pattern) => {
                let Some(caps) = pattern.captures(text) else { continue };
                let (year, month, day) = (group(&caps, 1)?, group(&caps, 2)?, group(&caps, 3)?);
                if !YEAR_RANGE.contains(&(year as i32)) {
                    continue;
                }
                build(year as i32, month, day)
            }
            Shape::MonthDay(pattern) => {
                let Some(caps) = pattern.captures(text) else { continue };
                let (month, day) = (group(&caps, 1)?, group(&caps, 2)?);
                build(reference.year(), month, day)
            }
        };
        // Range check failed (month 13, day 32, February 30): try the
        // next shape, never error.
        if let Some(date) = candidate {
            return Some(StageDate::date_only(date));
        }
    }
    None
}

fn group(caps: &regex::Captures<'_>, index: usize) -> Option<u32> {
    caps.get(index).and_then(|m| m.as_str().parse().ok())
}

fn build(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_day_takes_the_reference_year() {
        assert_eq!(apply("6月17日までに", reference()).unwrap().date, d(2024, 6, 17));
        assert_eq!(apply("12/25", reference()).unwrap().date, d(2024, 12, 25));
    }

    #[test]
    fn explicit_year_forms() {
        assert_eq!(apply("2025年6月17日までに", reference()).unwrap().date, d(2025, 6, 17));
        assert_eq!(apply("2024-12-01まで", reference()).unwrap().date, d(2024, 12, 1));
    }

    #[test]
    fn out_of_range_numerals_fall_through() {
        assert!(apply("13月5日までに", reference()).is_none());
        assert!(apply("6月32日までに", reference()).is_none());
        assert!(apply("2月30日までに", reference()).is_none());
        assert!(apply("13/45", reference()).is_none());
    }

    #[test]
    fn implausible_years_are_rejected() {
        // The explicit-year shape rejects 2035; the month-day shape then
        // claims 1月5日 with the reference year.
        assert_eq!(apply("2035年1月5日", reference()).unwrap().date, d(2024, 1, 5));
        assert!(apply("1999-01-05", reference()).is_none());
    }
}
