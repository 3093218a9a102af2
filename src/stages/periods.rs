//! Named calendar periods.
//!
//! A fixed vocabulary: 今週末, 来週末, 来月末, 月末, 年末, 来年, plus the
//! day-of-month forms 来月D日 and 今月D日. Declaration order is most
//! specific first: 来月末 sits above 月末 so "next month end" is never
//! read as "this month end".

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::trigger::BucketMask;
use crate::{Stage, StageDate, calendar};

pub(crate) fn stage() -> Stage {
    stage! {
        name: "named period",
        buckets: BucketMask::empty(),
        apply: apply,
    }
}

enum PeriodRule {
    /// A literal period word resolved from the reference date alone.
    Fixed { pattern: &'static Regex, resolve: fn(NaiveDate) -> Option<NaiveDate> },
    /// A period word carrying a day-of-month capture.
    DayOfMonth { pattern: &'static Regex, resolve: fn(NaiveDate, u32) -> Option<NaiveDate> },
}

static RULES: Lazy<Vec<PeriodRule>> = Lazy::new(|| {
    vec![
        PeriodRule::Fixed { pattern: regex!(r"今週末"), resolve: |d| Some(calendar::this_weekend(d)) },
        PeriodRule::Fixed { pattern: regex!(r"来週末"), resolve: |d| Some(calendar::next_weekend(d)) },
        PeriodRule::Fixed { pattern: regex!(r"来月末"), resolve: calendar::next_month_end },
        PeriodRule::Fixed { pattern: regex!(r"月末"), resolve: calendar::month_end },
        PeriodRule::Fixed { pattern: regex!(r"年末"), resolve: calendar::year_end },
        PeriodRule::Fixed { pattern: regex!(r"来年"), resolve: calendar::next_year_start },
        PeriodRule::DayOfMonth {
            pattern: regex!(r"来月(\d{1,2})日"),
            resolve: calendar::next_month_day,
        },
        PeriodRule::DayOfMonth {
            pattern: regex!(r"今月(\d{1,2})日"),
            resolve: calendar::this_month_day,
        },
    ]
});

fn apply(text: &str, reference: NaiveDate) -> Option<StageDate> {
    for rule in RULES.iter() {
        let date = match rule {
            PeriodRule::Fixed { pattern, resolve } => {
                if !pattern.is_match(text) {
                    continue;
                }
                resolve(reference)
            }
            PeriodRule::DayOfMonth { pattern, resolve } => {
                let Some(caps) = pattern.captures(text) else { continue };
                let Some(day) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) else {
                    continue;
                };
                resolve(reference, day)
            }
        };
        // An unresolvable period (date out of range) falls through rather
        // than erroring.
        let Some(date) = date else { continue };
        return Some(StageDate::date_only(date));
    }
    None
}
