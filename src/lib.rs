use chrono::NaiveDate;

use crate::trigger::BucketMask;

#[macro_use]
mod macros;
mod api;
mod calendar;
mod engine;
mod stages;
mod time_of_day;
mod trigger;

pub mod agent;

pub use api::{Context, Resolved, fallback_due, resolve, resolve_hour, resolve_with};

// --- Internal types ---------------------------------------------------------

/// What a stage hands back when one of its patterns matched: a fully-formed
/// calendar date, plus the hour when the stage resolved its own time span.
///
/// `hour: None` means "scan the whole input for a time-of-day phrase"; the
/// engine does that lookup so stages stay date-only where they can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StageDate {
    pub date: NaiveDate,
    pub hour: Option<u32>,
}

impl StageDate {
    /// A date whose hour still has to come from the full-text scan.
    pub fn date_only(date: NaiveDate) -> Self {
        StageDate { date, hour: None }
    }
}

pub(crate) type Apply = fn(&str, NaiveDate) -> Option<StageDate>;

/// One grammar in the resolver's fixed priority list.
///
/// A stage is a pure function from (text, reference date) to an optional
/// [`StageDate`]. Stages share no state; their only relationship is the
/// declared order in `stages::get`, where the first success wins and no
/// later stage re-evaluates an earlier result.
pub(crate) struct Stage {
    pub name: &'static str,
    /// Buckets that must all be present in the input for this stage to be
    /// considered. Only buckets implied by *every* sub-pattern may be
    /// required here; `BucketMask::empty()` keeps the stage always on.
    pub buckets: BucketMask,
    pub apply: Apply,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("name", &self.name)
            .field("buckets", &self.buckets)
            .field("apply", &"<function>")
            .finish()
    }
}
