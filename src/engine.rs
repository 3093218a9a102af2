//! The stage loop.
//!
//! The engine owns the ordered stage list and runs the first-match-wins
//! scan over it: gate each stage on the trigger buckets, apply it, and on
//! the first success attach an hour and stop. There is no backtracking and
//! no re-evaluation across stages; with six stages and a handful of
//! sub-patterns each, every run is bounded.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;

use crate::api::Resolved;
use crate::trigger::TriggerInfo;
use crate::{Stage, time_of_day};

static STAGES: Lazy<Vec<Stage>> = Lazy::new(crate::stages::get);

/// Run the stage list over `text` against `reference`.
///
/// Returns `None` when no stage matches; the caller owns the fallback
/// policy. Set `KIJITSU_DEBUG_STAGES` to trace the scan on stderr.
pub(crate) fn run(text: &str, reference: NaiveDateTime) -> Option<Resolved> {
    let trigger = TriggerInfo::scan(text);
    let debug = std::env::var_os("KIJITSU_DEBUG_STAGES").is_some();

    for stage in STAGES.iter() {
        if !trigger.buckets.contains(stage.buckets) {
            if debug {
                eprintln!("[stage] {}: gated off (needs {:?})", stage.name, stage.buckets);
            }
            continue;
        }

        let Some(outcome) = (stage.apply)(text, reference.date()) else {
            if debug {
                eprintln!("[stage] {}: no match", stage.name);
            }
            continue;
        };

        let hour = outcome.hour.unwrap_or_else(|| time_of_day::resolve_hour(text));
        let datetime = outcome.date.and_hms_opt(hour, 0, 0)?;
        if debug {
            eprintln!("[stage] {}: matched -> {}", stage.name, datetime);
        }
        return Some(Resolved { datetime, stage: stage.name });
    }

    None
}
