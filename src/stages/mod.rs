//! The six phrase grammars, in priority order.
//!
//! `get` is the single source of truth for stage ordering: most specific
//! first, so a compound phrase is never swallowed by the bare weekday
//! grammar, and an absolute date is only consulted once everything
//! relative has had its chance.

pub mod absolute;
pub mod compound;
pub mod numeric;
pub mod periods;
pub mod relative;
pub mod weekdays;


use crate::Stage;

pub(crate) fn get() -> Vec<Stage> {
    vec![
        compound::stage(),
        numeric::stage(),
        periods::stage(),
        relative::stage(),
        weekdays::stage(),
        absolute::stage(),
    ]
}
