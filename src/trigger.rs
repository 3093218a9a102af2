//! Trigger scanning (input pre-classification).
//!
//! One cheap pass over the raw input produces coarse buckets that let the
//! engine skip whole stages before any regex runs. The scan must never
//! produce a false negative: a stage may require a bucket only when every
//! one of its sub-patterns implies that bucket. False positives are fine
//! because the stage still has to match its full pattern.

bitflags::bitflags! {
    /// Coarse buckets for fast input classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        /// Any ASCII digit. Implied by every numeric-relative and
        /// absolute-date sub-pattern.
        const HAS_DIGITS = 1 << 0;
        /// The 曜 character. Every weekday name (月曜..日曜) carries it,
        /// so the compound and weekday stages cannot match without it.
        const WEEKDAYISH = 1 << 1;
    }
}

/// Input characteristics detected from the raw input.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    pub fn scan(input: &str) -> Self {
        let mut buckets = BucketMask::empty();

        if input.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= BucketMask::HAS_DIGITS;
        }
        if input.contains('曜') {
            buckets |= BucketMask::WEEKDAYISH;
        }

        TriggerInfo { buckets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_detects_digits_and_weekday_marker() {
        assert_eq!(TriggerInfo::scan("3日後までに").buckets, BucketMask::HAS_DIGITS);
        assert_eq!(TriggerInfo::scan("火曜日までに").buckets, BucketMask::WEEKDAYISH);
        assert_eq!(
            TriggerInfo::scan("来週の月曜18時").buckets,
            BucketMask::HAS_DIGITS | BucketMask::WEEKDAYISH
        );
        assert_eq!(TriggerInfo::scan("月末までに").buckets, BucketMask::empty());
    }
}
