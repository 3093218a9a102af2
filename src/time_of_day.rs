//! Time-of-day resolution.
//!
//! An independent scan over the input for a single hour-of-day. The rules
//! are tried in a fixed order, most specific first: qualified hour forms
//! (午前3時, 午後3時, ...), then a bare hour (18時), then literal period
//! markers, longest first so 深夜 is never read as 夜. The first rule that
//! matches anywhere in the text wins; a rule whose converted hour falls
//! outside 0..=23 is skipped rather than reported. With no match at all the
//! resolver yields [`DEFAULT_HOUR`].
//!
//! There is no notion of minutes here; every resolved timestamp carries
//! minute = 0.

use once_cell::sync::Lazy;
use regex::Regex;

/// Hour used when the text carries no recognizable time-of-day phrase.
pub(crate) const DEFAULT_HOUR: u32 = 12;

enum HourRule {
    /// "marker + N時" with its own numeral-to-24h conversion.
    FromCapture { pattern: &'static Regex, convert: fn(u32) -> u32 },
    /// A literal marker word bound to one fixed hour.
    Fixed { pattern: &'static Regex, hour: u32 },
}

static HOUR_RULES: Lazy<Vec<HourRule>> = Lazy::new(|| {
    vec![
        // Qualified numeric forms take precedence over everything else.
        HourRule::FromCapture { pattern: regex!(r"午前(\d{1,2})時"), convert: |h| h },
        HourRule::FromCapture {
            pattern: regex!(r"午後(\d{1,2})時"),
            convert: |h| if h < 12 { h + 12 } else { h },
        },
        HourRule::FromCapture { pattern: regex!(r"朝(\d{1,2})時"), convert: |h| h },
        HourRule::FromCapture {
            pattern: regex!(r"昼(\d{1,2})時"),
            convert: |h| if h == 12 { 12 } else { h + 12 },
        },
        HourRule::FromCapture {
            pattern: regex!(r"夜(\d{1,2})時"),
            convert: |h| if h < 12 { h + 12 } else { h },
        },
        // Bare hour.
        HourRule::FromCapture { pattern: regex!(r"(\d{1,2})時"), convert: |h| h },
        // Literal markers, longest first.
        HourRule::Fixed { pattern: regex!(r"深夜"), hour: 23 },
        HourRule::Fixed { pattern: regex!(r"午後"), hour: 15 },
        HourRule::Fixed { pattern: regex!(r"夕方"), hour: 17 },
        HourRule::Fixed { pattern: regex!(r"朝"), hour: 9 },
        HourRule::Fixed { pattern: regex!(r"昼"), hour: 12 },
        HourRule::Fixed { pattern: regex!(r"夜"), hour: 19 },
    ]
});

/// Extract an hour-of-day (0–23) from `text`, or [`DEFAULT_HOUR`].
pub(crate) fn resolve_hour(text: &str) -> u32 {
    for rule in HOUR_RULES.iter() {
        match rule {
            HourRule::FromCapture { pattern, convert } => {
                let Some(caps) = pattern.captures(text) else { continue };
                let Some(hour) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) else {
                    continue;
                };
                let hour = convert(hour);
                if hour <= 23 {
                    return hour;
                }
            }
            HourRule::Fixed { pattern, hour } => {
                if pattern.is_match(text) {
                    return *hour;
                }
            }
        }
    }
    DEFAULT_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_hours() {
        let cases: Vec<(u32, &str)> = vec![
            (8, "明日8時までに"),
            (12, "明日12時までに"),
            (18, "明日18時までに"),
            (23, "明日23時までに"),
            (8, "明日の午前8時までに"),
            (11, "午前11時"),
            (13, "明日の午後1時までに"),
            (15, "明日の午後3時までに"),
            (18, "午後6時"),
            (23, "午後11時"),
            (12, "午後12時"),
            (9, "朝9時までに"),
            (15, "昼3時"),
            (12, "昼12時"),
            (20, "夜8時"),
            (21, "夜21時"),
        ];
        for (expected, text) in cases {
            assert_eq!(resolve_hour(text), expected, "input: {text}");
        }
    }

    #[test]
    fn literal_markers() {
        assert_eq!(resolve_hour("明日の朝までに"), 9);
        assert_eq!(resolve_hour("明日の昼までに"), 12);
        assert_eq!(resolve_hour("明日の午後までに"), 15);
        assert_eq!(resolve_hour("明日の夕方までに"), 17);
        assert_eq!(resolve_hour("明日の夜までに"), 19);
        assert_eq!(resolve_hour("明日の深夜までに"), 23);
    }

    #[test]
    fn default_when_no_phrase() {
        assert_eq!(resolve_hour("3日後までに"), DEFAULT_HOUR);
        assert_eq!(resolve_hour(""), DEFAULT_HOUR);
    }

    #[test]
    fn out_of_range_hour_is_skipped() {
        // 45時 is nonsense; the bare-hour rule passes and the 夜 literal
        // further down still gets its say.
        assert_eq!(resolve_hour("夜45時"), 19);
        assert_eq!(resolve_hour("45時"), DEFAULT_HOUR);
    }
}
