use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::error::TimestampError;
use crate::types::TIME_LAYOUT;

/// Localized date/time markers and what each one becomes in `TIME_LAYOUT`.
const MARKER_REPLACEMENTS: [(&str, &str); 6] = [
    ("年", "-"),
    ("月", "-"),
    ("日", ""),
    ("时", ":"),
    ("分", ":"),
    ("秒", ""),
];

/// Rewrite a localized action time such as `2023年01月02日 03时04分05秒`
/// into `2023-01-02 03:04:05`. Text without markers is returned unchanged.
pub fn normalize_timestamp(raw: &str) -> String {
    MARKER_REPLACEMENTS
        .iter()
        .fold(raw.to_string(), |acc, (marker, replacement)| {
            acc.replace(marker, replacement)
        })
}

/// Parse a `TIME_LAYOUT` string as a wall-clock time in the local time zone.
///
/// Ambiguous times (clocks set back) resolve to the earlier instant; times
/// skipped by a forward shift are rejected.
pub fn parse_local_timestamp(value: &str) -> Result<DateTime<Local>, TimestampError> {
    let naive = NaiveDateTime::parse_from_str(value, TIME_LAYOUT)?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or(TimestampError::NonexistentLocalTime(naive))
}

/// Normalize then parse a localized action time.
pub fn parse_action_time(raw: &str) -> Result<DateTime<Local>, TimestampError> {
    parse_local_timestamp(&normalize_timestamp(raw))
}

/// Render an instant back in `TIME_LAYOUT`, suitable for `--lastTime`.
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format(TIME_LAYOUT).to_string()
}
