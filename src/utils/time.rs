use chrono::{DateTime, NaiveDateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;
const MONTH: i64 = 2_592_000;
const YEAR: i64 = 31_536_000;

/// Format an instant relative to `now` (e.g. "3 days ago")
///
/// A unit is only used once at least two of it have passed, so 90 minutes
/// reads "90 minutes ago" rather than "1 hours ago".
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);

    for (unit_seconds, unit) in [
        (YEAR, "years"),
        (MONTH, "months"),
        (DAY, "days"),
        (HOUR, "hours"),
        (MINUTE, "minutes"),
    ] {
        let interval = seconds / unit_seconds;
        if interval > 1 {
            return format!("{} {} ago", interval, unit);
        }
    }

    format!("{} seconds ago", seconds)
}

/// [`relative_time`] against the current clock
pub fn relative_time_from_now(then: DateTime<Utc>) -> String {
    relative_time(then, Utc::now())
}

/// Parse an API timestamp such as `2013-05-01 12:30:00.123456+00:00`
///
/// Only the first 19 characters (date and time to the second) are read and
/// taken as UTC; fractional seconds and offsets are ignored. Strings of 19
/// characters or fewer are rejected.
pub fn parse_api_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if text.chars().count() <= 19 {
        return None;
    }

    let stamp = text.get(..19)?;
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(stamp, format).ok())
        .map(|naive| naive.and_utc())
}
