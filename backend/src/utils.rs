use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ISO8601_DURATION: Regex =
        Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").expect("valid duration regex");
}

/// Parse ISO8601 date string (RFC 3339 as returned by YouTube) to a UTC timestamp
pub fn parse_iso8601_timestamp(date_str: &str) -> Option<DateTime<Utc>> {
    if date_str.is_empty() {
        return None;
    }
    date_str.parse::<DateTime<Utc>>().ok()
}

/// Parse ISO8601 duration string (PT1H2M3S) to total seconds.
///
/// Hour, minute and second components are each optional, but at least one
/// must be present. Anything else (`P0D` for live streams, day components,
/// garbage) yields `None`.
pub fn parse_iso8601_duration_to_seconds(duration_str: &str) -> Option<u64> {
    let captures = ISO8601_DURATION.captures(duration_str.trim())?;
    if captures.iter().skip(1).all(|group| group.is_none()) {
        return None;
    }

    let component = |idx: usize| -> Option<u64> {
        match captures.get(idx) {
            Some(m) => m.as_str().parse::<u64>().ok(),
            None => Some(0),
        }
    };

    let hours = component(1)?;
    let minutes = component(2)?;
    let seconds = component(3)?;

    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}

/// Counts arrive from the Data API as decimal strings
pub fn parse_count(value: Option<&str>) -> u64 {
    value.and_then(|v| v.parse::<u64>().ok()).unwrap_or(0)
}
