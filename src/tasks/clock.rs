//! Adding minutes to a wall-clock time.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-1]?[0-9]|2[0-3]):([0-5][0-9])$").expect("valid time pattern")
});

const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTime(pub String);

impl fmt::Display for InvalidTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time '{}', use HH:MM", self.0)
    }
}

impl std::error::Error for InvalidTime {}

/// Add `minutes` (possibly negative) to `time`, wrapping around midnight.
pub fn add_minutes(time: &str, minutes: i64) -> Result<String, InvalidTime> {
    let caps = TIME
        .captures(time.trim())
        .ok_or_else(|| InvalidTime(time.to_string()))?;
    // both groups are at most two digits, so parsing cannot fail
    let hours: i64 = caps[1].parse().map_err(|_| InvalidTime(time.to_string()))?;
    let mins: i64 = caps[2].parse().map_err(|_| InvalidTime(time.to_string()))?;

    let total = (hours * 60 + mins + minutes.rem_euclid(MINUTES_PER_DAY)) % MINUTES_PER_DAY;
    Ok(format!("{:02}:{:02}", total / 60, total % 60))
}
