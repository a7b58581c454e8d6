use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wall-clock time of day, stored as minutes since midnight.
///
/// Arithmetic is deliberately unbounded: adding minutes can move past 24:00,
/// so a candidate block end that overruns the workday compares greater than
/// any end-of-day value instead of wrapping back to the morning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(i64);

/// Error returned when a string is not a valid `HH:MM` time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time '{0}' (expected HH:MM)")]
pub struct ClockTimeParseError(pub String);

impl ClockTime {
    /// Create a time from raw minutes since midnight.
    pub fn from_minutes(minutes: i64) -> Self {
        Self(minutes)
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> i64 {
        self.0
    }

    /// Parse a strict `HH:MM` (24h) time string.
    pub fn parse(s: &str) -> Result<Self, ClockTimeParseError> {
        let t = NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|_| ClockTimeParseError(s.to_string()))?;
        Ok(Self(i64::from(t.hour()) * 60 + i64::from(t.minute())))
    }

    /// This time shifted forward by `minutes` (may pass midnight).
    pub fn plus_minutes(&self, minutes: i64) -> Self {
        Self(self.0 + minutes)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClockTime::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ClockTime::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse a `YYYY-MM-DD` calendar date. Returns `None` on any failure.
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse an ISO-8601 timestamp, treating a trailing `Z` as a UTC-equivalent
/// offset and stripping it before parsing. A space may stand in for the `T`
/// separator, seconds and fractional seconds are optional, and a bare date
/// reads as midnight.
pub fn parse_iso_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.strip_suffix('Z').unwrap_or(s).replacen(' ', "T", 1);
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(&s, format) {
            return Some(ts);
        }
    }
    parse_calendar_date(&s).map(|d| d.and_time(NaiveTime::MIN))
}

/// The Monday of the ISO week containing `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - chrono::Duration::days(i64::from(date.weekday().num_days_from_monday()))
}
