//! Wall-clock times of day and the injectable "now" used by availability checks.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::slots::InvalidConfiguration;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day stored as minutes since midnight (0..1440).
///
/// Rendered and parsed as zero-padded `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Build from minutes since midnight, rejecting values past 23:59
    pub fn from_minutes(minutes: u16) -> Result<Self, InvalidConfiguration> {
        if minutes >= MINUTES_PER_DAY {
            return Err(InvalidConfiguration::ClockOutOfRange(minutes as u32));
        }
        Ok(Self(minutes))
    }

    /// Compile-time constructor for known-good literals; wraps past midnight
    pub(crate) const fn at(hour: u8, minute: u8) -> Self {
        Self((hour as u16 * 60 + minute as u16) % MINUTES_PER_DAY)
    }

    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, InvalidConfiguration> {
        if hour >= 24 || minute >= 60 {
            return Err(InvalidConfiguration::MalformedClockTime(format!("{:02}:{:02}", hour, minute)));
        }
        Ok(Self(hour as u16 * 60 + minute as u16))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Time-of-day component of a full timestamp, seconds discarded
    pub fn of(datetime: &NaiveDateTime) -> Self {
        Self((datetime.hour() * 60 + datetime.minute()) as u16)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = InvalidConfiguration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidConfiguration::MalformedClockTime(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(malformed)?;
        let hour = two_digits(hour).ok_or_else(malformed)?;
        let minute = two_digits(minute).ok_or_else(malformed)?;

        Self::from_hm(hour, minute).map_err(|_| malformed())
    }
}

/// Exactly two ASCII digits, so signs, spaces and single digits are rejected
fn two_digits(field: &str) -> Option<u8> {
    match field.as_bytes() {
        [tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => Some((tens - b'0') * 10 + (ones - b'0')),
        _ => None,
    }
}

impl TryFrom<String> for ClockTime {
    type Error = InvalidConfiguration;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// Source of the current local date and time.
///
/// Availability rules never read an ambient clock; callers pass one of these.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format_zero_padded() {
        let t: ClockTime = "09:05".parse().unwrap();
        assert_eq!(t.minutes(), 9 * 60 + 5);
        assert_eq!(t.to_string(), "09:05");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "12", "24:00", "12:60", "ab:cd", "12:5", "-1:00", "12:00:00", "9:05", "+9:05", "09:+5", " 11:30 ", "11:30 ", "１１:30"] {
            assert!(bad.parse::<ClockTime>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_bounds() {
        assert_eq!(ClockTime::from_minutes(0).unwrap().to_string(), "00:00");
        assert_eq!(ClockTime::from_minutes(1439).unwrap().to_string(), "23:59");
        assert_eq!(
            ClockTime::from_minutes(1440),
            Err(InvalidConfiguration::ClockOutOfRange(1440))
        );
    }

    #[test]
    fn test_of_datetime_drops_seconds() {
        let dt = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(14, 5, 59)
            .unwrap();
        assert_eq!(ClockTime::of(&dt).to_string(), "14:05");
    }

    #[test]
    fn test_serde_uses_hh_mm_strings() {
        let t = ClockTime::from_hm(11, 30).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"11:30\"");
        let back: ClockTime = serde_json::from_str("\"22:00\"").unwrap();
        assert_eq!(back.minutes(), 22 * 60);
        assert!(serde_json::from_str::<ClockTime>("\"25:00\"").is_err());
    }

    #[test]
    fn test_fixed_clock_today() {
        let dt = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let clock = FixedClock(dt);
        assert_eq!(clock.today(), dt.date());
        assert_eq!((&clock).now(), dt);
    }
}
