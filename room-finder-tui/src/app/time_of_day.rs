use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use time::macros::format_description;

const MINUTES_PER_DAY: i32 = 24 * 60;

/// Wall-clock time with minute precision, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time of day: {0:?}")]
pub struct ParseTimeOfDayError(String);

impl TimeOfDay {
    pub fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self(hour as u16 * 60 + minute as u16))
    }

    /// Minutes since midnight, snapping values outside the day to its ends.
    pub fn saturating_from_minutes(minutes: i32) -> Self {
        Self(minutes.clamp(0, MINUTES_PER_DAY - 1) as u16)
    }

    /// Parse `HH:MM` (a single-digit hour is accepted too).
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        time::Time::parse(raw, format_description!("[hour]:[minute]"))
            .or_else(|_| time::Time::parse(raw, format_description!("[hour padding:none]:[minute]")))
            .ok()
            .map(Self::from)
    }

    pub fn minutes(self) -> i32 {
        self.0 as i32
    }

    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Minutes from `earlier` to `self`; negative when `self` is earlier.
    pub fn minutes_since(self, earlier: TimeOfDay) -> i32 {
        self.minutes() - earlier.minutes()
    }

    pub fn as_time(self) -> time::Time {
        // Both parts are range-checked on construction.
        time::Time::from_hms(self.hour(), self.minute(), 0).unwrap_or(time::Time::MIDNIGHT)
    }

    /// 12-hour rendering used in user-facing notices, e.g. `7:00 AM`.
    pub fn to_12h_string(self) -> String {
        let (hour, suffix) = match self.hour() {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        format!("{}:{:02} {}", hour, self.minute(), suffix)
    }
}

impl From<time::Time> for TimeOfDay {
    fn from(t: time::Time) -> Self {
        Self(t.hour() as u16 * 60 + t.minute() as u16)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseTimeOfDayError(s.to_string()))
    }
}

/// Inclusive bounds a searchable time must fall within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowedRange {
    start: TimeOfDay,
    end: TimeOfDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("allowed range must end after it starts ({start} - {end})")]
pub struct InvalidRangeError {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl AllowedRange {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, InvalidRangeError> {
        if end <= start {
            return Err(InvalidRangeError { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn clamp(&self, t: TimeOfDay) -> TimeOfDay {
        t.clamp(self.start, self.end)
    }

    /// Clamp a raw minute count, which may lie outside the day entirely.
    pub fn clamp_minutes(&self, minutes: i32) -> TimeOfDay {
        TimeOfDay::saturating_from_minutes(minutes.clamp(self.start.minutes(), self.end.minutes()))
    }
}

impl Default for AllowedRange {
    fn default() -> Self {
        Self {
            start: TimeOfDay(7 * 60),
            end: TimeOfDay(22 * 60),
        }
    }
}

#[cfg(test)]
pub(crate) fn t(raw: &str) -> TimeOfDay {
    TimeOfDay::parse(raw).expect("test time should parse")
}
