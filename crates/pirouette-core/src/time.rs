use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// A studio-local wall-clock time, stored as minutes since midnight.
/// No timezone: the studio runs on a single local clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MINUTES_PER_DAY: u16 = 24 * 60;

    /// Parses a 24-hour "HH:MM" string.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let malformed = || DomainError::MalformedTime(s.into());
        let (hours, minutes) = s.split_once(':').ok_or_else(malformed)?;
        let hours = parse_field(hours).ok_or_else(malformed)?;
        let minutes = parse_field(minutes).ok_or_else(malformed)?;
        if hours > 23 || minutes > 59 {
            return Err(malformed());
        }
        Ok(Self(hours * 60 + minutes))
    }

    pub fn from_minutes(minutes: u16) -> Result<Self, DomainError> {
        if minutes >= Self::MINUTES_PER_DAY {
            return Err(DomainError::MalformedTime(format!("{minutes} minutes")));
        }
        Ok(Self(minutes))
    }

    pub fn minutes(&self) -> u16 {
        self.0
    }
}

fn parse_field(s: &str) -> Option<u16> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A half-open range `[start, end)` within one day. Two ranges that merely
/// touch (one ends exactly when the other starts) do not overlap, so
/// back-to-back classes in the same room are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeRange {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, DomainError> {
        if end <= start {
            return Err(DomainError::InvalidSlot);
        }
        Ok(Self { start, end })
    }

    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
