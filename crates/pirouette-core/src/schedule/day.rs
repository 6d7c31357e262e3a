use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Day of the studio week. On the wire this is the 0=Sunday..6=Saturday
/// index used by the calendar front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayOfWeek(Weekday);

impl DayOfWeek {
    pub fn from_index(index: u8) -> Result<Self, DomainError> {
        let day = match index {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            other => return Err(DomainError::InvalidDay(other)),
        };
        Ok(Self(day))
    }

    pub fn index(&self) -> u8 {
        self.0.num_days_from_sunday() as u8
    }

    pub fn weekday(&self) -> Weekday {
        self.0
    }
}

impl Serialize for DayOfWeek {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.index())
    }
}

impl<'de> Deserialize<'de> for DayOfWeek {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = u8::deserialize(deserializer)?;
        Self::from_index(index).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for index in 0..7 {
            assert_eq!(DayOfWeek::from_index(index).unwrap().index(), index);
        }
    }

    #[test]
    fn sunday_is_zero() {
        let sunday = DayOfWeek::from_index(0).unwrap();
        assert_eq!(sunday.weekday(), Weekday::Sun);
        let saturday = DayOfWeek::from_index(6).unwrap();
        assert_eq!(saturday.weekday(), Weekday::Sat);
    }

    #[test]
    fn out_of_range_index_fails() {
        assert_eq!(DayOfWeek::from_index(7), Err(DomainError::InvalidDay(7)));
    }
}
