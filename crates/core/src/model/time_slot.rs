use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::parse_time_of_day;

/// A bookable time of day, displayed and serialized as zero-padded `HH:MM` (24h).
///
/// The generated schedules only ever contain half-hour boundaries; arbitrary
/// minutes are still representable because backend feeds may carry
/// out-of-policy times that the engine must tolerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    hour: u8,
    minute: u8,
}

impl TimeSlot {
    pub fn new(hour: u8, minute: u8) -> Result<Self, CoreError> {
        if hour > 23 || minute > 59 {
            return Err(CoreError::InvalidTimeOfDay {
                value: format!("{:02}:{:02}", hour, minute),
            });
        }
        Ok(Self { hour, minute })
    }

    /// Range-unchecked constructor for compile-time schedule constants.
    pub(crate) const fn from_hm(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// The next half-hour boundary, or `None` past the end of the day.
    pub fn next_half_hour(self) -> Option<Self> {
        if self.minute < 30 {
            Some(Self {
                hour: self.hour,
                minute: 30,
            })
        } else if self.hour < 23 {
            Some(Self {
                hour: self.hour + 1,
                minute: 0,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeSlot {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_time_of_day(value)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}
