//! Strict parsing of externally-sourced date keys and times of day.
//!
//! Backend feeds and CLI arguments arrive as strings; everything here
//! validates shape with a compiled-once pattern before handing the value to
//! chrono, so a malformed key fails loudly instead of resolving to the wrong
//! day.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{CoreError, Result};
use crate::model::TimeSlot;

lazy_static! {
    static ref DATE_KEY_PATTERN: Regex =
        Regex::new(r"^(\d{4})-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").unwrap();
    static ref TIME_OF_DAY_PATTERN: Regex = Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").unwrap();
}

/// Parse a zero-padded `YYYY-MM-DD` date key.
pub fn parse_date_key(value: &str) -> Result<NaiveDate> {
    let captures =
        DATE_KEY_PATTERN
            .captures(value)
            .ok_or_else(|| CoreError::InvalidDateKey {
                value: value.to_string(),
                reason: "expected zero-padded YYYY-MM-DD".to_string(),
            })?;

    let component = |index: usize| -> Result<u32> {
        captures[index]
            .parse()
            .map_err(|_| CoreError::InvalidDateKey {
                value: value.to_string(),
                reason: "numeric component out of range".to_string(),
            })
    };

    let year = component(1)? as i32;
    let month = component(2)?;
    let day = component(3)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| CoreError::InvalidDateKey {
        value: value.to_string(),
        reason: "no such calendar day".to_string(),
    })
}

/// Parse a zero-padded `HH:MM` time of day (24h clock).
pub fn parse_time_of_day(value: &str) -> Result<TimeSlot> {
    let captures =
        TIME_OF_DAY_PATTERN
            .captures(value)
            .ok_or_else(|| CoreError::InvalidTimeOfDay {
                value: value.to_string(),
            })?;

    // The pattern already bounds both components; the parses cannot overflow u8.
    let hour: u8 = captures[1]
        .parse()
        .map_err(|_| CoreError::InvalidTimeOfDay {
            value: value.to_string(),
        })?;
    let minute: u8 = captures[2]
        .parse()
        .map_err(|_| CoreError::InvalidTimeOfDay {
            value: value.to_string(),
        })?;

    TimeSlot::new(hour, minute)
}
