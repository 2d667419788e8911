//! Fixed business-hours schedule per weekday.
//!
//! The calendar is a hard business rule, not configuration: closed on Sunday,
//! half-hourly slots from 08:00 on every other day, with a short Saturday.
//! The closing slot on open days sits past the last regular half-hour run and
//! is appended explicitly.

use chrono::Weekday;
use lazy_static::lazy_static;

use crate::error::{CoreError, Result};
use crate::model::TimeSlot;

const OPENING: TimeSlot = TimeSlot::from_hm(8, 0);
const WEEKDAY_LAST_REGULAR: TimeSlot = TimeSlot::from_hm(16, 30);
const WEEKDAY_CLOSING: TimeSlot = TimeSlot::from_hm(17, 0);
const SATURDAY_LAST_REGULAR: TimeSlot = TimeSlot::from_hm(13, 0);
const SATURDAY_CLOSING: TimeSlot = TimeSlot::from_hm(13, 30);

lazy_static! {
    static ref WEEKDAY_SCHEDULE: Vec<TimeSlot> =
        schedule_until(WEEKDAY_LAST_REGULAR, WEEKDAY_CLOSING);
    static ref SATURDAY_SCHEDULE: Vec<TimeSlot> =
        schedule_until(SATURDAY_LAST_REGULAR, SATURDAY_CLOSING);
    static ref SUNDAY_SCHEDULE: Vec<TimeSlot> = Vec::new();
}

fn schedule_until(last_regular: TimeSlot, closing: TimeSlot) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    let mut current = Some(OPENING);
    while let Some(slot) = current {
        if slot > last_regular {
            break;
        }
        slots.push(slot);
        current = slot.next_half_hour();
    }
    slots.push(closing);
    slots
}

/// The ordered, duplicate-free sequence of bookable slots for a weekday.
///
/// Pure and total; the table is computed once and shared.
pub fn day_schedule(weekday: Weekday) -> &'static [TimeSlot] {
    match weekday {
        Weekday::Sun => &SUNDAY_SCHEDULE,
        Weekday::Sat => &SATURDAY_SCHEDULE,
        _ => &WEEKDAY_SCHEDULE,
    }
}

/// Schedule lookup by numeric index (0=Sunday..6=Saturday), the form backend
/// feeds use. Out-of-range indices fail rather than clamp.
pub fn day_schedule_for_index(index: u8) -> Result<&'static [TimeSlot]> {
    let weekday = match index {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        _ => return Err(CoreError::InvalidWeekday { index }),
    };
    Ok(day_schedule(weekday))
}
