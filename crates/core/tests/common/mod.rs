use std::fs;
use std::path::PathBuf;

use agenda_core::model::{BookedAppointment, TimeSlot};
use chrono::NaiveDate;

#[allow(dead_code)]
pub fn fixture_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(file_name)
}

#[allow(dead_code)]
pub fn read_fixture(file_name: &str) -> String {
    let path = fixture_path(file_name);
    fs::read_to_string(path).expect("fixture should be readable")
}

#[allow(dead_code)]
pub fn booked(date: &str, time: &str) -> BookedAppointment {
    BookedAppointment {
        id: None,
        date: date.to_string(),
        time: slot(time),
        created_at: None,
    }
}

#[allow(dead_code)]
pub fn slot(time: &str) -> TimeSlot {
    time.parse().expect("time literal should parse")
}

#[allow(dead_code)]
pub fn date(key: &str) -> NaiveDate {
    key.parse().expect("date literal should parse")
}

/// One booking per slot of a full Monday-to-Friday schedule for `key`.
#[allow(dead_code)]
pub fn full_weekday_bookings(key: &str) -> Vec<BookedAppointment> {
    agenda_core::day_schedule(chrono::Weekday::Mon)
        .iter()
        .map(|slot| BookedAppointment {
            id: None,
            date: key.to_string(),
            time: *slot,
            created_at: None,
        })
        .collect()
}
