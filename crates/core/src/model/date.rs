use chrono::{Datelike, NaiveDate};

/// Stable `YYYY-MM-DD` key for a date.
///
/// Built from numeric components so the key never shifts across timezones or
/// locale formatting rules.
pub fn date_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Weekday as 0=Sunday..6=Saturday, the convention booked-appointment feeds use.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}
