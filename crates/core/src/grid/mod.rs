//! Six-week month grid construction.
//!
//! The grid always spans 42 cells aligned Sunday through Saturday, padded
//! with disabled cells from the neighbouring months.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use tracing::debug;

use crate::availability::{is_fully_booked, AppointmentIndex};
use crate::error::{CoreError, Result};
use crate::model::{date_key, CalendarCell, DisabledReason};

/// Cells in every month grid: six full Sunday-to-Saturday weeks.
pub const GRID_CELLS: usize = 42;

/// Inputs for one month view.
#[derive(Debug, Clone)]
pub struct GridQuery<'a> {
    pub year: i32,
    /// 1-12, chrono's month convention.
    pub month: u32,
    pub today: NaiveDate,
    pub min_date: NaiveDate,
    pub max_date: Option<NaiveDate>,
    /// `YYYY-MM-DD` keys to force-disable.
    pub disabled_dates: &'a [String],
    pub selected_date: Option<NaiveDate>,
}

/// A built month view: exactly [`GRID_CELLS`] annotated cells.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub fn build(query: &GridQuery<'_>, index: &AppointmentIndex) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(query.year, query.month, 1)
            .ok_or(CoreError::InvalidMonth { month: query.month })?;

        let disabled_keys: HashSet<&str> =
            query.disabled_dates.iter().map(String::as_str).collect();

        // Walk 42 days from the Sunday on or before the 1st; leading and
        // trailing out-of-month cells fall out of the same loop.
        let lead = first.weekday().num_days_from_sunday() as i64;
        let start = first - Duration::days(lead);

        let cells = (0..GRID_CELLS as i64)
            .map(|offset| build_cell(start + Duration::days(offset), query, &disabled_keys, index))
            .collect();

        debug!(year = query.year, month = query.month, "built month grid");
        Ok(Self {
            year: query.year,
            month: query.month,
            cells,
        })
    }

    /// The grid as six Sunday-to-Saturday rows.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }
}

fn build_cell(
    date: NaiveDate,
    query: &GridQuery<'_>,
    disabled_keys: &HashSet<&str>,
    index: &AppointmentIndex,
) -> CalendarCell {
    let key = date_key(date);
    let in_current_month = date.year() == query.year && date.month() == query.month;
    let fully_booked = in_current_month && is_fully_booked(date, index);

    let disabled_reason = if !in_current_month {
        Some(DisabledReason::OutOfMonth)
    } else if date < query.min_date {
        Some(DisabledReason::BeforeMinimum)
    } else if query.max_date.is_some_and(|max| date > max) {
        Some(DisabledReason::AfterMaximum)
    } else if disabled_keys.contains(key.as_str()) {
        Some(DisabledReason::ExplicitlyDisabled)
    } else if date < query.today {
        Some(DisabledReason::PastDate)
    } else if date.weekday() == Weekday::Sun {
        Some(DisabledReason::ClosedWeekday)
    } else if fully_booked {
        Some(DisabledReason::FullyBooked)
    } else {
        None
    };

    CalendarCell {
        date,
        day: date.day(),
        in_current_month,
        is_today: date == query.today,
        is_selected: query.selected_date == Some(date),
        is_disabled: disabled_reason.is_some(),
        is_fully_booked: fully_booked,
        disabled_reason,
        key,
    }
}
