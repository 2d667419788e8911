//! Structural invariants of the 42-cell month grid.

mod common;

use agenda_core::{
    AppointmentIndex, DisabledReason, GridQuery, MonthGrid, GRID_CELLS,
};
use chrono::{Datelike, Weekday};
use common::{booked, date, full_weekday_bookings};

fn query<'a>(
    year: i32,
    month: u32,
    today: chrono::NaiveDate,
    disabled_dates: &'a [String],
) -> GridQuery<'a> {
    GridQuery {
        year,
        month,
        today,
        min_date: today,
        max_date: None,
        disabled_dates,
        selected_date: None,
    }
}

#[test]
fn every_month_has_exactly_42_cells_aligned_sunday_to_saturday() {
    let index = AppointmentIndex::default();
    let today = date("2020-01-01");

    for year in [2020, 2023, 2024, 2025] {
        for month in 1..=12 {
            let grid = MonthGrid::build(&query(year, month, today, &[]), &index).unwrap();
            assert_eq!(grid.cells.len(), GRID_CELLS, "{year}-{month:02}");
            assert_eq!(grid.cells[0].date.weekday(), Weekday::Sun, "{year}-{month:02}");
            assert_eq!(grid.cells[41].date.weekday(), Weekday::Sat, "{year}-{month:02}");
            assert_eq!(grid.weeks().count(), 6);
        }
    }
}

#[test]
fn leap_february_keeps_the_grid_size() {
    let index = AppointmentIndex::default();
    let grid = MonthGrid::build(&query(2024, 2, date("2024-02-01"), &[]), &index).unwrap();
    assert_eq!(grid.cells.len(), GRID_CELLS);
    assert_eq!(
        grid.cells.iter().filter(|cell| cell.in_current_month).count(),
        29
    );
}

#[test]
fn past_dates_are_disabled_even_with_open_slots() {
    let index = AppointmentIndex::default();
    // today mid-month: the 3rd (a Monday) has a full schedule but lies in the past
    let grid = MonthGrid::build(&query(2024, 6, date("2024-06-10"), &[]), &index).unwrap();
    let third = grid.cells.iter().find(|cell| cell.key == "2024-06-03").unwrap();
    assert!(third.is_disabled);
    assert_eq!(third.disabled_reason, Some(DisabledReason::PastDate));
}

#[test]
fn explicit_disabled_dates_override_open_days() {
    let disabled = vec!["2024-06-12".to_string()];
    let index = AppointmentIndex::default();
    let grid = MonthGrid::build(&query(2024, 6, date("2024-06-10"), &disabled), &index).unwrap();
    let cell = grid.cells.iter().find(|cell| cell.key == "2024-06-12").unwrap();
    assert!(cell.is_disabled);
    assert_eq!(cell.disabled_reason, Some(DisabledReason::ExplicitlyDisabled));
}

#[test]
fn max_date_disables_everything_after_it() {
    let index = AppointmentIndex::default();
    let mut q = query(2024, 6, date("2024-06-10"), &[]);
    q.max_date = Some(date("2024-06-20"));
    let grid = MonthGrid::build(&q, &index).unwrap();

    let cell = grid.cells.iter().find(|cell| cell.key == "2024-06-21").unwrap();
    assert_eq!(cell.disabled_reason, Some(DisabledReason::AfterMaximum));

    let boundary = grid.cells.iter().find(|cell| cell.key == "2024-06-20").unwrap();
    assert!(!boundary.is_disabled, "max date itself stays selectable");
}

#[test]
fn sundays_are_closed_not_fully_booked() {
    let index = AppointmentIndex::new(&[booked("2024-06-16", "09:00")]);
    let grid = MonthGrid::build(&query(2024, 6, date("2024-06-10"), &[]), &index).unwrap();
    let sunday = grid.cells.iter().find(|cell| cell.key == "2024-06-16").unwrap();
    assert!(sunday.is_disabled);
    assert!(!sunday.is_fully_booked);
    assert_eq!(sunday.disabled_reason, Some(DisabledReason::ClosedWeekday));
}

#[test]
fn a_fully_booked_monday_is_disabled_with_the_booked_reason() {
    // 2024-06-17 is a Monday with a 19-slot schedule
    let bookings = full_weekday_bookings("2024-06-17");
    assert_eq!(bookings.len(), 19);

    let index = AppointmentIndex::new(&bookings);
    let grid = MonthGrid::build(&query(2024, 6, date("2024-06-10"), &[]), &index).unwrap();
    let monday = grid.cells.iter().find(|cell| cell.key == "2024-06-17").unwrap();
    assert!(monday.is_fully_booked);
    assert_eq!(monday.disabled_reason, Some(DisabledReason::FullyBooked));

    // one booking short leaves the day open
    let index = AppointmentIndex::new(&bookings[..18]);
    let grid = MonthGrid::build(&query(2024, 6, date("2024-06-10"), &[]), &index).unwrap();
    let monday = grid.cells.iter().find(|cell| cell.key == "2024-06-17").unwrap();
    assert!(!monday.is_fully_booked);
    assert!(monday.is_selectable());
}

#[test]
fn selected_and_today_markers_land_on_the_right_cells() {
    let index = AppointmentIndex::default();
    let mut q = query(2024, 6, date("2024-06-10"), &[]);
    q.selected_date = Some(date("2024-06-11"));
    let grid = MonthGrid::build(&q, &index).unwrap();

    let today = grid.cells.iter().find(|cell| cell.is_today).unwrap();
    assert_eq!(today.key, "2024-06-10");

    let selected = grid.cells.iter().find(|cell| cell.is_selected).unwrap();
    assert_eq!(selected.key, "2024-06-11");
}
