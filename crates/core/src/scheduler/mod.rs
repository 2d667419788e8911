//! Date/time selection state machine over the month grid.
//!
//! Holds the displayed month, the current selection, and the booked-slot
//! index. The hosting application owns persistence; this type only decides
//! which clicks are valid and what they change.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::availability::{open_slots, AppointmentIndex};
use crate::clock::Clock;
use crate::error::Result;
use crate::grid::{GridQuery, MonthGrid};
use crate::model::{date_key, BookedAppointment, SelectionState, TimeSlot};

/// Host-supplied scheduling constraints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SchedulerConfig {
    /// Earliest selectable date; defaults to today.
    #[serde(default)]
    pub min_date: Option<NaiveDate>,
    #[serde(default)]
    pub max_date: Option<NaiveDate>,
    /// `YYYY-MM-DD` keys to force-disable.
    #[serde(default)]
    pub disabled_dates: Vec<String>,
    /// Slot list shown before any date is selected.
    #[serde(default)]
    pub preview_slots: Vec<TimeSlot>,
}

/// Emitted towards the hosting application on an accepted click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerEvent {
    /// Carries the `YYYY-MM-DD` key of the newly selected date.
    DateSelected(String),
    /// Carries the `HH:MM` form of the newly selected time.
    TimeSelected(String),
}

#[derive(Debug)]
pub struct AppointmentScheduler {
    config: SchedulerConfig,
    today: NaiveDate,
    view_year: i32,
    view_month: u32,
    selected_date: Option<NaiveDate>,
    selected_time: Option<TimeSlot>,
    show_slots: bool,
    index: AppointmentIndex,
}

impl AppointmentScheduler {
    /// Opens on today's month with nothing selected.
    pub fn new(
        config: SchedulerConfig,
        clock: &dyn Clock,
        appointments: &[BookedAppointment],
    ) -> Self {
        let today = clock.today();
        Self {
            config,
            view_year: today.year(),
            view_month: today.month(),
            today,
            selected_date: None,
            selected_time: None,
            show_slots: false,
            index: AppointmentIndex::new(appointments),
        }
    }

    pub fn displayed_month(&self) -> (i32, u32) {
        (self.view_year, self.view_month)
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<TimeSlot> {
        self.selected_time
    }

    pub fn shows_time_slots(&self) -> bool {
        self.show_slots
    }

    /// Navigation never touches the selection, only the displayed month.
    pub fn previous_month(&mut self) {
        if self.view_month == 1 {
            self.view_month = 12;
            self.view_year -= 1;
        } else {
            self.view_month -= 1;
        }
    }

    pub fn next_month(&mut self) {
        if self.view_month == 12 {
            self.view_month = 1;
            self.view_year += 1;
        } else {
            self.view_month += 1;
        }
    }

    /// The 42-cell grid for the displayed month.
    pub fn grid(&self) -> Result<MonthGrid> {
        MonthGrid::build(
            &GridQuery {
                year: self.view_year,
                month: self.view_month,
                today: self.today,
                min_date: self.config.min_date.unwrap_or(self.today),
                max_date: self.config.max_date,
                disabled_dates: &self.config.disabled_dates,
                selected_date: self.selected_date,
            },
            &self.index,
        )
    }

    /// A date click. No-op unless the cell is in the displayed month and
    /// selectable; an accepted click replaces the date, reveals the slot
    /// list, and drops any previously selected time.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<Option<SchedulerEvent>> {
        let grid = self.grid()?;
        let selectable = grid
            .cells
            .iter()
            .any(|cell| cell.date == date && cell.is_selectable());
        if !selectable {
            debug!(%date, "date click ignored: cell not selectable");
            return Ok(None);
        }

        self.selected_date = Some(date);
        self.selected_time = None;
        self.show_slots = true;
        Ok(Some(SchedulerEvent::DateSelected(date_key(date))))
    }

    /// A time-slot click. No-op unless a date is selected and the slot is
    /// currently open for it; never touches the date or the grid.
    pub fn select_time(&mut self, slot: TimeSlot) -> Option<SchedulerEvent> {
        let date = self.selected_date?;
        if !open_slots(date, &self.index).contains(&slot) {
            debug!(%slot, "time click ignored: slot not open");
            return None;
        }
        self.selected_time = Some(slot);
        Some(SchedulerEvent::TimeSelected(slot.to_string()))
    }

    /// Open slots of the selected date, or the configured preview list while
    /// no date is selected yet.
    pub fn visible_slots(&self) -> Vec<TimeSlot> {
        match self.selected_date {
            Some(date) => open_slots(date, &self.index),
            None => self.config.preview_slots.clone(),
        }
    }

    pub fn state(&self) -> SelectionState {
        match (self.selected_date, self.selected_time) {
            (None, _) => SelectionState::NoDateSelected,
            (Some(_), None) => SelectionState::DateSelected,
            (Some(_), Some(_)) => SelectionState::DateAndTimeSelected,
        }
    }
}
