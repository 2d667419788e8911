//! Open-slot computation against the booked-appointment feed.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::model::{date_key, BookedAppointment, TimeSlot};
use crate::schedule::day_schedule;

/// Per-date lookup over a booked-appointment feed.
///
/// Built once per feed and shared between slot filtering and grid building,
/// so fullness checks do not rescan the whole list for every cell.
#[derive(Debug, Clone, Default)]
pub struct AppointmentIndex {
    booked_times: HashMap<String, HashSet<TimeSlot>>,
    counts: HashMap<String, usize>,
}

impl AppointmentIndex {
    pub fn new(appointments: &[BookedAppointment]) -> Self {
        let mut booked_times: HashMap<String, HashSet<TimeSlot>> = HashMap::new();
        let mut counts: HashMap<String, usize> = HashMap::new();
        for appointment in appointments {
            booked_times
                .entry(appointment.date.clone())
                .or_default()
                .insert(appointment.time);
            *counts.entry(appointment.date.clone()).or_default() += 1;
        }
        Self {
            booked_times,
            counts,
        }
    }

    pub fn is_booked(&self, key: &str, slot: TimeSlot) -> bool {
        self.booked_times
            .get(key)
            .is_some_and(|times| times.contains(&slot))
    }

    /// Number of appointment records carrying this date key.
    pub fn booked_count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }
}

/// Slots still open on `date`: the day schedule minus booked times for that
/// exact key, in schedule order.
///
/// Booked times that are not part of the day schedule (stale or out-of-policy
/// records) are ignored rather than treated as an error.
pub fn open_slots(date: NaiveDate, index: &AppointmentIndex) -> Vec<TimeSlot> {
    let key = date_key(date);
    let open: Vec<TimeSlot> = day_schedule(date.weekday())
        .iter()
        .copied()
        .filter(|slot| !index.is_booked(&key, *slot))
        .collect();
    trace!(%key, open = open.len(), "computed open slots");
    open
}

/// A date is fully booked when its schedule is non-empty and the appointment
/// count for its key reaches the schedule length.
///
/// A closed day (Sunday) is never fully booked; it is merely unselectable,
/// and the grid keeps those two disabled states apart.
pub fn is_fully_booked(date: NaiveDate, index: &AppointmentIndex) -> bool {
    let schedule = day_schedule(date.weekday());
    if schedule.is_empty() {
        return false;
    }
    index.booked_count(&date_key(date)) >= schedule.len()
}
