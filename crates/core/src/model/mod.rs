mod appointment;
mod cell;
mod date;
mod selection;
mod time_slot;

pub use appointment::{appointments_from_json, BookedAppointment};
pub use cell::{CalendarCell, DisabledReason};
pub use date::{date_key, weekday_index};
pub use selection::SelectionState;
pub use time_slot::TimeSlot;
