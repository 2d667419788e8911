pub mod availability;
pub mod clock;
pub mod error;
pub mod grid;
pub mod model;
pub mod schedule;
pub mod scheduler;
pub mod validation;

pub use availability::{is_fully_booked, open_slots, AppointmentIndex};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, Result};
pub use grid::{GridQuery, MonthGrid, GRID_CELLS};
pub use model::{
    appointments_from_json, date_key, BookedAppointment, CalendarCell, DisabledReason,
    SelectionState, TimeSlot,
};
pub use schedule::{day_schedule, day_schedule_for_index};
pub use scheduler::{AppointmentScheduler, SchedulerConfig, SchedulerEvent};
