use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid weekday index: {index} (expected 0=Sunday..6=Saturday)")]
    InvalidWeekday { index: u8 },

    #[error("invalid month: {month} (expected 1-12)")]
    InvalidMonth { month: u32 },

    #[error("invalid date key '{value}': {reason}")]
    InvalidDateKey { value: String, reason: String },

    #[error("invalid time of day '{value}': expected zero-padded HH:MM (24h)")]
    InvalidTimeOfDay { value: String },

    #[error("failed to parse appointment payload: {reason}")]
    AppointmentPayload { reason: String },
}
