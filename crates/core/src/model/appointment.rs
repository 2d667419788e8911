use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::model::TimeSlot;

/// A slot already reserved in the backend.
///
/// Supplied wholesale by the hosting application; the engine treats the list
/// as read-only input and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookedAppointment {
    #[serde(default)]
    pub id: Option<Uuid>,
    /// `YYYY-MM-DD` date key.
    pub date: String,
    pub time: TimeSlot,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Parse a backend appointments payload (a JSON array of records).
pub fn appointments_from_json(payload: &str) -> Result<Vec<BookedAppointment>> {
    serde_json::from_str(payload).map_err(|error| CoreError::AppointmentPayload {
        reason: error.to_string(),
    })
}
