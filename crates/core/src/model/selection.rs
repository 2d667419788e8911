use serde::{Deserialize, Serialize};

/// Progress of a booking interaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionState {
    NoDateSelected,
    DateSelected,
    DateAndTimeSelected,
}
