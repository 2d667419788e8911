use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Why a grid cell cannot be clicked.
///
/// `FullyBooked` is kept distinct from the structurally-disabled reasons so a
/// renderer can strike through a full day instead of greying it out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DisabledReason {
    OutOfMonth,
    BeforeMinimum,
    AfterMaximum,
    ExplicitlyDisabled,
    PastDate,
    ClosedWeekday,
    FullyBooked,
}

/// One position in the 6-week month grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// `YYYY-MM-DD` key of `date`.
    pub key: String,
    pub day: u32,
    pub in_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_disabled: bool,
    pub is_fully_booked: bool,
    #[serde(default)]
    pub disabled_reason: Option<DisabledReason>,
}

impl CalendarCell {
    pub fn is_selectable(&self) -> bool {
        self.in_current_month && !self.is_disabled
    }
}
