mod month;
mod slots;

pub use month::MonthCommand;
pub use slots::SlotsCommand;
