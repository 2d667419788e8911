use std::path::PathBuf;

use agenda_core::validation::parse_date_key;
use agenda_core::{open_slots, AppointmentIndex, Clock, GridQuery, MonthGrid, SystemClock};
use anyhow::Result;
use clap::Parser;

use crate::loader::load_appointments;
use crate::render::{parse_output_format, report_month};

/// Render the availability grid for a month
#[derive(Debug, Parser)]
pub struct MonthCommand {
    /// Calendar year
    #[arg(long)]
    pub year: i32,

    /// Calendar month (1-12)
    #[arg(long)]
    pub month: u32,

    /// Booked appointments: JSON/YAML file, or a directory to sweep
    #[arg(long, value_name = "PATH")]
    pub appointments: Option<PathBuf>,

    /// Override today's date (YYYY-MM-DD); defaults to the system clock
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,

    /// Currently selected date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub selected: Option<String>,

    /// Earliest selectable date; defaults to today
    #[arg(long, value_name = "DATE")]
    pub min: Option<String>,

    /// Latest selectable date
    #[arg(long, value_name = "DATE")]
    pub max: Option<String>,

    /// Date to force-disable (repeatable)
    #[arg(long = "disable", value_name = "DATE")]
    pub disabled: Vec<String>,

    /// Output format (human, json)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,
}

impl MonthCommand {
    pub fn execute(&self) -> Result<i32> {
        let format = parse_output_format(&self.output)?;

        let appointments = match &self.appointments {
            Some(path) => match load_appointments(path) {
                Ok(appointments) => appointments,
                Err(error) => {
                    eprintln!("{error:#}");
                    return Ok(2);
                }
            },
            None => Vec::new(),
        };

        let inputs = match self.parse_dates() {
            Ok(inputs) => inputs,
            Err(error) => {
                eprintln!("{error:#}");
                return Ok(2);
            }
        };

        let index = AppointmentIndex::new(&appointments);
        let grid = MonthGrid::build(
            &GridQuery {
                year: self.year,
                month: self.month,
                today: inputs.today,
                min_date: inputs.min.unwrap_or(inputs.today),
                max_date: inputs.max,
                disabled_dates: &self.disabled,
                selected_date: inputs.selected,
            },
            &index,
        )?;

        let selected_slots = inputs
            .selected
            .map(|date| (agenda_core::date_key(date), open_slots(date, &index)));
        let selected_ref = selected_slots
            .as_ref()
            .map(|(key, slots)| (key.as_str(), slots.as_slice()));

        report_month(&grid, selected_ref, format)?;
        Ok(0)
    }

    fn parse_dates(&self) -> Result<DateInputs> {
        let today = match &self.today {
            Some(key) => parse_date_key(key)?,
            None => SystemClock.today(),
        };
        let selected = self.selected.as_deref().map(parse_date_key).transpose()?;
        let min = self.min.as_deref().map(parse_date_key).transpose()?;
        let max = self.max.as_deref().map(parse_date_key).transpose()?;
        // disabled dates are validated too, so a typo fails loudly instead of
        // silently never matching a cell
        for key in &self.disabled {
            parse_date_key(key)?;
        }
        Ok(DateInputs {
            today,
            selected,
            min,
            max,
        })
    }
}

struct DateInputs {
    today: chrono::NaiveDate,
    selected: Option<chrono::NaiveDate>,
    min: Option<chrono::NaiveDate>,
    max: Option<chrono::NaiveDate>,
}
