use std::path::PathBuf;

use agenda_core::validation::parse_date_key;
use agenda_core::{open_slots, AppointmentIndex};
use anyhow::Result;
use clap::Parser;

use crate::loader::load_appointments;
use crate::render::{parse_output_format, report_slots};

/// List the open slots for a date
#[derive(Debug, Parser)]
pub struct SlotsCommand {
    /// The date to inspect (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// Booked appointments: JSON/YAML file, or a directory to sweep
    #[arg(long, value_name = "PATH")]
    pub appointments: Option<PathBuf>,

    /// Output format (human, json)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,
}

impl SlotsCommand {
    pub fn execute(&self) -> Result<i32> {
        let format = parse_output_format(&self.output)?;

        let date = match parse_date_key(&self.date) {
            Ok(date) => date,
            Err(error) => {
                eprintln!("{error:#}");
                return Ok(2);
            }
        };

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

        let index = AppointmentIndex::new(&appointments);
        let open = open_slots(date, &index);
        report_slots(&self.date, &open, format)?;
        Ok(0)
    }
}
