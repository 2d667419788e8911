use agenda_core::model::{CalendarCell, TimeSlot};
use agenda_core::MonthGrid;
use anyhow::{bail, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

pub fn parse_output_format(value: &str) -> Result<OutputFormat> {
    match value {
        "human" => Ok(OutputFormat::Human),
        "json" => Ok(OutputFormat::Json),
        other => bail!("Unknown output format: {other} (expected human or json)"),
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Render a month grid, and the open slots of the selected date when one is
/// provided.
pub fn report_month(
    grid: &MonthGrid,
    open_slots: Option<(&str, &[TimeSlot])>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            report_month_human(grid, open_slots);
            Ok(())
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "year": grid.year,
                "month": grid.month,
                "cells": grid.cells,
                "selected_date": open_slots.map(|(key, _)| key),
                "open_slots": open_slots.map(|(_, slots)| slots),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
    }
}

fn report_month_human(grid: &MonthGrid, open_slots: Option<(&str, &[TimeSlot])>) {
    let month_name = MONTH_NAMES
        .get(grid.month as usize - 1)
        .copied()
        .unwrap_or("?");
    println!("{} {}", month_name, grid.year);
    println!(" Sun Mon Tue Wed Thu Fri Sat");

    for week in grid.weeks() {
        let row: String = week.iter().map(format_cell).collect();
        println!("{row}");
    }

    println!();
    println!("Legend: * today  > selected  ! fully booked  - unavailable");

    if let Some((key, slots)) = open_slots {
        println!();
        report_slots_human(key, slots);
    }
}

fn format_cell(cell: &CalendarCell) -> String {
    if !cell.in_current_month {
        return "   .".to_string();
    }

    let marker = if cell.is_selected {
        '>'
    } else if cell.is_today {
        '*'
    } else if cell.is_fully_booked {
        '!'
    } else if cell.is_disabled {
        '-'
    } else {
        ' '
    };
    format!(" {:>2}{}", cell.day, marker)
}

/// Render the open slots for one date.
pub fn report_slots(key: &str, slots: &[TimeSlot], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            report_slots_human(key, slots);
            Ok(())
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "date": key,
                "open_slots": slots,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
    }
}

fn report_slots_human(key: &str, slots: &[TimeSlot]) {
    if slots.is_empty() {
        println!("No open slots for {key}");
        return;
    }

    println!("Open slots for {key} ({}):", slots.len());
    for chunk in slots.chunks(6) {
        let row: Vec<String> = chunk.iter().map(|slot| slot.to_string()).collect();
        println!("  {}", row.join("  "));
    }
}
