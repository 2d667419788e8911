mod commands;
mod loader;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{MonthCommand, SlotsCommand};

/// Agenda CLI - appointment availability inspection tool
#[derive(Debug, Parser)]
#[command(
    name = "agenda",
    version,
    about = "Appointment availability inspection tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the availability grid for a month
    Month(MonthCommand),
    /// List the open slots for a date
    Slots(SlotsCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Month(cmd) => cmd.execute()?,
        Commands::Slots(cmd) => cmd.execute()?,
    };

    std::process::exit(exit_code);
}
