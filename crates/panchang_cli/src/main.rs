mod cli;
mod commands;
mod config;
mod convert;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::commands::Session;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = convert::load_config(cli.config.as_deref())?;
    let session = Session::new(config)?;
    match cli.command {
        Command::Day(args) => commands::day(&session, args),
        Command::Scan(args) => commands::scan(&session, args),
        Command::Festivals(args) => commands::festivals(&session, args),
        Command::FestivalDates(args) => commands::festival_dates(&session, args),
        Command::Chart(args) => commands::chart(&session, args),
        Command::Ruler(args) => commands::ruler(&session, args),
        Command::Sunrise(args) => commands::sunrise(&session, args),
    }
}
