use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use festivals_core::{Agenda, Clock, FixedClock, Month, SystemClock};
use std::path::PathBuf;

mod commands;
mod config;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "festivals", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Festival records file (default: ~/.local/share/festivals/festivals.txt)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Pretend today is this date (dd-mm-yyyy)
    #[arg(long, global = true, value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// Abort on the first malformed record instead of skipping it
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Show the whole agenda, month by month
    ///
    /// Each month is listed with the number of festivals it holds, followed
    /// by its festivals sorted by name. Every festival shows its styles,
    /// venue, dates and whether it is upcoming, on, or concluded.
    Show {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Count the festivals scheduled in one or more months
    Count {
        /// Month names (june, jun) or numbers (6)
        #[arg(required = true)]
        months: Vec<Month>,
    },
    /// List festival names grouped by style
    Styles {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Cancel the ongoing festivals held at the given venues in a month
    ///
    /// Festivals that have already concluded or have not started yet are
    /// left alone. The records file is not modified; the resulting agenda
    /// is printed.
    Cancel {
        /// Month to cancel festivals in
        #[arg(long)]
        month: Month,

        /// Venue to cancel festivals at (repeatable)
        #[arg(long = "venue", required = true)]
        venues: Vec<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file if it doesn't exist
    Init,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    festivals_core::parse::parse_date(s.trim()).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let clock: Box<dyn Clock> = match cli.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    let load = || -> Result<Agenda> {
        let config = Config::load()?.with_overrides(cli.file.clone(), cli.strict);
        commands::load_agenda(&config)
    };

    match cli.command {
        Commands::Show { json } => commands::show_agenda(&load()?, clock.today(), json)?,
        Commands::Count { months } => commands::count_months(&load()?, &months),
        Commands::Styles { json } => commands::show_styles(&load()?, json)?,
        Commands::Cancel { month, venues } => {
            commands::cancel_festivals(load()?, &venues, month, clock.today());
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config()?,
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Example => commands::config::show_example(),
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
