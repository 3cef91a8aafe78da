mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use agendum_core::config::GlobalConfig;
use agendum_core::month::Month;
use agendum_core::store::EventStore;

#[derive(Parser)]
#[command(name = "agendum")]
#[command(about = "Month-grid calendar with per-day events")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid
    Cal {
        /// Month to show (YYYY-MM), defaults to the current month
        month: Option<String>,
    },
    /// Open an interactive session for one day
    Day {
        /// Day to open (YYYY-MM-DD), defaults to today
        date: Option<String>,
    },
    /// List a day's events
    List {
        /// Day to list (YYYY-MM-DD)
        date: String,
    },
    /// Add an event to a day
    Add {
        /// Day the event belongs to (YYYY-MM-DD)
        date: String,

        /// Time of day, e.g. "09:00"
        time: String,

        /// What the event is
        description: String,
    },
    /// Edit an existing event
    Edit {
        /// Day the event belongs to (YYYY-MM-DD)
        date: String,

        /// Id of the event to edit
        id: u64,

        /// New time of day
        time: String,

        /// New description
        description: String,
    },
    /// Delete an event from a day
    Delete {
        /// Day the event belongs to (YYYY-MM-DD)
        date: String,

        /// Id of the event to delete
        id: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = GlobalConfig::load()?;
    info!(data_dir = %config.data_dir.display(), "loaded configuration");

    let mut store = EventStore::open(config.events_path());

    match cli.command {
        Commands::Cal { month } => {
            let month = match month {
                Some(raw) => raw.parse()?,
                None => Month::current(),
            };
            commands::cal::run(&store, month)
        }
        Commands::Day { date } => {
            let date = match date {
                Some(raw) => raw.parse()?,
                None => agendum_core::DateKey::today(),
            };
            commands::day::run(&mut store, date)
        }
        Commands::List { date } => commands::list::run(&store, date.parse()?),
        Commands::Add {
            date,
            time,
            description,
        } => commands::add::run(&mut store, date.parse()?, time, description),
        Commands::Edit {
            date,
            id,
            time,
            description,
        } => commands::edit::run(&mut store, date.parse()?, id, time, description),
        Commands::Delete { date, id } => commands::delete::run(&mut store, date.parse()?, id),
    }
}

fn init_tracing(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
