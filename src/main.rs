use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

use darksky_grabber::{ApiConfig, CoordinateTable, Grabber, DEFAULT_TIMEZONE};

/// Archive DarkSky daily weather history per location.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the JSON file holding the API token
    #[clap(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Path to the JSON table of place coordinates
    #[clap(long, default_value = "coordinate.json")]
    coordinates: PathBuf,

    /// Directory holding the per-location log files (defaults to a per-user
    /// data directory)
    #[clap(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch every missing day for a place and append it to its log
    Fetch {
        /// Place name, as listed in the coordinate table
        place: String,

        /// First Unix timestamp to request, overriding the resume logic
        #[clap(long)]
        start: Option<i64>,

        /// Last Unix timestamp to consider, instead of the current time
        #[clap(long)]
        until: Option<i64>,
    },
    /// Flatten a place's log into a single JSON array of daily entries
    Convert {
        /// Place name, as listed in the coordinate table
        place: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let config = ApiConfig::from_file(&args.config)?;
    let coordinates = CoordinateTable::from_file(&args.coordinates)?;

    // Local-date rendering must match across every machine extending the same
    // archive, so pin the timezone before any date is formatted.
    let timezone = config.timezone.clone();
    std::env::set_var("TZ", timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE));

    let grabber = Grabber::builder()
        .config(config)
        .coordinates(coordinates)
        .maybe_data_dir(args.data_dir)
        .build()?;

    match args.command {
        Command::Fetch {
            place,
            start,
            until,
        } => {
            let outcome = grabber
                .fetch()
                .location(&place)
                .maybe_start_timestamp(start)
                .maybe_until_timestamp(until)
                .call()?;
            info!(
                "{}: {} new days in {}",
                place,
                outcome.requests,
                outcome.log_path.display()
            );
        }
        Command::Convert { place } => {
            let outcome = grabber.convert().location(&place).call()?;
            info!(
                "{}: {} daily entries in {}",
                place,
                outcome.entries,
                outcome.array_path.display()
            );
        }
    }
    Ok(())
}
