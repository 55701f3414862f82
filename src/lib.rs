mod archive;
mod clients;
mod config;
mod convert;
mod error;
mod grabber;
mod types;
mod utils;

pub use error::GrabberError;
pub use grabber::*;

pub use clients::convert_client::*;
pub use clients::fetch_client::*;

pub use config::coordinates::{Coordinate, CoordinateTable};
pub use config::settings::{ApiConfig, DEFAULT_TIMEZONE};

pub use types::response::{DailyBlock, DailySummary, ForecastResponse};

pub use archive::error::ArchiveError;
pub use archive::fetcher::{
    FetchOutcome, CLOCK_SKEW_SECONDS, DAY_SECONDS, DEFAULT_START_TIMESTAMP,
};
pub use config::error::ConfigError;
pub use convert::converter::ConvertOutcome;
pub use convert::error::ConvertError;
