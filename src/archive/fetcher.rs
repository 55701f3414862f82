//! Day-by-day retrieval of historical forecasts into per-location log files.

use std::path::{Path, PathBuf};

use chrono::{Local, TimeZone, Utc};
use log::{info, warn};
use reqwest::blocking::Client;

use crate::archive::error::ArchiveError;
use crate::archive::log_file;
use crate::config::coordinates::Coordinate;

/// First day requested for a location without an existing log
/// (2016-01-01 00:00:00 CET).
pub const DEFAULT_START_TIMESTAMP: i64 = 1_451_602_800;

/// One day of Unix time. Every request within a run is exactly this far apart.
pub const DAY_SECONDS: i64 = 86_400;

/// Slack added to the wall clock when computing the end of a run, compensating
/// for the skew between the machine's timezone and the API's day boundaries.
pub const CLOCK_SKEW_SECONDS: i64 = 7_200;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.darksky.net/forecast";

/// Summary of one fetch run.
///
/// The log file itself is the real product; this summary exists so callers can
/// report what happened without re-reading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// The log file the run appended to (or would have, for an empty range).
    pub log_path: PathBuf,
    /// Number of requests issued, one per day.
    pub requests: usize,
    /// Timestamp of the first request, if any was issued.
    pub first_timestamp: Option<i64>,
    /// Timestamp of the last request, if any was issued.
    pub last_timestamp: Option<i64>,
}

pub(crate) struct ArchiveFetcher {
    http: Client,
    base_url: String,
    data_dir: PathBuf,
}

impl ArchiveFetcher {
    pub(crate) fn new(data_dir: &Path, base_url: String) -> ArchiveFetcher {
        ArchiveFetcher {
            http: Client::new(),
            base_url,
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Fetches every missing day for `place`, appending one response per line.
    ///
    /// The starting day is resumed from the log's last entry plus one day, or
    /// falls back to [`DEFAULT_START_TIMESTAMP`] for a fresh location. Requests
    /// run strictly sequentially, one blocking GET per day, until the running
    /// timestamp passes `until` (the current time plus [`CLOCK_SKEW_SECONDS`]
    /// unless overridden).
    pub(crate) fn fetch_place(
        &self,
        token: &str,
        place: &str,
        coordinate: &Coordinate,
        start_override: Option<i64>,
        until_override: Option<i64>,
    ) -> Result<FetchOutcome, ArchiveError> {
        let path = log_file::log_path(&self.data_dir, place);
        let start = match start_override {
            Some(timestamp) => timestamp,
            None => match log_file::last_recorded_time(&path)? {
                Some(last) => {
                    info!("Resuming {place} one day after its last recorded entry");
                    last + DAY_SECONDS
                }
                None => DEFAULT_START_TIMESTAMP,
            },
        };
        let until = until_override.unwrap_or_else(|| Utc::now().timestamp() + CLOCK_SKEW_SECONDS);

        let mut outcome = FetchOutcome {
            log_path: path.clone(),
            requests: 0,
            first_timestamp: None,
            last_timestamp: None,
        };

        let mut timestamp = start;
        while timestamp <= until {
            let url = self.build_url(token, coordinate, timestamp);
            let body = self.fetch_day(&url, timestamp)?;
            log_file::append_line(&path, &body)?;

            outcome.requests += 1;
            outcome.first_timestamp.get_or_insert(timestamp);
            outcome.last_timestamp = Some(timestamp);
            timestamp += DAY_SECONDS;
        }
        Ok(outcome)
    }

    /// Performs one blocking GET and returns the raw body.
    ///
    /// The body is returned regardless of the HTTP status: the archive records
    /// what the API answered, and the API answers errors in JSON too. Only
    /// transport failures abort the run.
    fn fetch_day(&self, url: &str, timestamp: i64) -> Result<String, ArchiveError> {
        match Local.timestamp_opt(timestamp, 0).single() {
            Some(date) => info!("Fetching {timestamp} ({date})"),
            None => info!("Fetching {timestamp}"),
        }

        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| ArchiveError::NetworkRequest(url.to_string(), e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP {status} for {url}, recording the body anyway");
        }
        response
            .text()
            .map_err(|e| ArchiveError::BodyRead(url.to_string(), e))
    }

    fn build_url(&self, token: &str, coordinate: &Coordinate, timestamp: i64) -> String {
        format!(
            "{}/{}/{},{},{}?exclude=currently,minutely,hourly,alerts,flags&units=si",
            self.base_url, token, coordinate.lat, coordinate.longitude, timestamp
        )
    }
}
