//! This module provides the main entry point for working with a DarkSky
//! archive. A [`Grabber`] owns the API token, the coordinate table, and the
//! data directory holding the per-location log files, and hands out the
//! per-operation clients for fetching and converting.

use std::path::PathBuf;

use bon::bon;

use crate::archive::fetcher::{ArchiveFetcher, FetchOutcome, DEFAULT_BASE_URL};
use crate::clients::convert_client::ConvertClient;
use crate::clients::fetch_client::FetchClient;
use crate::config::coordinates::CoordinateTable;
use crate::config::settings::ApiConfig;
use crate::convert::converter::{ConvertOutcome, Converter};
use crate::error::GrabberError;
use crate::utils::{ensure_data_dir_exists, get_data_dir};

/// The main client for extending and flattening per-location weather archives.
///
/// Create an instance with [`Grabber::builder()`]; only the configuration and
/// the coordinate table are required. The data directory defaults to a
/// per-user location and is created if it doesn't exist.
///
/// # Examples
///
/// ```no_run
/// # use darksky_grabber::{ApiConfig, CoordinateTable, Grabber, GrabberError};
/// # fn run() -> Result<(), GrabberError> {
/// let config: ApiConfig = serde_json::from_str(r#"{"darkSky-token": "0123abcd"}"#).unwrap();
/// let coordinates: CoordinateTable =
///     serde_json::from_str(r#"{"Aarhus": {"lat": 56.1518, "longitude": 10.2064}}"#).unwrap();
///
/// let grabber = Grabber::builder()
///     .config(config)
///     .coordinates(coordinates)
///     .build()?;
///
/// grabber.fetch().location("Aarhus").call()?;
/// grabber.convert().location("Aarhus").call()?;
/// # Ok(())
/// # }
/// ```
pub struct Grabber {
    token: String,
    coordinates: CoordinateTable,
    fetcher: ArchiveFetcher,
    converter: Converter,
}

#[bon]
impl Grabber {
    /// Builds a new `Grabber`.
    ///
    /// # Arguments
    ///
    /// * `config` - The API configuration (token, optional timezone).
    /// * `coordinates` - The place → coordinate table.
    /// * `data_dir` - Optional directory for the log and array files. Defaults
    ///   to a per-user data directory; created if missing either way.
    /// * `base_url` - Optional override of the API endpoint, used by tests and
    ///   proxies. Defaults to the public DarkSky forecast endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GrabberError::DataDirResolution`] when no data directory was
    /// given and the per-user one cannot be determined, and
    /// [`GrabberError::DataDirCreation`] when the directory cannot be created.
    #[builder]
    pub fn new(
        config: ApiConfig,
        coordinates: CoordinateTable,
        data_dir: Option<PathBuf>,
        base_url: Option<String>,
    ) -> Result<Grabber, GrabberError> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => get_data_dir().map_err(GrabberError::DataDirResolution)?,
        };
        ensure_data_dir_exists(&data_dir)
            .map_err(|e| GrabberError::DataDirCreation(data_dir.clone(), e))?;

        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Grabber {
            token: config.token,
            coordinates,
            fetcher: ArchiveFetcher::new(&data_dir, base_url),
            converter: Converter::new(&data_dir),
        })
    }

    /// Returns a client for fetching missing days into a location's log.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use darksky_grabber::{Grabber, GrabberError};
    /// # fn run(grabber: &Grabber) -> Result<(), GrabberError> {
    /// let outcome = grabber.fetch().location("Aarhus").call()?;
    /// println!("requested {} days", outcome.requests);
    /// # Ok(())
    /// # }
    /// ```
    pub fn fetch(&self) -> FetchClient<'_> {
        FetchClient::new(self)
    }

    /// Returns a client for flattening a location's log into an array file.
    pub fn convert(&self) -> ConvertClient<'_> {
        ConvertClient::new(self)
    }

    pub(crate) fn fetch_place(
        &self,
        place: &str,
        start_override: Option<i64>,
        until_override: Option<i64>,
    ) -> Result<FetchOutcome, GrabberError> {
        let coordinate = self.coordinates.get(place)?;
        Ok(self
            .fetcher
            .fetch_place(&self.token, place, coordinate, start_override, until_override)?)
    }

    pub(crate) fn convert_place(&self, place: &str) -> Result<ConvertOutcome, GrabberError> {
        // Validate the place against the table so a typo surfaces as the same
        // error the fetch path gives, not as a missing-file error.
        self.coordinates.get(place)?;
        Ok(self.converter.convert_place(place)?)
    }
}
