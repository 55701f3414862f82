//! API configuration, loaded from a small JSON file (`config.json`).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

/// Timezone applied when the configuration does not name one.
///
/// Local-date rendering of fetched days must come out identical on every
/// machine that extends the same archive.
pub const DEFAULT_TIMEZONE: &str = "Europe/Ljubljana";

/// Contents of the configuration file.
///
/// The file is a JSON object; the token key is spelled `darkSky-token`, matching
/// the archives this crate extends.
///
/// # Examples
///
/// ```
/// use darksky_grabber::ApiConfig;
///
/// let config: ApiConfig = serde_json::from_str(r#"{"darkSky-token": "0123abcd"}"#).unwrap();
/// assert_eq!(config.token, "0123abcd");
/// assert_eq!(config.timezone, None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// The DarkSky API token, embedded in every request URL.
    #[serde(rename = "darkSky-token")]
    pub token: String,
    /// Optional IANA timezone name applied to the process at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl ApiConfig {
    /// Loads the configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not valid JSON of the expected shape.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        serde_json::from_str(&raw).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }
}
