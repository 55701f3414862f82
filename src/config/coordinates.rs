//! The coordinate table: place names mapped to latitude/longitude pairs,
//! loaded from a JSON file (`coordinate.json`).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

/// Geographical coordinates of one place.
///
/// Field names follow the coordinate table files this crate reads
/// (`lat`/`longitude`), so existing tables keep working unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees (positive for North, negative for South).
    pub lat: f64,
    /// Longitude in decimal degrees (positive for East, negative for West).
    pub longitude: f64,
}

/// A mapping of place name to [`Coordinate`].
///
/// # Examples
///
/// ```
/// use darksky_grabber::CoordinateTable;
///
/// let table: CoordinateTable = serde_json::from_str(
///     r#"{"Aarhus": {"lat": 56.1518, "longitude": 10.2064}}"#,
/// ).unwrap();
/// assert!(table.get("Aarhus").is_ok());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordinateTable(HashMap<String, Coordinate>);

impl CoordinateTable {
    /// Loads the table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not a JSON object of coordinates.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        serde_json::from_str(&raw).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Looks up the coordinates of `place`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPlace`] when the table has no entry for it.
    pub fn get(&self, place: &str) -> Result<&Coordinate, ConfigError> {
        self.0
            .get(place)
            .ok_or_else(|| ConfigError::UnknownPlace(place.to_string()))
    }

    /// Iterates over the known place names, in no particular order.
    pub fn places(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Coordinate)> for CoordinateTable {
    fn from_iter<I: IntoIterator<Item = (String, Coordinate)>>(iter: I) -> Self {
        CoordinateTable(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_a_table() {
        let table: CoordinateTable = serde_json::from_str(
            r#"{
                "Aarhus": {"lat": 56.1518, "longitude": 10.2064},
                "Den_Helder": {"lat": 52.9563, "longitude": 4.7608}
            }"#,
        )
        .unwrap();
        let aarhus = table.get("Aarhus").unwrap();
        assert_eq!(aarhus.lat, 56.1518);
        assert_eq!(aarhus.longitude, 10.2064);
        assert_eq!(table.places().count(), 2);
    }

    #[test]
    fn unknown_place_is_an_error() {
        let table = CoordinateTable::default();
        let err = table.get("Atlantis").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPlace(place) if place == "Atlantis"));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Medemblik": {{"lat": 52.7713, "longitude": 5.1064}}}}"#).unwrap();
        let table = CoordinateTable::from_file(file.path()).unwrap();
        assert!(table.get("Medemblik").is_ok());
    }
}
