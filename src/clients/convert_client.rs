//! Provides the `ConvertClient` for flattening a location's log file into a
//! single JSON array of daily entries.
//!
//! This client acts as an intermediate builder, obtained via
//! [`Grabber::convert()`].

use bon::bon;

use crate::convert::converter::ConvertOutcome;
use crate::{Grabber, GrabberError};

/// A client builder specifically for conversion runs.
///
/// Instances are created by calling [`Grabber::convert()`]. Calling
/// `.location(place)` starts the builder; `.call()` executes the conversion and
/// returns a [`Result<ConvertOutcome, GrabberError>`].
pub struct ConvertClient<'a> {
    /// A reference to the main Grabber instance.
    client: &'a Grabber,
}

#[bon]
impl<'a> ConvertClient<'a> {
    pub(crate) fn new(client: &'a Grabber) -> Self {
        Self { client }
    }

    /// Flattens the log of a place listed in the coordinate table.
    ///
    /// Reads `data_<place>.json` line by line, extracts `daily.data[0]` from
    /// each non-empty line, and rewrites `data_<place>_array.json` with the
    /// accumulated array after every line.
    ///
    /// # Returns
    ///
    /// After calling `.call()`, returns a [`ConvertOutcome`] with the array
    /// path and the number of extracted entries.
    ///
    /// # Errors
    ///
    /// Can return:
    /// *   [`GrabberError::Config`]: the place is not in the coordinate table.
    /// *   [`GrabberError::Convert`]: the log is missing or unreadable, a line
    ///     is malformed or lacks daily data, or the array file cannot be
    ///     written.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use darksky_grabber::{Grabber, GrabberError};
    /// # fn run(grabber: &Grabber) -> Result<(), GrabberError> {
    /// let outcome = grabber.convert().location("Aarhus").call()?;
    /// println!("{} entries in {}", outcome.entries, outcome.array_path.display());
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub fn build_location(
        &self,
        #[builder(start_fn)] place: &str,
    ) -> Result<ConvertOutcome, GrabberError> {
        self.client.convert_place(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApiConfig, ConfigError, Coordinate, CoordinateTable};
    use serde_json::{json, Value};
    use std::path::Path;

    fn test_grabber(data_dir: &Path) -> Grabber {
        let config = ApiConfig {
            token: "test-token".to_string(),
            timezone: None,
        };
        let coordinates: CoordinateTable = [(
            "Aarhus".to_string(),
            Coordinate {
                lat: 56.1518,
                longitude: 10.2064,
            },
        )]
        .into_iter()
        .collect();
        Grabber::builder()
            .config(config)
            .coordinates(coordinates)
            .data_dir(data_dir.to_path_buf())
            .build()
            .unwrap()
    }

    #[test]
    fn flattens_a_log_through_the_facade() {
        let dir = tempfile::tempdir().unwrap();
        let grabber = test_grabber(dir.path());
        std::fs::write(
            dir.path().join("data_Aarhus.json"),
            concat!(
                r#"{"daily":{"data":[{"time":1451602800,"temp":5}]}}"#,
                "\n",
                r#"{"daily":{"data":[{"time":1451689200,"temp":6}]}}"#,
                "\n",
            ),
        )
        .unwrap();

        let outcome = grabber.convert().location("Aarhus").call().unwrap();
        assert_eq!(outcome.entries, 2);

        let array: Value =
            serde_json::from_str(&std::fs::read_to_string(&outcome.array_path).unwrap()).unwrap();
        assert_eq!(
            array,
            json!([
                {"time": 1451602800, "temp": 5},
                {"time": 1451689200, "temp": 6}
            ])
        );
    }

    #[test]
    fn unknown_place_is_rejected_before_touching_files() {
        let dir = tempfile::tempdir().unwrap();
        let grabber = test_grabber(dir.path());

        let err = grabber.convert().location("Atlantis").call().unwrap_err();
        assert!(matches!(
            err,
            GrabberError::Config(ConfigError::UnknownPlace(_))
        ));
    }
}
