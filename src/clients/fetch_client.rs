//! Provides the `FetchClient` for pulling missing days of forecast history
//! into a location's log file.
//!
//! This client acts as an intermediate builder, obtained via
//! [`Grabber::fetch()`], allowing the user to pick the location (and
//! optionally bound the timestamp range) before executing the run.

use bon::bon;

use crate::archive::fetcher::FetchOutcome;
use crate::{Grabber, GrabberError};

/// A client builder specifically for fetch runs.
///
/// Instances are created by calling [`Grabber::fetch()`]. Calling
/// `.location(place)` starts the builder; `.call()` executes the run and
/// returns a [`Result<FetchOutcome, GrabberError>`].
pub struct FetchClient<'a> {
    /// A reference to the main Grabber instance.
    client: &'a Grabber,
}

#[bon]
impl<'a> FetchClient<'a> {
    pub(crate) fn new(client: &'a Grabber) -> Self {
        Self { client }
    }

    /// Fetches every missing day for a place listed in the coordinate table.
    ///
    /// You can optionally specify:
    /// *   `.start_timestamp(i64)`: first Unix timestamp to request, replacing
    ///     the resume-from-log (or default-start) logic.
    /// *   `.until_timestamp(i64)`: last Unix timestamp to consider, replacing
    ///     the "now plus skew" end of range.
    ///
    /// Finally, call `.call()` on the builder to execute the run.
    ///
    /// # Returns
    ///
    /// After calling `.call()`, returns a [`FetchOutcome`] summarizing the run:
    /// the log path and the number and range of requests issued.
    ///
    /// # Errors
    ///
    /// Can return:
    /// *   [`GrabberError::Config`]: the place is not in the coordinate table.
    /// *   [`GrabberError::Archive`]: resuming from a corrupt log, a transport
    ///     failure, or a failed append.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use darksky_grabber::{Grabber, GrabberError};
    /// # fn run(grabber: &Grabber) -> Result<(), GrabberError> {
    /// let outcome = grabber
    ///     .fetch()
    ///     .location("Aarhus")
    ///     .call()?;
    /// println!("{} new days in {}", outcome.requests, outcome.log_path.display());
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub fn build_location(
        &self,
        #[builder(start_fn)] place: &str,
        start_timestamp: Option<i64>,
        until_timestamp: Option<i64>,
    ) -> Result<FetchOutcome, GrabberError> {
        self.client
            .fetch_place(place, start_timestamp, until_timestamp)
    }
}
