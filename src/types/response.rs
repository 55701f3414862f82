//! Minimal typed view of a DarkSky forecast response.
//!
//! Only the fields the crate actually inspects are modeled; everything else in a
//! response is treated as opaque and passed through as raw JSON. Log lines keep
//! the full response body, so nothing is lost by deserializing this narrow view.

use serde::Deserialize;

/// One archived API response, seen through the fields the resume logic needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// The daily-granularity block of the response.
    pub daily: DailyBlock,
}

/// The `daily` block of a forecast response.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyBlock {
    /// The per-day data points. For the time-machine endpoint this holds a
    /// single entry: the summary of the requested day.
    #[serde(default)]
    pub data: Vec<DailySummary>,
}

/// A single daily data point, reduced to its timestamp.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DailySummary {
    /// Unix timestamp (seconds) of the start of the summarized day.
    pub time: i64,
}

impl ForecastResponse {
    /// Timestamp of the first daily entry, if the response carries one.
    pub fn first_daily_time(&self) -> Option<i64> {
        self.daily.data.first().map(|entry| entry.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_unknown_response_fields() {
        let raw = r#"{
            "latitude": 56.1518,
            "longitude": 10.2064,
            "daily": {"data": [{"time": 1451602800, "temperatureHigh": 5.2}]}
        }"#;
        let response: ForecastResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_daily_time(), Some(1451602800));
    }

    #[test]
    fn empty_daily_block_yields_no_time() {
        let response: ForecastResponse = serde_json::from_str(r#"{"daily":{}}"#).unwrap();
        assert_eq!(response.first_daily_time(), None);
    }
}
