use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Failed to read log file '{0}'")]
    LogRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to append to log file '{0}'")]
    LogAppend(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse the last line of log file '{0}' while resuming")]
    ResumeParse(PathBuf, #[source] serde_json::Error),

    // The last line parsed, but carried no daily entry to resume from.
    #[error("Log file '{0}' ends with a response without daily data")]
    EmptyDailyData(PathBuf),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Failed to read the response body from {0}")]
    BodyRead(String, #[source] reqwest::Error),
}
