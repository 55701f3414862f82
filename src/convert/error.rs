use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to open log file '{0}'")]
    LogOpen(PathBuf, #[source] std::io::Error),

    #[error("Failed to read log file '{0}'")]
    LogRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse line {line} of log file '{path}'")]
    LineParse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Line {line} of log file '{path}' has no daily data")]
    MissingDaily { path: PathBuf, line: usize },

    #[error("Failed to write array file '{0}'")]
    ArrayWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to serialize the daily array for '{0}'")]
    ArraySerialize(PathBuf, #[source] serde_json::Error),
}
