//! Per-location log files: append-only, one raw API response per line.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::archive::error::ArchiveError;
use crate::types::response::ForecastResponse;

/// Path of the log file for `place` inside `data_dir`.
pub(crate) fn log_path(data_dir: &Path, place: &str) -> PathBuf {
    data_dir.join(format!("data_{place}.json"))
}

/// Appends one response body plus a trailing newline.
///
/// The body is written in a single call after the full response has been
/// received, so a line never holds a partial document.
pub(crate) fn append_line(path: &Path, body: &str) -> Result<(), ArchiveError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ArchiveError::LogAppend(path.to_path_buf(), e))?;
    let mut line = String::with_capacity(body.len() + 1);
    line.push_str(body);
    line.push('\n');
    file.write_all(line.as_bytes())
        .map_err(|e| ArchiveError::LogAppend(path.to_path_buf(), e))
}

/// Reads the `daily.data[0].time` of the last non-empty line.
///
/// Returns `Ok(None)` when the log does not exist yet or holds no lines, so a
/// fresh location starts from the default day.
pub(crate) fn last_recorded_time(path: &Path) -> Result<Option<i64>, ArchiveError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ArchiveError::LogRead(path.to_path_buf(), e)),
    };

    let reader = BufReader::new(file);
    let mut last = None;
    for line in reader.lines() {
        let line = line.map_err(|e| ArchiveError::LogRead(path.to_path_buf(), e))?;
        if !line.trim().is_empty() {
            last = Some(line);
        }
    }
    let Some(line) = last else {
        return Ok(None);
    };

    let response: ForecastResponse = serde_json::from_str(&line)
        .map_err(|e| ArchiveError::ResumeParse(path.to_path_buf(), e))?;
    response
        .first_daily_time()
        .map(Some)
        .ok_or_else(|| ArchiveError::EmptyDailyData(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_log_has_no_recorded_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_path(dir.path(), "Aarhus");
        assert_eq!(last_recorded_time(&path).unwrap(), None);
    }

    #[test]
    fn last_non_empty_line_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_path(dir.path(), "Aarhus");
        append_line(&path, r#"{"daily":{"data":[{"time":1451602800}]}}"#).unwrap();
        append_line(&path, r#"{"daily":{"data":[{"time":1451689200}]}}"#).unwrap();
        // A trailing newline always follows the last line.
        assert_eq!(last_recorded_time(&path).unwrap(), Some(1451689200));
    }

    #[test]
    fn malformed_last_line_fails_the_resume() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_path(dir.path(), "Aarhus");
        append_line(&path, "{not json").unwrap();
        let err = last_recorded_time(&path).unwrap_err();
        assert!(matches!(err, ArchiveError::ResumeParse(_, _)));
    }

    #[test]
    fn response_without_daily_data_fails_the_resume() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_path(dir.path(), "Aarhus");
        append_line(&path, r#"{"daily":{"data":[]}}"#).unwrap();
        let err = last_recorded_time(&path).unwrap_err();
        assert!(matches!(err, ArchiveError::EmptyDailyData(_)));
    }

    #[test]
    fn log_files_are_named_after_the_place() {
        let path = log_path(Path::new("/tmp/archive"), "Den_Helder");
        assert_eq!(path, Path::new("/tmp/archive/data_Den_Helder.json"));
    }
}
