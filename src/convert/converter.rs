//! Flattens a per-location log into a single JSON array of daily entries.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::info;
use serde_json::Value;

use crate::archive::log_file;
use crate::convert::error::ConvertError;

/// Summary of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOutcome {
    /// The derived array file.
    pub array_path: PathBuf,
    /// Number of daily entries extracted, one per non-empty log line.
    pub entries: usize,
}

pub(crate) struct Converter {
    data_dir: PathBuf,
}

impl Converter {
    pub(crate) fn new(data_dir: &Path) -> Converter {
        Converter {
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Reads the log for `place` line by line and extracts `daily.data[0]` from
    /// each non-empty line into an ordered array.
    ///
    /// The array file is rewritten in full after every line, so its length
    /// always equals the number of lines processed so far. Entries pass through
    /// unmodified; nothing is validated or deduplicated.
    pub(crate) fn convert_place(&self, place: &str) -> Result<ConvertOutcome, ConvertError> {
        let log_path = log_file::log_path(&self.data_dir, place);
        let array_path = self.data_dir.join(format!("data_{place}_array.json"));

        let file =
            File::open(&log_path).map_err(|e| ConvertError::LogOpen(log_path.clone(), e))?;
        let reader = BufReader::new(file);

        let mut entries: Vec<Value> = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| ConvertError::LogRead(log_path.clone(), e))?;
            if line.trim().is_empty() {
                continue;
            }
            let number = index + 1;

            let document: Value =
                serde_json::from_str(&line).map_err(|e| ConvertError::LineParse {
                    path: log_path.clone(),
                    line: number,
                    source: e,
                })?;
            let entry = document
                .pointer("/daily/data/0")
                .cloned()
                .ok_or_else(|| ConvertError::MissingDaily {
                    path: log_path.clone(),
                    line: number,
                })?;

            entries.push(entry);
            write_array(&array_path, &entries)?;
        }

        info!(
            "Extracted {} daily entries from {} into {}",
            entries.len(),
            log_path.display(),
            array_path.display()
        );
        Ok(ConvertOutcome {
            array_path,
            entries: entries.len(),
        })
    }
}

fn write_array(path: &Path, entries: &[Value]) -> Result<(), ConvertError> {
    let json = serde_json::to_string(entries)
        .map_err(|e| ConvertError::ArraySerialize(path.to_path_buf(), e))?;
    fs::write(path, json).map_err(|e| ConvertError::ArrayWrite(path.to_path_buf(), e))
}
