use std::path::PathBuf;

use thiserror::Error;

use crate::archive::error::ArchiveError;
use crate::config::error::ConfigError;
use crate::convert::error::ConvertError;

#[derive(Debug, Error)]
pub enum GrabberError {
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to create data directory '{0}'")]
    DataDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to determine data directory")]
    DataDirResolution(#[source] std::io::Error),
}
