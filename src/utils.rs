use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

const DATA_DIR_NAME: &str = "darksky_grabber";

pub(crate) fn get_data_dir() -> io::Result<PathBuf> {
    dirs::data_dir()
        .map(|p| p.join(DATA_DIR_NAME))
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine the system data directory",
            )
        })
}

pub(crate) fn ensure_data_dir_exists(path: &Path) -> io::Result<()> {
    match fs::metadata(path) {
        Ok(metadata) => {
            if !metadata.is_dir() {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("data path exists but is not a directory: {}", path.display()),
                ));
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Creating data directory: {}", path.display());
            fs::create_dir_all(path)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_data_dir_exists(&nested).unwrap();
        assert!(nested.is_dir());
        // A second call on an existing directory is fine.
        ensure_data_dir_exists(&nested).unwrap();
    }

    #[test]
    fn rejects_a_file_in_the_way() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taken");
        fs::write(&path, "not a directory").unwrap();
        assert!(ensure_data_dir_exists(&path).is_err());
    }
}
