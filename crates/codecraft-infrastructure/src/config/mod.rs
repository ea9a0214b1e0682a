//! Filesystem locations, overridable through the environment.

use std::path::PathBuf;

/// Root data directory. `CODECRAFT_DATA_DIR` wins; otherwise the
/// platform data dir, falling back to the working directory.
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CODECRAFT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    dirs::data_dir()
        .map(|d| d.join("codecraft"))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn db_path() -> PathBuf {
    data_dir().join("codecraft.db")
}

pub fn log_dir() -> PathBuf {
    data_dir().join("logs")
}
