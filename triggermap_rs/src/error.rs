use std::path::PathBuf;

use thiserror::Error;

/// Failures that reach the process boundary. Pattern misses inside the
/// analysed source are never errors; they only thin out the report.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("cannot read source file {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write report {}: {source}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("cannot serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MapError>;
