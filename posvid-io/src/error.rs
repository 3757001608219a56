use std::io;
use std::path::PathBuf;

use posvid_core::errors::PositionError;
use thiserror::Error;

/// Error type for posvid-io operations.
#[derive(Error, Debug)]
pub enum TableIoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The file could not be parsed as delimited text.
    #[error("Malformed delimited file: {0}")]
    Csv(#[from] csv::Error),

    /// The file has no header row.
    #[error("File has no header row: {0}")]
    MissingHeader(PathBuf),

    /// Could not move the finished temporary file over the destination.
    #[error("Failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The records do not form a valid table.
    #[error(transparent)]
    Table(#[from] PositionError),
}

/// Result type alias for posvid-io operations.
pub type Result<T> = std::result::Result<T, TableIoError>;
