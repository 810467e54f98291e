use std::path::PathBuf;

use thiserror::Error;

/// Per-archive failure. Every variant is terminal for one save file only;
/// the batch loop reports it and moves on.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid save archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("no .xml entry in archive")]
    MissingDocument,

    #[error("{path} too large: {size} bytes (max {max})")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max: u64,
    },

    #[error("malformed save XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
