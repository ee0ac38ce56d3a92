//! Errors surfaced by a scan

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    /// The root does not exist or cannot be read.
    #[error("Cannot access scan root: {}", path.display())]
    RootAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Scan root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A directory or entry below the root could not be read.
    #[error("Failed to read {} while scanning", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Invalid include pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;
