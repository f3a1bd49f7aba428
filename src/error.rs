//! Global error handling for folderlist
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for folderlist operations
#[derive(Error, Debug)]
pub enum ScanError {
    /// The directory picker was dismissed without a selection
    #[error("no directory selected")]
    NoDirectorySelected,

    /// The scan root does not exist or is not a directory
    #[error("invalid scan root: {}", .0.display())]
    InvalidPath(PathBuf),

    /// A subdirectory could not be enumerated mid-scan
    #[error("cannot read directory {}: {}", .path.display(), .source)]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rendered report could not be persisted
    #[error("cannot write report to {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Other file system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for folderlist operations
pub type Result<T> = std::result::Result<T, ScanError>;
