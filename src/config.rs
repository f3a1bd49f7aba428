/*!
 * Configuration handling for FolderList
 */

use std::env;
use std::path::PathBuf;

use crate::error::{Result, ScanError};
use crate::utils::DEFAULT_NOISE_SUBSTRINGS;

/// File name of the generated report
pub const REPORT_FILE_NAME: &str = "items in folders list.md";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to scan
    pub target_dir: PathBuf,

    /// Report file path
    pub output_file: PathBuf,

    /// Keep file names exactly as found on disk
    pub full_file_names: bool,

    /// Leave underscores in place instead of folding them to spaces
    pub keep_underscores: bool,

    /// Literal fragments stripped from file names, in listed order
    pub noise_substrings: Vec<String>,
}

impl Config {
    /// Create a configuration from the interactively collected answers
    pub fn new(target_dir: PathBuf, full_file_names: bool, keep_underscores: bool) -> Self {
        Self {
            target_dir,
            output_file: default_output_file(),
            full_file_names,
            keep_underscores,
            noise_substrings: DEFAULT_NOISE_SUBSTRINGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Check if target directory exists and is a directory
        if !self.target_dir.exists() || !self.target_dir.is_dir() {
            return Err(ScanError::InvalidPath(self.target_dir.clone()));
        }

        Ok(())
    }
}

/// Resolve the report location: next to the executable, falling back to the
/// current directory when the executable path cannot be determined.
pub fn default_output_file() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(REPORT_FILE_NAME)
}
