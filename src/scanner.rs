/*!
 * Directory traversal for FolderList
 *
 * The scan is depth-first pre-order: every folder entry is emitted before
 * any of its children. Children are taken in whatever order the walker
 * yields them, files and subdirectories mixed; the order is not stable
 * across platforms. Directory symlinks are not followed, so traversal
 * terminates even when the tree contains link cycles; the links themselves
 * show up as file entries.
 */

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Result, ScanError};
use crate::normalize::Normalizer;
use crate::types::{EntryKind, TreeEntry};

/// Scanner for directory trees
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// File-name normalizer derived from the configuration
    normalizer: Normalizer,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        let normalizer = Normalizer::new(
            config.full_file_names,
            config.keep_underscores,
            config.noise_substrings.clone(),
        );

        Self {
            config,
            normalizer,
            progress,
        }
    }

    /// Scan the target directory and return its outline entries in pre-order
    ///
    /// Re-invocable: a scanner can run the same root any number of times.
    /// Fails whole: an unreadable subdirectory aborts the scan instead of
    /// producing a report with a silently missing subtree.
    pub fn scan(&self) -> Result<Vec<TreeEntry>> {
        if !self.config.target_dir.is_dir() {
            return Err(ScanError::InvalidPath(self.config.target_dir.clone()));
        }

        let abs_path = fs::canonicalize(&self.config.target_dir)
            .map_err(|_| ScanError::InvalidPath(self.config.target_dir.clone()))?;

        let mut entries = Vec::new();
        self.scan_directory(&abs_path, 0, &mut entries)?;

        Ok(entries)
    }

    /// Emit one directory and, recursively, everything below it
    fn scan_directory(
        &self,
        abs_path: &Path,
        depth: usize,
        entries: &mut Vec<TreeEntry>,
    ) -> Result<()> {
        let dir_name = abs_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        self.emit(
            entries,
            TreeEntry {
                name: dir_name,
                depth,
                kind: EntryKind::Folder,
            },
        );

        // Limit depth to just the current directory; recursion handles the rest
        for entry in WalkDir::new(abs_path).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|err| {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| abs_path.to_path_buf());
                let source = err.into_io_error().unwrap_or_else(|| {
                    io::Error::new(io::ErrorKind::Other, "directory walk error")
                });
                ScanError::Access { path, source }
            })?;

            if entry.file_type().is_dir() {
                self.scan_directory(entry.path(), depth + 1, entries)?;
            } else {
                let raw_name = entry.file_name().to_string_lossy();
                let display = self.normalizer.display_name(&raw_name);

                self.emit(
                    entries,
                    TreeEntry {
                        name: display,
                        depth: depth + 1,
                        kind: EntryKind::File,
                    },
                );
            }
        }

        Ok(())
    }

    /// Record an entry and tick the progress bar
    fn emit(&self, entries: &mut Vec<TreeEntry>, entry: TreeEntry) {
        self.progress.inc(1);

        // Truncate the message if too long to avoid display issues
        let display_name = if entry.name.len() > 40 {
            format!("...{}", &entry.name[entry.name.len().saturating_sub(37)..])
        } else {
            entry.name.clone()
        };
        self.progress
            .set_message(format!("Current entry: {}", display_name));

        entries.push(entry);
    }
}
