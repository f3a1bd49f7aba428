/*!
 * Outline writer implementation for FolderList
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;

use crate::config::Config;
use crate::error::{Result, ScanError};
use crate::types::TreeEntry;

/// Spaces per nesting level in the rendered outline
const INDENT_UNIT: usize = 2;

/// Destination for a rendered report
///
/// The document is accumulated in memory and nothing touches the disk until
/// `save`, so a failed run leaves no partial report behind.
pub trait ReportSink {
    /// Start a new document with the given title
    fn begin_report(&mut self, title: &str);

    /// Append one bulleted line at the given depth
    fn add_bullet(&mut self, text: &str, depth: usize);

    /// Persist the document, overwriting any existing file at `path`
    fn save(&self, path: &Path) -> Result<()>;
}

/// Markdown outline writer for scan entries
pub struct OutlineWriter {
    /// Writer configuration
    config: Config,
    /// Rendered document
    buffer: String,
}

impl OutlineWriter {
    /// Create a new outline writer
    pub fn new(config: Config) -> Self {
        Self {
            config,
            buffer: String::new(),
        }
    }

    /// Render all entries and persist the report to the configured path
    pub fn write(&mut self, entries: &[TreeEntry]) -> Result<()> {
        let title = format!(
            "Folder Scan Report - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );

        self.begin_report(&title);
        for entry in entries {
            self.add_bullet(&entry.name, entry.depth);
        }

        let path = self.config.output_file.clone();
        self.save(&path)
    }
}

impl ReportSink for OutlineWriter {
    fn begin_report(&mut self, title: &str) {
        self.buffer.clear();
        self.buffer.push_str("# ");
        self.buffer.push_str(title);
        self.buffer.push_str("\n\n");
    }

    fn add_bullet(&mut self, text: &str, depth: usize) {
        for _ in 0..depth * INDENT_UNIT {
            self.buffer.push(' ');
        }
        self.buffer.push_str("- ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn save(&self, path: &Path) -> Result<()> {
        let write_err = |source| ScanError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(self.buffer.as_bytes()).map_err(write_err)?;
        writer.flush().map_err(write_err)?;

        Ok(())
    }
}
