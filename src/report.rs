/*!
 * Reporting functionality for FolderList
 *
 * Provides functionality for generating formatted summaries of scan runs
 * using the tabled library for clean, consistent table rendering.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

/// Statistics for a completed scan
#[derive(Debug, Clone)]
pub struct ScanSummary {
    /// Report file path
    pub output_file: String,
    /// Time taken to scan and write
    pub duration: Duration,
    /// Number of folders listed
    pub folders: usize,
    /// Number of files listed
    pub files: usize,
}

/// Format of the summary output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    // Other formats could be added in the future
}

/// Summary generator for scan runs
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a summary string for a finished run
    pub fn generate_report(&self, summary: &ScanSummary) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(summary),
            // Additional formats could be added here
        }
    }

    /// Print the summary to stdout
    pub fn print_report(&self, summary: &ScanSummary) {
        println!("\n{}", self.generate_report(summary));
    }

    // Create a summary table using the tabled crate
    fn create_summary_table(&self, summary: &ScanSummary) -> String {
        // Define the summary table data structure
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: summary.output_file.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", summary.duration),
            },
            SummaryRow {
                key: "🗂️ Folders Listed".to_string(),
                value: self.format_number(summary.folders),
            },
            SummaryRow {
                key: "📄 Files Listed".to_string(),
                value: self.format_number(summary.files),
            },
        ];

        // Create and style the table
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, summary: &ScanSummary) -> String {
        format!("✅  SCAN COMPLETE\n{}", self.create_summary_table(summary))
    }
}
