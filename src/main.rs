/*!
 * Command-line interface for FolderList
 */

use std::process;
use std::sync::Arc;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use folderlist::config::Config;
use folderlist::error::ScanError;
use folderlist::prompt::{Prompter, TerminalPrompter};
use folderlist::report::{ReportFormat, Reporter, ScanSummary};
use folderlist::scanner::Scanner;
use folderlist::types::EntryKind;
use folderlist::utils::count_entries;
use folderlist::writer::OutlineWriter;

fn main() {
    match run() {
        Ok(()) => {}
        // Dismissing the picker is informational, not a failure
        Err(ScanError::NoDirectorySelected) => {
            println!("No directory selected.");
        }
        Err(e) => {
            eprintln!("An error occurred: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> Result<(), ScanError> {
    let mut prompter = TerminalPrompter;

    // Collect scan parameters interactively
    let directory = prompter
        .pick_directory()?
        .ok_or(ScanError::NoDirectorySelected)?;
    let full_file_names = prompter.confirm("Do you want full file names?")?;
    let keep_underscores = prompter.confirm("Keep _ ?")?;

    // Create and validate configuration
    let config = Config::new(directory, full_file_names, keep_underscores);
    config.validate()?;

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Setup");
    progress.set_message(format!(
        "📂 Scanning directory: {}",
        config.target_dir.display()
    ));

    // Count entries for progress tracking
    match count_entries(&config.target_dir) {
        Ok(count) => {
            progress.set_length(count);
            progress.set_message(format!("🔎 Found {} items to list", count));
        }
        Err(e) => {
            progress.set_message(format!("⚠️ Warning: Failed to count items: {}", e));
        }
    }

    progress.set_prefix("📊 Processing");

    // Create scanner and writer
    let scanner = Scanner::new(config.clone(), Arc::new(progress.clone()));
    let mut writer = OutlineWriter::new(config.clone());

    // Time both the scan and the write
    let start_time = Instant::now();

    let entries = scanner.scan()?;
    writer.write(&entries)?;

    let total_duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    let folders = entries
        .iter()
        .filter(|e| e.kind == EntryKind::Folder)
        .count();
    let files = entries.len() - folders;

    // Prepare and print the run summary
    let summary = ScanSummary {
        output_file: config.output_file.display().to_string(),
        duration: total_duration,
        folders,
        files,
    };

    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&summary);

    println!(
        "Folder scan complete. Output saved to: {}",
        config.output_file.display()
    );

    Ok(())
}
