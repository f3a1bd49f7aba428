/*!
 * Interactive input for FolderList
 *
 * All scan parameters are collected at run time through the `Prompter`
 * capability, so the traversal and writing core has no dependency on a
 * particular input surface. The terminal adapter below reads answers from
 * stdin; tests substitute a scripted double.
 */

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Source of the interactively supplied scan parameters
pub trait Prompter {
    /// Ask for the directory to scan; `None` means the user declined
    fn pick_directory(&mut self) -> io::Result<Option<PathBuf>>;

    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

/// Prompter over stdin/stdout
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        Ok(line.trim().to_string())
    }
}

impl Prompter for TerminalPrompter {
    fn pick_directory(&mut self) -> io::Result<Option<PathBuf>> {
        print!("Directory to scan (leave empty to cancel): ");
        io::stdout().flush()?;

        let answer = self.read_line()?;
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(answer)))
        }
    }

    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            print!("{} [y/n]: ", prompt);
            io::stdout().flush()?;

            match parse_yes_no(&self.read_line()?) {
                Some(answer) => return Ok(answer),
                None => println!("Please answer y or n."),
            }
        }
    }
}

/// Interpret a yes/no answer; `None` means the input was not recognized
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
