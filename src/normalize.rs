/*!
 * Display-name normalization for scanned files
 */

/// Rewrites raw file names into their report labels
///
/// Normalization only affects the displayed label; the on-disk name used
/// for traversal is never touched. Folder names never pass through here.
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Keep file names exactly as found on disk
    full_file_names: bool,
    /// Leave underscores in place instead of folding them to spaces
    keep_underscores: bool,
    /// Literal fragments stripped from file names, in listed order
    noise_substrings: Vec<String>,
}

impl Normalizer {
    /// Create a new normalizer
    pub fn new(full_file_names: bool, keep_underscores: bool, noise_substrings: Vec<String>) -> Self {
        Self {
            full_file_names,
            keep_underscores,
            noise_substrings,
        }
    }

    /// Compute the display label for a raw file name
    ///
    /// Total: never fails. The result may be empty when the entire name
    /// matched noise fragments; an empty label is accepted downstream.
    pub fn display_name(&self, raw: &str) -> String {
        let mut name = raw.to_string();

        if !self.full_file_names {
            // Sequential, case-sensitive, literal removal. Order is
            // significant: earlier removals can expose later matches.
            for noise in &self.noise_substrings {
                name = name.replace(noise.as_str(), "");
            }
        }

        // Underscore folding applies even when full names were requested.
        if !self.keep_underscores {
            name = name.replace('_', " ");
        }

        name
    }
}
