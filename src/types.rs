/*!
 * Core types and data structures for the FolderList application
 */

/// Kind of entry produced by a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory containing other entries
    Folder,
    /// Anything that is not a directory (symlinks included, since they are
    /// never followed)
    File,
}

/// One line of the outline
///
/// Entries are produced in pre-order: a folder immediately precedes its
/// children. They are transient, generated and consumed within a single
/// scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Display name; file names have passed through the normalizer,
    /// folder names are always kept as found on disk
    pub name: String,
    /// Nesting level below the scan root; the root itself is 0
    pub depth: usize,
    /// Folder or file
    pub kind: EntryKind,
}
