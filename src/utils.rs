/*!
 * Utility functions for FolderList
 */

use std::io;
use std::path::Path;

use once_cell::sync::Lazy;
use walkdir::WalkDir;

/// Count the entries a scan will emit, for progress tracking
///
/// Best effort: unreadable entries are skipped here and surface later as
/// scan errors.
pub fn count_entries(dir: &Path) -> io::Result<u64> {
    let mut count = 0;

    for _entry in WalkDir::new(dir).into_iter().filter_map(Result::ok) {
        count += 1;
    }

    Ok(count)
}

/// Default noise fragments stripped from file names for display
///
/// Order is significant: fragments are removed sequentially, so earlier
/// removals can expose later matches.
pub static DEFAULT_NOISE_SUBSTRINGS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "SFX_AMB_",
        "SFX_AMB_EP",
        "EP_",
        "HH_",
        "SFX_MG_",
        "SFX_INT_",
        "SFX_IT_",
        "SFX_SHOP_",
        "TT_",
        "01.wav",
        "02.wav",
        "bloxburg_MS4_UI_",
        "bburg_desktop_",
        "bburg_desktop_",
        "Bloxburg MS4 BG ",
        "Bloxburg_MS4_",
    ]
});
