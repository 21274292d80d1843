//! Directory listing for kman.
//!
//! kman only looks at the immediate entries of a single directory, taken once at startup.
//! [browse_dir] reports read errors, [list_files] swallows them into an empty list.

use std::fs;
use std::io;
use std::path::Path;

/// Reads the entry names of `path`, sorted by name.
///
/// Not recursive. Directories and dotfiles are listed like any other entry.
/// Names that are not valid UTF-8 are skipped, since they cannot be typed into the filter
/// or handed to the external tool reliably.
pub fn browse_dir(path: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::with_capacity(256);

    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::warn!(name = ?raw, "skipping non UTF-8 file name"),
        }
    }

    names.sort_unstable();
    Ok(names)
}

/// Same as [browse_dir] but an unreadable directory yields an empty list.
pub fn list_files(path: &Path) -> Vec<String> {
    match browse_dir(path) {
        Ok(names) => names,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read directory");
            Vec::new()
        }
    }
}
