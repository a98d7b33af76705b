//! File discovery for bulletin directories
//!
//! Bulletins sit flat in one directory, named with a capture stamp prefix:
//! ```text
//! xml/
//!   20220917185000_0_VPTW60_010000.xml
//!   20220917214500_0_VPTW60_010000.xml
//! ```

use crate::constants::BULLETIN_FILE_PATTERN;
use crate::error::{BulletinError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Discover bulletin files in `input_dir`, sorted by path
pub fn discover_bulletin_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(BulletinError::InputNotFound {
            path: input_dir.to_path_buf(),
        });
    }

    let pattern = input_dir.join(BULLETIN_FILE_PATTERN);
    let pattern_str = pattern.to_string_lossy();
    debug!("Searching for bulletin files with pattern: {}", pattern_str);

    let mut files = Vec::new();
    for entry in glob::glob(&pattern_str)? {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(path) => debug!("Skipping non-file entry: {}", path.display()),
            Err(e) => warn!("Could not read directory entry: {}", e),
        }
    }

    files.sort();
    debug!("Found {} bulletin files", files.len());
    Ok(files)
}
