//! Source file collection.

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Collect files under `root` with the given extension.
///
/// Every file with the extension is a candidate: hidden entries and
/// ignore-rule matches are scanned like anything else. Directory entries
/// are sorted by file name so report ordering is stable across runs.
pub fn collect_source_files(root: &Path, extension: &str) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(path.to_path_buf());
        }
    }

    files
}
