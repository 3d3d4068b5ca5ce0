//! Archive and filesystem assertions

use std::collections::BTreeSet;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Sorted entry names of an in-memory ZIP archive
pub fn zip_entry_names(bytes: &[u8]) -> Vec<String> {
    let archive = ZipArchive::new(Cursor::new(bytes)).expect("response body is a ZIP archive");
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}

/// Every file and directory below `root`
pub fn snapshot(root: &Path) -> BTreeSet<PathBuf> {
    let mut seen = BTreeSet::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path.clone());
            }
            seen.insert(path);
        }
    }
    seen
}

/// Assert that `root` holds exactly what it held in `before`
pub fn assert_no_leftovers(root: &Path, before: &BTreeSet<PathBuf>) {
    let after = snapshot(root);
    let leftovers: Vec<_> = after.difference(before).collect();
    assert!(
        leftovers.is_empty(),
        "uploads directory has leftover files: {:?}",
        leftovers
    );
}
