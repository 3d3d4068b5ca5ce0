//! Ownership of transient request files

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Transient files and directories owned by one request.
///
/// Every tracked path is deleted exactly once: by [`ScratchFiles::cleanup`] when the
/// owner finishes normally, or on drop when it is abandoned (a failed stream or a
/// disconnected client). Deletion errors are logged and never propagated.
#[derive(Debug, Default)]
pub struct ScratchFiles {
    files: Vec<PathBuf>,
    dirs: Vec<PathBuf>,
}

impl ScratchFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a file
    pub fn track_file(&mut self, path: impl Into<PathBuf>) {
        self.files.push(path.into());
    }

    /// Take ownership of a directory and anything left inside it
    pub fn track_dir(&mut self, path: impl Into<PathBuf>) {
        self.dirs.push(path.into());
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }

    /// Delete every tracked path, files first
    pub async fn cleanup(mut self) {
        let files = std::mem::take(&mut self.files);
        let dirs = std::mem::take(&mut self.dirs);

        for file in files {
            log_removal(&file, tokio::fs::remove_file(&file).await);
        }
        for dir in dirs {
            log_removal(&dir, tokio::fs::remove_dir_all(&dir).await);
        }
    }
}

impl Drop for ScratchFiles {
    fn drop(&mut self) {
        if self.is_empty() {
            return;
        }
        debug!(
            files = self.files.len(),
            dirs = self.dirs.len(),
            "Removing abandoned scratch files"
        );
        for file in self.files.drain(..) {
            log_removal(&file, std::fs::remove_file(&file));
        }
        for dir in self.dirs.drain(..) {
            log_removal(&dir, std::fs::remove_dir_all(&dir));
        }
    }
}

fn log_removal(path: &Path, result: std::io::Result<()>) {
    match result {
        Ok(()) => debug!(path = %path.display(), "Removed scratch path"),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Scratch path already gone")
        }
        Err(e) => warn!(path = %path.display(), error = %e, "Failed to remove scratch path"),
    }
}
