//! Archive packaging
//!
//! The archive is built by a blocking task and handed to an async writer task
//! entry by entry, as soon as each entry is compressed and its local header is
//! final. Packaging finishes only when both the archiver has finished and the
//! output file has been flushed and closed. A writer error takes precedence,
//! since the archiver only sees it as a closed channel.

use crate::utils::error::{RegistryError, Result};
use bytes::Bytes;
use std::collections::HashSet;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const CHUNK_SIZE: usize = 64 * 1024;
const CHANNEL_DEPTH: usize = 16;

/// Result of a finished archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveStats {
    pub entries: usize,
    pub bytes: u64,
}

/// Pack `files` into a deflate archive at `archive_path`, each under its base name
pub async fn pack_archive(files: Vec<PathBuf>, archive_path: &Path) -> Result<ArchiveStats> {
    let (tx, rx) = mpsc::channel::<Bytes>(CHANNEL_DEPTH);

    let archiver = async move {
        tokio::task::spawn_blocking(move || build_archive(&files, tx)).await?
    };
    let writer = write_chunks(rx, archive_path);

    // a failed archiver drops the sender and a failed writer drops the receiver,
    // so both sides settle before the caller can remove the output file
    let (entries, bytes) = match tokio::join!(archiver, writer) {
        (Ok(entries), Ok(bytes)) => (entries, bytes),
        (_, Err(e)) | (Err(e), Ok(_)) => return Err(e),
    };
    debug!(
        path = %archive_path.display(),
        entries,
        bytes,
        "Archive finalized"
    );
    Ok(ArchiveStats { entries, bytes })
}

/// Seekable sink over the writer channel.
///
/// Bytes stay in `pending` until the archiver flushes them, which it does after
/// every finished entry; only that unflushed tail can be revisited by a seek.
struct ChannelSink {
    tx: mpsc::Sender<Bytes>,
    pending: Vec<u8>,
    flushed: u64,
    cursor: u64,
}

impl ChannelSink {
    fn new(tx: mpsc::Sender<Bytes>) -> Self {
        Self {
            tx,
            pending: Vec::new(),
            flushed: 0,
            cursor: 0,
        }
    }

    fn end(&self) -> u64 {
        self.flushed + self.pending.len() as u64
    }
}

impl Write for ChannelSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // seek keeps flushed <= cursor <= end
        let offset = (self.cursor - self.flushed) as usize;
        let overlap = (self.pending.len() - offset).min(buf.len());
        self.pending[offset..offset + overlap].copy_from_slice(&buf[..overlap]);
        self.pending.extend_from_slice(&buf[overlap..]);
        self.cursor += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.cursor != self.end() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "flush while positioned inside the archive",
            ));
        }

        let mut data = Bytes::from(std::mem::take(&mut self.pending));
        self.flushed += data.len() as u64;
        while !data.is_empty() {
            let chunk = data.split_to(CHUNK_SIZE.min(data.len()));
            self.tx
                .blocking_send(chunk)
                .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "archive writer closed"))?;
        }
        Ok(())
    }
}

// Only archive copy operations read back; packaging never uses them.
impl Read for ChannelSink {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "archive sink is write-only",
        ))
    }
}

impl Seek for ChannelSink {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(n) => Some(n),
            SeekFrom::End(delta) => self.end().checked_add_signed(delta),
            SeekFrom::Current(delta) => self.cursor.checked_add_signed(delta),
        };
        match target {
            Some(t) if t >= self.flushed && t <= self.end() => {
                self.cursor = t;
                Ok(t)
            }
            _ => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                format!("seek outside unflushed archive bytes {}..{}", self.flushed, self.end()),
            )),
        }
    }
}

fn build_archive(files: &[PathBuf], tx: mpsc::Sender<Bytes>) -> Result<usize> {
    let mut zip = ZipWriter::new(ChannelSink::new(tx));
    zip.set_flush_on_finish_file(true);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));

    let mut names = HashSet::new();
    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                RegistryError::Archive(format!("Not a file path: {}", path.display()))
            })?;
        if !names.insert(name.clone()) {
            warn!(name = %name, "Skipping duplicate archive entry");
            continue;
        }

        zip.start_file(name.as_str(), options).map_err(|e| {
            RegistryError::Archive(format!("Failed to add '{}' to archive: {}", name, e))
        })?;
        let mut source = std::fs::File::open(path).map_err(|e| {
            RegistryError::Archive(format!("Failed to open {}: {}", path.display(), e))
        })?;
        std::io::copy(&mut source, &mut zip).map_err(|e| {
            RegistryError::Archive(format!("Failed to write '{}' content: {}", name, e))
        })?;
    }

    let mut sink = zip
        .finish()
        .map_err(|e| RegistryError::Archive(format!("Failed to finalize archive: {}", e)))?;
    sink.flush()
        .map_err(|e| RegistryError::Archive(format!("Failed to hand off archive tail: {}", e)))?;

    Ok(names.len())
}

async fn write_chunks(mut rx: mpsc::Receiver<Bytes>, path: &Path) -> Result<u64> {
    let mut file = tokio::fs::File::create(path).await.map_err(|e| {
        RegistryError::Archive(format!("Failed to create {}: {}", path.display(), e))
    })?;

    let mut written = 0u64;
    while let Some(chunk) = rx.recv().await {
        file.write_all(&chunk)
            .await
            .map_err(|e| RegistryError::Archive(format!("Failed to write archive: {}", e)))?;
        written += chunk.len() as u64;
    }

    file.flush()
        .await
        .map_err(|e| RegistryError::Archive(format!("Failed to flush archive: {}", e)))?;
    file.sync_all()
        .await
        .map_err(|e| RegistryError::Archive(format!("Failed to sync archive: {}", e)))?;

    Ok(written)
}
