//! Streaming of transient files
//!
//! The stream owns the request's [`ScratchFiles`]: finishing the stream deletes
//! them, and dropping it early (client gone, write error) deletes them on drop.

use crate::storage::files::ScratchFiles;
use crate::utils::error::RegistryError;
use bytes::Bytes;
use futures::Stream;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::{debug, error};

const READ_CHUNK: usize = 64 * 1024;

/// Stream `path` in chunks, then delete everything `scratch` owns
pub fn stream_and_cleanup(
    path: PathBuf,
    scratch: ScratchFiles,
) -> impl Stream<Item = Result<Bytes, RegistryError>> + 'static {
    async_stream::stream! {
        let scratch = scratch;
        match tokio::fs::File::open(&path).await {
            Ok(mut file) => {
                let mut buf = vec![0u8; READ_CHUNK];
                let mut sent = 0u64;
                loop {
                    match file.read(&mut buf).await {
                        Ok(0) => break,
                        Ok(n) => {
                            sent += n as u64;
                            yield Ok(Bytes::copy_from_slice(&buf[..n]));
                        }
                        Err(e) => {
                            error!(path = %path.display(), error = %e, "Response stream failed");
                            yield Err(RegistryError::Io(e));
                            break;
                        }
                    }
                }
                debug!(path = %path.display(), bytes = sent, "Response stream finished");
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to open file for streaming");
                yield Err(RegistryError::Io(e));
            }
        }
        scratch.cleanup().await;
    }
}
