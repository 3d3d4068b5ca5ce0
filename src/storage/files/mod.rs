//! File storage implementation
//!
//! Transient documents and archives live under the uploads directory and are
//! removed once they have been streamed.

mod local;
mod scratch;

// Re-export public types
pub use local::LocalStorage;
pub use scratch::ScratchFiles;
