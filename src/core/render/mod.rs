//! Document rendering
//!
//! A rendered document is a single A6 page with the code printed in large type
//! under a QR symbol. The symbol always encodes the canonical URL, never the code.

mod layout;
mod pdf;
mod qr;

pub use layout::{PageLayout, QUIET_ZONE};
pub use pdf::PdfRenderer;
pub use qr::QrMatrix;

use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Renders one document per code into a directory
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    /// Render the document for `code` into `dir` and return the written path
    async fn render(&self, code: &str, url: &str, dir: &Path) -> Result<PathBuf>;
}

/// File name of the document for a code
pub fn document_file_name(code: &str) -> String {
    format!("{}.pdf", code)
}
