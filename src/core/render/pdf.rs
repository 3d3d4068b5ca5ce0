use super::{DocumentRenderer, PageLayout, QrMatrix, document_file_name};
use crate::utils::error::{RegistryError, Result};
use async_trait::async_trait;
use printpdf::{BuiltinFont, Color, Greyscale, Mm, PdfDocument, Rect};
use std::path::{Path, PathBuf};
use tracing::debug;

const TITLE: &str = "RAILWAY TRACK FITTING";

/// Renders PDF documents with a fixed [`PageLayout`]
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    layout: PageLayout,
}

impl PdfRenderer {
    pub fn new(layout: PageLayout) -> Self {
        Self { layout }
    }

    /// Build the document bytes for one code
    pub fn build(&self, code: &str, url: &str) -> Result<Vec<u8>> {
        let matrix = QrMatrix::encode(url)?;
        let layout = &self.layout;

        let (doc, page, layer) = PdfDocument::new(
            code,
            Mm(layout.page_width),
            Mm(layout.page_height),
            "Layer 1",
        );
        let canvas = doc.get_page(page).get_layer(layer);
        let font = doc
            .add_builtin_font(BuiltinFont::CourierBold)
            .map_err(|e| RegistryError::Render(format!("Failed to load font: {:?}", e)))?;

        canvas.set_fill_color(Color::Greyscale(Greyscale::new(0.0, None)));

        let title_y = layout.page_height - layout.qr_top_margin / 2.0;
        canvas.use_text(
            TITLE,
            layout.title_size,
            Mm(layout.centered_x(TITLE, layout.title_size)),
            Mm(title_y),
            &font,
        );

        let width = matrix.width();
        for (row, first, last) in matrix.dark_runs() {
            let (llx, lly, urx, ury) = layout.run_rect(width, row, first, last);
            canvas.add_rect(Rect::new(Mm(llx), Mm(lly), Mm(urx), Mm(ury)));
        }

        canvas.use_text(
            code,
            layout.code_size,
            Mm(layout.centered_x(code, layout.code_size)),
            Mm(layout.code_baseline),
            &font,
        );

        doc.save_to_bytes()
            .map_err(|e| RegistryError::Render(format!("Failed to write PDF: {:?}", e)))
    }
}

#[async_trait]
impl DocumentRenderer for PdfRenderer {
    async fn render(&self, code: &str, url: &str, dir: &Path) -> Result<PathBuf> {
        let renderer = self.clone();
        let (code_owned, url_owned) = (code.to_string(), url.to_string());
        let bytes = tokio::task::spawn_blocking(move || renderer.build(&code_owned, &url_owned))
            .await??;

        let path = dir.join(document_file_name(code));
        tokio::fs::write(&path, &bytes).await.map_err(|e| {
            RegistryError::Render(format!("Failed to write {}: {}", path.display(), e))
        })?;

        debug!(code = %code, path = %path.display(), bytes = bytes.len(), "Rendered document");
        Ok(path)
    }
}
