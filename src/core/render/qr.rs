use crate::utils::error::{RegistryError, Result};
use qrcode::{Color, EcLevel, QrCode};

/// Module matrix of a QR symbol, row-major, `true` for dark modules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Encode `data` with medium error correction
    pub fn encode(data: &str) -> Result<Self> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)
            .map_err(|e| RegistryError::Render(format!("QR encoding failed: {}", e)))?;

        let width = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();

        Ok(Self { width, modules })
    }

    /// Modules per side, excluding the quiet zone
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.modules[y * self.width + x]
    }

    /// Horizontal runs of dark modules as `(row, first_col, last_col)`
    pub fn dark_runs(&self) -> Vec<(usize, usize, usize)> {
        let mut runs = Vec::new();
        for y in 0..self.width {
            let mut start = None;
            for x in 0..=self.width {
                match (start, self.is_dark(x, y)) {
                    (None, true) => start = Some(x),
                    (Some(first), false) => {
                        runs.push((y, first, x - 1));
                        start = None;
                    }
                    _ => {}
                }
            }
        }
        runs
    }
}
