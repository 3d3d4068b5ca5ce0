/// Points to millimetres
const PT_TO_MM: f32 = 0.352_778;
/// Advance width of Courier glyphs as a fraction of the font size
const COURIER_ADVANCE: f32 = 0.6;
/// Quiet zone around the symbol, in modules
pub const QUIET_ZONE: usize = 4;

/// Fixed page geometry in millimetres, origin at the bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub page_width: f32,
    pub page_height: f32,
    /// Side of the square QR area including its quiet zone
    pub qr_side: f32,
    /// Distance from the top edge to the QR area
    pub qr_top_margin: f32,
    pub title_size: f32,
    pub code_size: f32,
    /// Baseline of the code text
    pub code_baseline: f32,
}

impl Default for PageLayout {
    /// A6 portrait
    fn default() -> Self {
        Self {
            page_width: 105.0,
            page_height: 148.0,
            qr_side: 80.0,
            qr_top_margin: 24.0,
            title_size: 11.0,
            code_size: 20.0,
            code_baseline: 30.0,
        }
    }
}

impl PageLayout {
    /// Bottom-left corner of the QR area
    pub fn qr_origin(&self) -> (f32, f32) {
        (
            (self.page_width - self.qr_side) / 2.0,
            self.page_height - self.qr_top_margin - self.qr_side,
        )
    }

    /// Side length of one module for a symbol `width` modules wide
    pub fn module_size(&self, width: usize) -> f32 {
        self.qr_side / (width + 2 * QUIET_ZONE) as f32
    }

    /// Rectangle `(llx, lly, urx, ury)` covering modules `first..=last` of `row`
    pub fn run_rect(&self, width: usize, row: usize, first: usize, last: usize) -> (f32, f32, f32, f32) {
        let (ox, oy) = self.qr_origin();
        let m = self.module_size(width);
        let top = oy + self.qr_side - (QUIET_ZONE + row) as f32 * m;
        (
            ox + (QUIET_ZONE + first) as f32 * m,
            top - m,
            ox + (QUIET_ZONE + last + 1) as f32 * m,
            top,
        )
    }

    /// Left edge that horizontally centres monospaced `text` at `size` points
    pub fn centered_x(&self, text: &str, size: f32) -> f32 {
        let width = text.chars().count() as f32 * size * COURIER_ADVANCE * PT_TO_MM;
        ((self.page_width - width) / 2.0).max(4.0)
    }
}
