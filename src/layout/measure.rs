//! Label measurement
//!
//! The layout engine only needs a width per node. It gets it through the
//! [`TextMeasurer`] trait so a caller can plug in real font metrics; the
//! crate ships a font-free [`EstimatedMeasurer`] based on an average glyph
//! advance.

/// Average glyph advance as a fraction of the font size
const AVERAGE_CHAR_WIDTH: f64 = 0.6;

/// Rendered extent of a label
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextBox {
    pub width: f64,
    pub height: f64,
}

impl TextBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Source of label sizes
pub trait TextMeasurer {
    /// Whether the measurer can produce sizes at all. Checked once per layout.
    fn is_available(&self) -> bool {
        true
    }

    /// Measure one label
    fn measure(&self, text: &str) -> TextBox;
}

/// Any `Fn(&str) -> f64` measures widths only
impl<F> TextMeasurer for F
where
    F: Fn(&str) -> f64,
{
    fn measure(&self, text: &str) -> TextBox {
        TextBox::new(self(text), 0.0)
    }
}

/// Measurer that estimates sizes from the character count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedMeasurer {
    font_size: f64,
}

impl EstimatedMeasurer {
    pub fn new(font_size: f64) -> Self {
        Self { font_size }
    }
}

impl TextMeasurer for EstimatedMeasurer {
    fn is_available(&self) -> bool {
        self.font_size.is_finite() && self.font_size > 0.0
    }

    fn measure(&self, text: &str) -> TextBox {
        if text.is_empty() {
            return TextBox::default();
        }
        let chars = text.chars().count() as f64;
        TextBox::new(chars * self.font_size * AVERAGE_CHAR_WIDTH, self.font_size)
    }
}
