//! Configuration for SVG rendering

use std::ops::RangeInclusive;

/// Range accepted for page margins by the command line
pub const MARGIN_RANGE: RangeInclusive<f64> = 1.0..=300.0;

/// Range accepted for the font size by the command line
pub const FONT_SIZE_RANGE: RangeInclusive<f64> = 1.0..=100.0;

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Horizontal page margin
    pub margin_w: f64,

    /// Vertical page margin
    pub margin_h: f64,

    /// Label font size, also used to estimate label widths
    pub font_size: f64,

    /// Font family written on the text elements
    pub font_family: String,

    /// Whether to include XML declaration and standalone attributes
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "st-" for "st-edge")
    pub class_prefix: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            margin_w: 20.0,
            margin_h: 20.0,
            font_size: 12.0,
            font_family: "sans-serif".to_string(),
            standalone: true,
            pretty_print: true,
            class_prefix: Some("st-".to_string()),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both page margins
    pub fn with_margins(mut self, margin_w: f64, margin_h: f64) -> Self {
        self.margin_w = margin_w;
        self.margin_h = margin_h;
        self
    }

    /// Set the label font size
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the label font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}
