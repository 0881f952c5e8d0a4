//! Syntree - draw bracket-notated trees
//!
//! This library provides a parser, a linear-time tidy tree layout engine and
//! SVG/DOT renderers for labeled trees written as `[S [NP a] [VP b]]`.
//!
//! # Example
//!
//! ```rust
//! use syntree::render;
//!
//! let svg = render("[S [NP a] [VP b]]").unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod error;
pub mod layout;
pub mod parser;
pub mod renderer;
pub mod stylesheet;
pub mod tree;

pub use error::ParseError;
pub use layout::{EstimatedMeasurer, LayoutConfig, LayoutError, TextMeasurer, TreeLayout};
pub use parser::{parse, Document};
pub use renderer::{render_dot, render_svg, render_svg_with_stylesheet, SvgConfig};
pub use tree::{NodeId, Tree};

use thiserror::Error;

// Re-export Stylesheet for public API
pub use stylesheet::Stylesheet;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error during parsing
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// Error during layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

impl From<Vec<ParseError>> for RenderError {
    fn from(errors: Vec<ParseError>) -> Self {
        RenderError::Parse(errors)
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Output document type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Scalable vector graphics drawn from the computed layout
    #[default]
    Svg,
    /// Graphviz source
    Dot,
}

impl OutputFormat {
    /// File extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Dot => "dot",
        }
    }
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for color resolution
    pub stylesheet: Stylesheet,
    /// Output document type
    pub format: OutputFormat,
    /// Debug mode: log the tree with its coordinates
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet for color resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render tree source to SVG with default configuration
///
/// This is the main entry point for the library. It parses the source,
/// computes layout, and generates SVG output.
///
/// # Example
///
/// ```rust
/// use syntree::render;
///
/// let svg = render(r#"
///     [S
///         [NP dog]
///         [VP barks]
///     ]
/// "#).unwrap();
///
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains("dog"));
/// assert!(svg.contains("barks"));
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render tree source with custom configuration
///
/// # Example
///
/// ```rust
/// use syntree::{render_with_config, LayoutConfig, OutputFormat, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_layout(LayoutConfig::default().with_h_sep(40.0))
///     .with_svg(SvgConfig::default().with_font_size(16.0));
/// let svg = render_with_config("[a b c]", config).unwrap();
/// assert!(svg.contains("<svg"));
///
/// let dot = render_with_config("[a b c]", RenderConfig::new().with_format(OutputFormat::Dot)).unwrap();
/// assert!(dot.contains("0 -> 1;"));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let doc = parse(source)?;
    let tree = Tree::from_document(&doc);
    tracing::debug!(nodes = tree.len(), "parsed tree");

    if config.format == OutputFormat::Dot {
        if config.debug {
            tracing::debug!("tree dump:\n{}", tree.dump(None));
        }
        return Ok(render_dot(&tree));
    }

    let measurer = EstimatedMeasurer::new(config.svg.font_size);
    let layout = layout::compute(&tree, &config.layout, &measurer)?;
    let size = layout.size();
    tracing::debug!(
        xmin = size.xmin,
        xmax = size.xmax,
        ymax = size.ymax,
        "computed layout"
    );

    if config.debug {
        tracing::debug!("tree dump:\n{}", tree.dump(Some(&layout)));
    }

    Ok(render_svg_with_stylesheet(
        &tree,
        &layout,
        &config.svg,
        &config.stylesheet,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_simple_tree() {
        let svg = render("[S [NP a] [VP b]]").unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(">NP</text>"));
        assert_eq!(svg.matches("<line").count(), 4);
    }

    #[test]
    fn test_render_parse_error() {
        let err = render("[S [NP a]").unwrap_err();
        assert!(matches!(err, RenderError::Parse(_)));
        assert!(err.to_string().starts_with("parse errors:"));
    }

    #[test]
    fn test_render_invalid_font_size() {
        let config = RenderConfig::new().with_svg(SvgConfig::new().with_font_size(0.0));
        let err = render_with_config("[a]", config).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Layout(LayoutError::MeasurerUnavailable { .. })
        ));
    }

    #[test]
    fn test_dot_skips_layout() {
        // A measurer that cannot work does not matter for DOT output
        let config = RenderConfig::new()
            .with_format(OutputFormat::Dot)
            .with_svg(SvgConfig::new().with_font_size(0.0));
        let dot = render_with_config("[a b]", config).unwrap();
        assert!(dot.contains("digraph syntax_tree"));
    }

    #[test]
    fn test_output_format_extension() {
        assert_eq!(OutputFormat::default(), OutputFormat::Svg);
        assert_eq!(OutputFormat::Svg.extension(), "svg");
        assert_eq!(OutputFormat::Dot.extension(), "dot");
    }

    #[test]
    fn test_custom_stylesheet() {
        let stylesheet: Stylesheet = "[colors]\nbrand = \"#123456\"\n".parse().unwrap();
        let config = RenderConfig::new().with_stylesheet(stylesheet);
        let svg = render_with_config(r#"[a R"(label = b color = brand)"]"#, config).unwrap();
        assert!(svg.contains(r##"fill="#123456">b</text>"##));
    }
}
