//! Renderers for laid out trees
//!
//! SVG output draws the layout computed by [`crate::layout`]. DOT output
//! hands the tree structure to Graphviz instead.

pub mod config;
pub mod dot;
pub mod svg;

pub use config::{SvgConfig, FONT_SIZE_RANGE, MARGIN_RANGE};
pub use dot::render_dot;
pub use svg::{render_svg, render_svg_with_stylesheet};
