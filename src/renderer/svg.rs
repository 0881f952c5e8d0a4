//! SVG generation from tree layouts

use crate::layout::{TreeLayout, TreeSize};
use crate::stylesheet::Stylesheet;
use crate::tree::{NodeId, Tree};

use super::SvgConfig;

/// Fraction of the font size between a label's center and its edge endpoint
const EDGE_GAP: f64 = 0.45;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    /// Add the CSS rules for edges and labels
    pub fn add_default_styles(&mut self) {
        let prefix = self.prefix();
        self.styles.push(format!(
            ".{}edge {{ stroke: #000000; stroke-opacity: 0.85; stroke-width: 1; fill: none; }}",
            prefix
        ));
        self.styles.push(format!(
            ".{}label {{ font-family: {}; font-size: {}px; }}",
            prefix,
            escape_xml(&self.config.font_family),
            num(self.config.font_size)
        ));
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add an edge line
    pub fn add_edge(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.elements.push(format!(
            r#"{}<line class="{}edge" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            self.indent_str(),
            self.prefix(),
            num(x1),
            num(y1),
            num(x2),
            num(y2)
        ));
    }

    /// Add a label centered on (x, y)
    pub fn add_label(&mut self, id: Option<&str>, text: &str, x: f64, y: f64, fill: &str) {
        let id_attr = id.map(|i| format!(r#" id="{}""#, i)).unwrap_or_default();
        self.elements.push(format!(
            r#"{}<text{} class="{}label" x="{}" y="{}" text-anchor="middle" dominant-baseline="central" fill="{}">{}</text>"#,
            self.indent_str(),
            id_attr,
            self.prefix(),
            num(x),
            num(y),
            escape_xml(fill),
            escape_xml(text)
        ));
    }

    /// Assemble the document for a page of the given size
    pub fn build(self, width: f64, height: f64) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        let (w, h) = (num(width), num(height));
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            w, h, w, h
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str(&self.indent_str());
            svg.push_str("<style>");
            svg.push_str(nl);
            for style in &self.styles {
                if self.config.pretty_print {
                    svg.push_str("    ");
                }
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str(&self.indent_str());
            svg.push_str("</style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);

        svg
    }
}

/// Page geometry derived from the tree extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page {
    pub width: f64,
    pub height: f64,
    margin_w: f64,
    margin_h: f64,
    xmin: f64,
}

impl Page {
    pub fn new(size: TreeSize, config: &SvgConfig) -> Self {
        Self {
            width: 2.0 * config.margin_w + size.xmax - size.xmin,
            height: 2.0 * config.margin_h + size.ymax,
            margin_w: config.margin_w,
            margin_h: config.margin_h,
            xmin: size.xmin,
        }
    }

    /// Page coordinates of a node's center
    pub fn center(&self, layout: &TreeLayout, id: NodeId) -> (f64, f64) {
        let p = layout.position(id);
        (p.x + self.margin_w - self.xmin, p.y + self.margin_h)
    }
}

/// Render a laid out tree to an SVG string (with the X11 stylesheet)
pub fn render_svg(tree: &Tree, layout: &TreeLayout, config: &SvgConfig) -> String {
    render_svg_with_stylesheet(tree, layout, config, &Stylesheet::default())
}

/// Render a laid out tree to an SVG string with a custom stylesheet
pub fn render_svg_with_stylesheet(
    tree: &Tree,
    layout: &TreeLayout,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> String {
    let page = Page::new(layout.size(), config);
    let gap = config.font_size * EDGE_GAP;
    let prefix = config.class_prefix.clone().unwrap_or_default();

    let mut builder = SvgBuilder::new(config.clone());
    builder.add_default_styles();

    // Each node draws the edge up to its parent, then its own label
    for id in tree.preorder() {
        let (cx, cy) = page.center(layout, id);
        if let Some(parent) = tree.parent(id) {
            let (px, py) = page.center(layout, parent);
            builder.add_edge(cx, cy - gap, px, py + gap);
        }

        let node = tree.node(id);
        let fill = node
            .property("color")
            .map(|name| stylesheet.resolve_or_default(name))
            .unwrap_or_else(|| crate::stylesheet::DEFAULT_COLOR.to_string());
        let dom_id = format!("{}node-{}", prefix, id);
        builder.add_label(Some(&dom_id), &node.label, cx, cy, &fill);
    }

    builder.build(page.width, page.height)
}

/// Format a coordinate with at most three decimals
fn num(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
