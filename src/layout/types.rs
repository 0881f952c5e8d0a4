//! Core types for the layout engine

use crate::tree::NodeId;

use super::measure::TextBox;

/// Absolute position of a node's anchor point
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodePosition {
    pub x: f64,
    pub y: f64,
}

impl NodePosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Extent of a laid out tree, used to size the page
///
/// `xmin` is corrected by half the width of the node that first reached the
/// smallest x in pre-order, so a wide leftmost label is not clipped once the
/// tree is centered on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeSize {
    pub xmin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl TreeSize {
    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.ymax
    }
}

/// Result of laying out one tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout {
    positions: Vec<NodePosition>,
    boxes: Vec<TextBox>,
    size: TreeSize,
}

impl TreeLayout {
    pub(crate) fn new(positions: Vec<NodePosition>, boxes: Vec<TextBox>, size: TreeSize) -> Self {
        Self {
            positions,
            boxes,
            size,
        }
    }

    /// Position of a node
    pub fn position(&self, id: NodeId) -> NodePosition {
        self.positions[id.index()]
    }

    /// Measured label box of a node
    pub fn text_box(&self, id: NodeId) -> TextBox {
        self.boxes[id.index()]
    }

    pub fn size(&self) -> TreeSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
