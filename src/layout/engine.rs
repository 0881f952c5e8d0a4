//! Linear-time tidy tree layout
//!
//! Buchheim, Jünger and Leipert's improvement of Walker's algorithm. The first
//! walk assigns every node a preliminary x relative to its siblings and a
//! modifier that is pushed down onto its subtree; the second walk sums the
//! modifiers into absolute coordinates.
//!
//! All per-node working state lives in a table owned by one call to
//! [`compute`], indexed by [`NodeId`]. Both walks use explicit stacks.

use crate::tree::{NodeId, Tree};

use super::config::LayoutConfig;
use super::error::LayoutError;
use super::measure::{TextBox, TextMeasurer};
use super::types::{NodePosition, TreeLayout, TreeSize};

/// Compute node positions for `tree`
///
/// Labels are measured once up front. If the measurer is unavailable nothing
/// is laid out.
pub fn compute<M>(
    tree: &Tree,
    config: &LayoutConfig,
    measurer: &M,
) -> Result<TreeLayout, LayoutError>
where
    M: TextMeasurer + ?Sized,
{
    config.validate()?;
    let root = tree.root().ok_or(LayoutError::EmptyTree)?;
    if !measurer.is_available() {
        return Err(LayoutError::measurer_unavailable(
            "cannot measure label text",
        ));
    }

    let boxes: Vec<TextBox> = (0..tree.len())
        .map(|i| sanitize(measurer.measure(&tree.node(NodeId(i)).label)))
        .collect();

    let mut walker = Walker::new(tree, config.h_sep);
    walker.first_walk(root);
    let (positions, size) = walker.second_walk(root, config.v_sep, &boxes);

    Ok(TreeLayout::new(positions, boxes, size))
}

/// Non-finite or negative sizes count as zero
fn sanitize(mut text_box: TextBox) -> TextBox {
    if !text_box.width.is_finite() || text_box.width < 0.0 {
        text_box.width = 0.0;
    }
    if !text_box.height.is_finite() || text_box.height < 0.0 {
        text_box.height = 0.0;
    }
    text_box
}

/// Working state of one node during the first walk
#[derive(Debug, Clone, Copy)]
struct Scratch {
    prelim: f64,
    modifier: f64,
    shift: f64,
    change: f64,
    thread: Option<NodeId>,
    ancestor: NodeId,
    /// Index among siblings
    number: usize,
}

impl Scratch {
    fn new(id: NodeId) -> Self {
        Self {
            prelim: 0.0,
            modifier: 0.0,
            shift: 0.0,
            change: 0.0,
            thread: None,
            ancestor: id,
            number: 0,
        }
    }
}

struct Walker<'t> {
    tree: &'t Tree,
    h_sep: f64,
    scratch: Vec<Scratch>,
}

impl<'t> Walker<'t> {
    fn new(tree: &'t Tree, h_sep: f64) -> Self {
        let mut scratch: Vec<Scratch> = (0..tree.len()).map(|i| Scratch::new(NodeId(i))).collect();
        for i in 0..tree.len() {
            for (number, child) in tree.children(NodeId(i)).iter().enumerate() {
                scratch[child.index()].number = number;
            }
        }
        Self {
            tree,
            h_sep,
            scratch,
        }
    }

    fn s(&self, id: NodeId) -> &Scratch {
        &self.scratch[id.index()]
    }

    fn s_mut(&mut self, id: NodeId) -> &mut Scratch {
        &mut self.scratch[id.index()]
    }

    fn next_left(&self, v: NodeId) -> Option<NodeId> {
        self.tree.children(v).first().copied().or(self.s(v).thread)
    }

    fn next_right(&self, v: NodeId) -> Option<NodeId> {
        self.tree.children(v).last().copied().or(self.s(v).thread)
    }

    /// Bottom-up pass
    ///
    /// Subtrees are finished in post-order. A node's own prelim depends on
    /// its left sibling, so it is placed by its parent right before the
    /// parent apportions it.
    fn first_walk(&mut self, root: NodeId) {
        for v in postorder(self.tree, root) {
            self.finish(v);
        }
        self.place(root, None);
    }

    /// Place and apportion the children of `v`, then apply deferred shifts
    fn finish(&mut self, v: NodeId) {
        let tree = self.tree;
        let children = tree.children(v);
        let Some(&leftmost) = children.first() else {
            return;
        };

        let mut dac = leftmost;
        let mut left = None;
        for &child in children {
            self.place(child, left);
            if let Some(w) = left {
                dac = self.apportion(child, w, dac);
            }
            left = Some(child);
        }
        self.execute_shifts(v);
    }

    /// Set the prelim (and for internal nodes the modifier) of `v`
    fn place(&mut self, v: NodeId, left_sibling: Option<NodeId>) {
        let tree = self.tree;
        let from_left = left_sibling.map(|w| self.s(w).prelim + self.h_sep);
        let children = tree.children(v);

        match (children.first(), children.last()) {
            (Some(&first), Some(&last)) => {
                let midpoint = (self.s(first).prelim + self.s(last).prelim) * 0.5;
                let s = self.s_mut(v);
                match from_left {
                    Some(prelim) => {
                        s.prelim = prelim;
                        s.modifier = prelim - midpoint;
                    }
                    None => s.prelim = midpoint,
                }
            }
            _ => {
                if let Some(prelim) = from_left {
                    self.s_mut(v).prelim = prelim;
                }
            }
        }
    }

    /// Push the subtree of `v` right until it clears the subtrees of its left
    /// siblings. Returns the new default ancestor.
    fn apportion(&mut self, v: NodeId, left_sibling: NodeId, mut dac: NodeId) -> NodeId {
        let tree = self.tree;
        let leftmost = tree
            .parent(v)
            .and_then(|p| tree.children(p).first().copied())
            .unwrap_or(left_sibling);

        // Outside and inside contours of the left forest and the right subtree
        let (mut ll, mut lr, mut rl, mut rr) = (leftmost, left_sibling, v, v);
        let mut ll_mod = self.s(ll).modifier;
        let mut lr_mod = self.s(lr).modifier;
        let mut rl_mod = self.s(rl).modifier;
        let mut rr_mod = self.s(rr).modifier;

        while let (Some(next_lr), Some(next_rl)) = (self.next_right(lr), self.next_left(rl)) {
            // Outside contours are at least as deep as the inside ones
            let outer = (self.next_left(ll), self.next_right(rr));
            debug_assert!(
                outer.0.is_some() && outer.1.is_some(),
                "outer contour ended above inner contour at {}",
                v
            );
            let (Some(next_ll), Some(next_rr)) = outer else {
                break;
            };
            ll = next_ll;
            lr = next_lr;
            rl = next_rl;
            rr = next_rr;
            self.s_mut(rr).ancestor = v;

            let shift = (self.s(lr).prelim + lr_mod) - (self.s(rl).prelim + rl_mod) + self.h_sep;
            if shift > 0.0 {
                let w0 = self.ancestor(lr, v, dac);
                self.move_subtree(w0, v, shift);
                rl_mod += shift;
                rr_mod += shift;
            }

            ll_mod += self.s(ll).modifier;
            lr_mod += self.s(lr).modifier;
            rl_mod += self.s(rl).modifier;
            rr_mod += self.s(rr).modifier;
        }

        if let Some(next_lr) = self.next_right(lr) {
            if self.next_right(rr).is_none() {
                let s = self.s_mut(rr);
                s.thread = Some(next_lr);
                s.modifier += lr_mod - rr_mod;
            }
        }

        if let Some(next_rl) = self.next_left(rl) {
            if self.next_left(ll).is_none() {
                let s = self.s_mut(ll);
                s.thread = Some(next_rl);
                s.modifier += rl_mod - ll_mod;
                dac = v;
            }
        }

        dac
    }

    /// Sibling of `v` whose subtree contains `vi`, falling back to `dac`
    fn ancestor(&self, vi: NodeId, v: NodeId, dac: NodeId) -> NodeId {
        let candidate = self.s(vi).ancestor;
        if self.tree.parent(candidate) == self.tree.parent(v) {
            candidate
        } else {
            dac
        }
    }

    /// Shift the subtree of `w1` right and record how the shift is spread
    /// over the siblings between `w0` and `w1`
    fn move_subtree(&mut self, w0: NodeId, w1: NodeId, shift: f64) {
        // w0 is always a left sibling of w1
        let subtrees = self.s(w1).number.saturating_sub(self.s(w0).number).max(1) as f64;

        let right = self.s_mut(w1);
        right.change -= shift / subtrees;
        right.shift += shift;
        right.prelim += shift;
        right.modifier += shift;

        self.s_mut(w0).change += shift / subtrees;
    }

    /// Apply the shifts recorded by `move_subtree` to the children of `v`
    fn execute_shifts(&mut self, v: NodeId) {
        let tree = self.tree;
        let mut shift = 0.0;
        let mut change = 0.0;
        for &child in tree.children(v).iter().rev() {
            let s = self.s_mut(child);
            s.prelim += shift;
            s.modifier += shift;
            change += s.change;
            shift += s.shift + change;
        }
    }

    /// Top-down pass: absolute coordinates and the tree extent
    fn second_walk(
        &self,
        root: NodeId,
        v_sep: f64,
        boxes: &[TextBox],
    ) -> (Vec<NodePosition>, TreeSize) {
        let mut positions = vec![NodePosition::default(); self.tree.len()];
        let mut bounds = Bounds::new();

        let mut stack = vec![(root, -self.s(root).prelim, 0usize)];
        while let Some((v, m, depth)) = stack.pop() {
            let x = self.s(v).prelim + m;
            let y = depth as f64 * v_sep;
            positions[v.index()] = NodePosition::new(x, y);
            bounds.update(x, y, boxes[v.index()].width);

            let child_m = m + self.s(v).modifier;
            stack.extend(
                self.tree
                    .children(v)
                    .iter()
                    .rev()
                    .map(|&c| (c, child_m, depth + 1)),
            );
        }

        (positions, bounds.finish())
    }
}

/// Running extent of the second walk
struct Bounds {
    xmin: f64,
    xmin_corrected: f64,
    xmax: f64,
    ymax: f64,
}

impl Bounds {
    fn new() -> Self {
        Self {
            xmin: f64::INFINITY,
            xmin_corrected: 0.0,
            xmax: f64::NEG_INFINITY,
            ymax: f64::NEG_INFINITY,
        }
    }

    fn update(&mut self, x: f64, y: f64, width: f64) {
        // Only the first node reaching a new minimum corrects it
        if x < self.xmin {
            self.xmin = x;
            self.xmin_corrected = x - width * 0.5;
        }
        self.xmax = self.xmax.max(x + width);
        self.ymax = self.ymax.max(y);
    }

    fn finish(self) -> TreeSize {
        TreeSize {
            xmin: self.xmin_corrected,
            xmax: self.xmax,
            ymax: self.ymax,
        }
    }
}

/// Node ids in post-order, children left to right
fn postorder(tree: &Tree, root: NodeId) -> Vec<NodeId> {
    let mut order = Vec::with_capacity(tree.len());
    let mut stack = vec![root];
    while let Some(v) = stack.pop() {
        order.push(v);
        stack.extend(tree.children(v).iter().copied());
    }
    order.reverse();
    order
}
