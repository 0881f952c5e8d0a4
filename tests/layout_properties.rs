//! Property-based invariant tests for the tree layout engine.
//!
//! Verifies, for random ordered trees and separations:
//! 1. Depth alignment: y == depth * v_sep
//! 2. No overlap: neighbours on a row are at least h_sep apart
//! 3. Centering: a parent sits midway between its extreme children
//! 4. The root is at x = 0
//! 5. The tree size bounds every node
//! 6. Determinism: the same input gives the same layout

use std::collections::BTreeMap;

use proptest::prelude::*;

use syntree::layout::{compute, LayoutConfig, TreeLayout};
use syntree::{NodeId, Tree};

const EPS: f64 = 1e-6;

// ── Strategy helpers ──────────────────────────────────────────────────

/// Node `i + 1` hangs under a node created before it
fn arb_tree() -> impl Strategy<Value = Tree> {
    prop::collection::vec(any::<prop::sample::Index>(), 0..120).prop_map(|parents| {
        let mut tree = Tree::new();
        let mut ids = vec![tree.add_root("n0").unwrap()];
        for (i, parent) in parents.iter().enumerate() {
            let parent = ids[parent.index(ids.len())];
            ids.push(tree.add_child(parent, format!("n{}", i + 1)));
        }
        tree
    })
}

fn arb_config() -> impl Strategy<Value = LayoutConfig> {
    (1.0f64..=300.0, 1.0f64..=300.0)
        .prop_map(|(h, v)| LayoutConfig::new().with_h_sep(h).with_v_sep(v))
}

fn label_width(label: &str) -> f64 {
    label.len() as f64 * 3.0
}

/// Node ids per depth in left-to-right order
fn rows(tree: &Tree) -> BTreeMap<usize, Vec<NodeId>> {
    let mut rows: BTreeMap<usize, Vec<NodeId>> = BTreeMap::new();
    for id in tree.preorder() {
        rows.entry(tree.depth(id)).or_default().push(id);
    }
    rows
}

fn layout(tree: &Tree, config: &LayoutConfig) -> TreeLayout {
    compute(tree, config, &label_width).expect("layout of a non-empty tree")
}

proptest! {
    #[test]
    fn depth_alignment(tree in arb_tree(), config in arb_config()) {
        let layout = layout(&tree, &config);
        for id in tree.preorder() {
            prop_assert_eq!(layout.position(id).y, tree.depth(id) as f64 * config.v_sep);
        }
    }

    #[test]
    fn no_overlap_within_rows(tree in arb_tree(), config in arb_config()) {
        let layout = layout(&tree, &config);
        for (depth, row) in rows(&tree) {
            for pair in row.windows(2) {
                let gap = layout.position(pair[1]).x - layout.position(pair[0]).x;
                prop_assert!(
                    gap >= config.h_sep - EPS * config.h_sep.max(1.0) * 10.0,
                    "depth {}: gap {} < {}", depth, gap, config.h_sep
                );
            }
        }
    }

    #[test]
    fn parents_are_centered(tree in arb_tree(), config in arb_config()) {
        let layout = layout(&tree, &config);
        for id in tree.preorder() {
            let children = tree.children(id);
            if let (Some(&first), Some(&last)) = (children.first(), children.last()) {
                let mid = (layout.position(first).x + layout.position(last).x) / 2.0;
                let x = layout.position(id).x;
                prop_assert!((x - mid).abs() <= EPS * (1.0 + mid.abs()), "{} vs {}", x, mid);
            }
        }
    }

    #[test]
    fn root_at_origin(tree in arb_tree(), config in arb_config()) {
        let layout = layout(&tree, &config);
        let root = tree.root().unwrap();
        prop_assert_eq!(layout.position(root).x, 0.0);
        prop_assert_eq!(layout.position(root).y, 0.0);
    }

    #[test]
    fn size_bounds_all_nodes(tree in arb_tree(), config in arb_config()) {
        let layout = layout(&tree, &config);
        let size = layout.size();
        for id in tree.preorder() {
            let p = layout.position(id);
            let width = layout.text_box(id).width;
            prop_assert!(p.x.is_finite());
            prop_assert!(size.xmin <= p.x);
            prop_assert!(size.xmax >= p.x + width);
            prop_assert!(size.ymax >= p.y);
        }
    }

    #[test]
    fn layout_is_deterministic(tree in arb_tree(), config in arb_config()) {
        prop_assert_eq!(layout(&tree, &config), layout(&tree, &config));
    }
}
