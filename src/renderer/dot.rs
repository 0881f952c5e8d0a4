//! Graphviz DOT export
//!
//! Positions are left to Graphviz; `ordering = out` keeps children in input
//! order.

use std::fmt::Write as _;

use crate::tree::Tree;

const HEADER: &str = "\
//
// Draw this file with Graphviz (https://www.graphviz.org/):
//   dot -Tsvg <file.dot> -o <file.svg>
//

digraph syntax_tree {
    node[ordering = out];

";

/// Render a tree as a DOT digraph
///
/// Nodes declared with a raw-string label keep the raw text as their
/// attribute list, so properties such as `color` reach Graphviz unchanged.
pub fn render_dot(tree: &Tree) -> String {
    let mut out = String::from(HEADER);

    for id in tree.preorder() {
        let node = tree.node(id);
        // Writing into a String cannot fail
        let _ = match &node.raw {
            Some(raw) => writeln!(out, "    {}[{}];", id, raw),
            None => writeln!(out, "    {}[label = \"{}\"];", id, escape_dot(&node.label)),
        };
        for child in tree.children(id) {
            let _ = writeln!(out, "        {} -> {};", id, child);
        }
    }

    out.push_str("}\n");
    out
}

fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
