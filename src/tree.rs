//! Arena-backed ordered tree built from the parsed document
//!
//! Nodes live in a flat `Vec` and refer to each other through [`NodeId`]
//! handles. The arena slot owns the node; `parent` is only a handle used for
//! traversal, so the structure can never contain a cycle.

use std::fmt::Write as _;

use crate::layout::TreeLayout;
use crate::parser::ast::{Document, Label, NodeDecl, Spanned};
use crate::parser::properties::{parse_properties, Properties};

/// Label shown for nodes whose label is empty
pub const EMPTY_LABEL: &str = "<empty>";

/// Handle of a node inside a [`Tree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labeled tree node
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Display text
    pub label: String,
    /// Raw-string payload this node was declared with, if any
    pub raw: Option<String>,
    /// Properties parsed from the raw-string payload
    pub properties: Properties,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            label: if label.is_empty() {
                EMPTY_LABEL.to_string()
            } else {
                label
            },
            raw: None,
            properties: Properties::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    fn from_label(label: &Label) -> Self {
        match label {
            Label::Word(word) => Node::new(word.as_str()),
            Label::Raw(payload) => {
                let properties = parse_properties(payload);
                let mut node = Node::new(properties.get("label").cloned().unwrap_or_default());
                node.raw = Some(payload.clone());
                node.properties = properties;
                node
            }
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Value of a property, e.g. `color`
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(|s| s.as_str())
    }
}

/// An ordered rooted tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Tree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a parsed document
    pub fn from_document(doc: &Document) -> Self {
        let mut tree = Tree::new();

        // Ids are handed out in pre-order
        let mut stack: Vec<(&Spanned<NodeDecl>, Option<NodeId>)> = vec![(&doc.root, None)];
        while let Some((decl, parent)) = stack.pop() {
            let id = tree.add_node(Node::from_label(&decl.node.label.node), parent);
            if parent.is_none() {
                tree.root = Some(id);
            }
            stack.extend(decl.node.children.iter().rev().map(|c| (c, Some(id))));
        }

        tree
    }

    /// Set a fresh root. Fails if the tree already has one.
    pub fn add_root(&mut self, label: impl Into<String>) -> Option<NodeId> {
        if self.root.is_some() {
            return None;
        }
        let id = self.add_node(Node::new(label), None);
        self.root = Some(id);
        Some(id)
    }

    /// Append a child to the end of `parent`'s child list
    pub fn add_child(&mut self, parent: NodeId, label: impl Into<String>) -> NodeId {
        self.add_node(Node::new(label), Some(parent))
    }

    fn add_node(&mut self, mut node: Node, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = parent;
        self.nodes.push(node);
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges between `id` and the root
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Node ids in pre-order (parent before children, children left to right)
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        order
    }

    /// Indented listing of the tree, one `label[x=.., y=..]` line per node
    pub fn dump(&self, layout: Option<&TreeLayout>) -> String {
        let mut out = String::new();
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|r| (r, 0)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            let (x, y) = layout
                .map(|l| {
                    let p = l.position(id);
                    (p.x, p.y)
                })
                .unwrap_or((0.0, 0.0));
            let _ = writeln!(
                out,
                "{}{}[x={:.2}, y={:.2}]",
                "  ".repeat(depth),
                self.node(id).label,
                x,
                y
            );
            stack.extend(self.children(id).iter().rev().map(|&c| (c, depth + 1)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    fn labels(tree: &Tree, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|&id| tree.node(id).label.clone()).collect()
    }

    #[test]
    fn test_build_by_hand() {
        let mut tree = Tree::new();
        let a = tree.add_root("a").unwrap();
        let b = tree.add_child(a, "b");
        let c = tree.add_child(a, "c");
        let d = tree.add_child(b, "d");

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.root(), Some(a));
        assert_eq!(tree.children(a), &[b, c]);
        assert_eq!(tree.parent(d), Some(b));
        assert_eq!(tree.depth(d), 2);
        assert_eq!(tree.depth(a), 0);
        assert!(tree.node(c).is_leaf());
    }

    #[test]
    fn test_second_root_rejected() {
        let mut tree = Tree::new();
        assert!(tree.add_root("a").is_some());
        assert!(tree.add_root("b").is_none());
    }

    #[test]
    fn test_empty_label_placeholder() {
        let mut tree = Tree::new();
        let a = tree.add_root("").unwrap();
        assert_eq!(tree.node(a).label, EMPTY_LABEL);
    }

    #[test]
    fn test_from_document_preserves_order() {
        let doc = parse("[S [NP a] [VP [V b] c] d]").unwrap();
        let tree = Tree::from_document(&doc);
        assert_eq!(tree.len(), 8);

        let root = tree.root().unwrap();
        assert_eq!(labels(&tree, tree.children(root)), vec!["NP", "VP", "d"]);
        let vp = tree.children(root)[1];
        assert_eq!(labels(&tree, tree.children(vp)), vec!["V", "c"]);
        assert_eq!(
            labels(&tree, &tree.preorder()),
            vec!["S", "NP", "a", "VP", "V", "b", "c", "d"]
        );
        assert_eq!(tree.preorder(), (0..8).map(NodeId).collect::<Vec<_>>());
    }

    #[test]
    fn test_raw_label_properties() {
        let doc = parse(r#"[S R"(label = "a node" color = red)" R"(color = blue)"]"#).unwrap();
        let tree = Tree::from_document(&doc);
        let root = tree.root().unwrap();
        let first = tree.node(tree.children(root)[0]);
        let second = tree.node(tree.children(root)[1]);

        assert_eq!(first.label, "a node");
        assert_eq!(first.property("color"), Some("red"));
        assert_eq!(first.raw.as_deref(), Some(r#"label = "a node" color = red"#));
        assert_eq!(second.label, EMPTY_LABEL);
        assert_eq!(second.property("color"), Some("blue"));
    }

    #[test]
    fn test_deep_chain_traversal() {
        let depth = 20_000;
        let mut tree = Tree::new();
        let mut parent = tree.add_root("n").unwrap();
        for _ in 0..depth {
            parent = tree.add_child(parent, "n");
        }
        assert_eq!(tree.preorder().len(), depth + 1);
        assert_eq!(tree.depth(parent), depth);
    }

    #[test]
    fn test_deeply_nested_document() {
        let depth = 1_000;
        let source = format!("{}x{}", "[n ".repeat(depth), "]".repeat(depth));

        // The grammar itself recurses, so parse on a roomy stack
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024 * 1024)
            .spawn(move || {
                let doc = parse(&source).unwrap();
                Tree::from_document(&doc)
            })
            .unwrap();
        let tree = handle.join().unwrap();

        assert_eq!(tree.len(), depth + 1);
        let order = tree.preorder();
        assert_eq!(order, (0..=depth).map(NodeId).collect::<Vec<_>>());
        let leaf = *order.last().unwrap();
        assert_eq!(tree.node(leaf).label, "x");
        assert_eq!(tree.depth(leaf), depth);
    }

    #[test]
    fn test_dump_without_layout() {
        let doc = parse("[a [b c] d]").unwrap();
        let tree = Tree::from_document(&doc);
        assert_eq!(
            tree.dump(None),
            "a[x=0.00, y=0.00]\n  b[x=0.00, y=0.00]\n    c[x=0.00, y=0.00]\n  d[x=0.00, y=0.00]\n"
        );
    }
}
