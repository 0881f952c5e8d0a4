//! Syntax tree types for bracket-notated trees

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// A node label as written in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// Plain word: `NP`, `std::vector`
    Word(String),
    /// Raw string payload: the text inside `R"(...)"`
    Raw(String),
}

impl Label {
    /// The source text of the label (raw payload for raw strings)
    pub fn as_str(&self) -> &str {
        match self {
            Label::Word(s) | Label::Raw(s) => s,
        }
    }
}

/// One bracketed node, or a bare leaf label inside a node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDecl {
    pub label: Spanned<Label>,
    pub children: Vec<Spanned<NodeDecl>>,
}

impl NodeDecl {
    pub fn leaf(label: Spanned<Label>) -> Self {
        Self {
            label,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Root AST node - a complete tree document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: Spanned<NodeDecl>,
}
