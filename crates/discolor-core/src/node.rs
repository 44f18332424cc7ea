//! The annotated content tree.
//!
//! The editable surface's content is a tree of three node kinds: plain
//! text leaves, explicit line breaks, and styled runs that own an ordered
//! sequence of children. Runs nest arbitrarily (a background run holding
//! a foreground run, and so on); each run overrides exactly one style
//! axis.

use crate::style::StyleCode;
use serde::{Deserialize, Serialize};

/// A node in the annotated content tree.
///
/// Children are owned exclusively by their parent; no node is shared
/// between two parents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// Literal characters, no styling
    Text(String),

    /// An explicit newline
    LineBreak,

    /// A styled span carrying one style override
    Run {
        /// The single style code this run applies
        code: StyleCode,
        /// Ordered children, owned by this run
        children: Vec<Node>,
    },
}

impl Node {
    /// Create a text leaf.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Create a styled run.
    pub fn run(code: StyleCode, children: Vec<Node>) -> Self {
        Node::Run { code, children }
    }

    /// Length of this node's flattened text in characters.
    ///
    /// A line break counts as one character (the newline it flattens to).
    pub fn text_len(&self) -> usize {
        match self {
            Node::Text(s) => s.chars().count(),
            Node::LineBreak => 1,
            Node::Run { children, .. } => children.iter().map(Node::text_len).sum(),
        }
    }
}

/// Flatten a sequence of nodes into plain text.
///
/// Styling is discarded; line breaks become `\n`.
///
/// # Example
///
/// ```
/// use discolor_core::{plain_text, Node, StyleCode};
///
/// let tree = vec![
///     Node::text("Hello "),
///     Node::run(StyleCode::new(31).unwrap(), vec![Node::text("World")]),
/// ];
/// assert_eq!(plain_text(&tree), "Hello World");
/// ```
pub fn plain_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    collect_text(nodes, &mut out);
    out
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(s) => out.push_str(s),
            Node::LineBreak => out.push('\n'),
            Node::Run { children, .. } => collect_text(children, out),
        }
    }
}

/// Total character length of a node sequence's flattened text.
pub fn text_len(nodes: &[Node]) -> usize {
    nodes.iter().map(Node::text_len).sum()
}
