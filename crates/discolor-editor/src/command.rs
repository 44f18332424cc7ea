//! The selection-to-run style command.
//!
//! The host's live selection (startNode/startOffset/endNode/endOffset)
//! is linearized into a half-open character range over the tree's
//! flattened plain text. Applying a style replaces the selected content
//! with a single run wrapping its plain text, then re-sanitizes so the
//! tree stays canonical. This command is the only mutator of the
//! content tree besides direct typing.

use crate::markup::{parse_markup, render_markup};
use crate::sanitize::sanitize_markup;
use discolor_core::{plain_text, text_len, Node, StyleCode};

/// A half-open character range over the tree's flattened plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Start offset, inclusive
    pub start: usize,
    /// End offset, exclusive
    pub end: usize,
}

impl Selection {
    /// Create a selection, swapping a backwards range.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Apply a style code to the selected range of a tree.
///
/// The selected content collapses to its plain text and is rewrapped as
/// `Run(code, [Text(selection)])`; line breaks inside the selection
/// count as one character each and come back as explicit breaks through
/// re-sanitization. An empty or out-of-range selection returns the tree
/// unchanged.
///
/// # Example
///
/// ```
/// use discolor_core::{plain_text, StyleCode, Node};
/// use discolor_editor::{apply_style, Selection};
///
/// let tree = vec![Node::text("Hello World")];
/// let styled = apply_style(&tree, Selection::new(6, 11), StyleCode::new(31).unwrap());
/// assert_eq!(plain_text(&styled), "Hello World");
/// assert!(matches!(styled[1], Node::Run { .. }));
/// ```
pub fn apply_style(tree: &[Node], selection: Selection, code: StyleCode) -> Vec<Node> {
    let total = text_len(tree);
    let start = selection.start.min(total);
    let end = selection.end.min(total);
    if start >= end {
        return tree.to_vec();
    }

    let (before, rest) = split_at(tree, start);
    let (selected, after) = split_at(&rest, end - start);

    let mut out = before;
    out.push(Node::run(code, vec![Node::Text(plain_text(&selected))]));
    out.extend(after);

    // Re-sanitize: canonical markup in, canonical tree out.
    parse_markup(&sanitize_markup(&render_markup(&out)))
}

/// Split a node sequence at a character offset of its flattened text.
///
/// Runs spanning the boundary are split into two runs with the same
/// code; empty halves are dropped.
fn split_at(nodes: &[Node], offset: usize) -> (Vec<Node>, Vec<Node>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut remaining = offset;

    for node in nodes {
        if remaining == 0 {
            right.push(node.clone());
            continue;
        }
        let len = node.text_len();
        if len <= remaining {
            remaining -= len;
            left.push(node.clone());
            continue;
        }
        // The boundary falls inside this node.
        match node {
            Node::Text(s) => {
                let byte = s
                    .char_indices()
                    .nth(remaining)
                    .map(|(i, _)| i)
                    .unwrap_or(s.len());
                left.push(Node::text(&s[..byte]));
                right.push(Node::text(&s[byte..]));
            }
            // A line break is a single character, so the boundary can
            // never fall strictly inside it.
            Node::LineBreak => unreachable!("line break has length 1"),
            Node::Run { code, children } => {
                let (l, r) = split_at(children, remaining);
                if !l.is_empty() {
                    left.push(Node::run(*code, l));
                }
                if !r.is_empty() {
                    right.push(Node::run(*code, r));
                }
            }
        }
        remaining = 0;
    }

    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(c: u8) -> StyleCode {
        StyleCode::new(c).unwrap()
    }

    #[test]
    fn test_empty_selection_is_noop() {
        let tree = vec![Node::text("abc")];
        assert_eq!(apply_style(&tree, Selection::new(1, 1), code(31)), tree);
    }

    #[test]
    fn test_out_of_range_selection_is_noop() {
        let tree = vec![Node::text("abc")];
        assert_eq!(apply_style(&tree, Selection::new(5, 9), code(31)), tree);
    }

    #[test]
    fn test_wrap_middle_of_text() {
        let tree = vec![Node::text("Hello World")];
        let styled = apply_style(&tree, Selection::new(6, 11), code(31));
        assert_eq!(
            styled,
            vec![
                Node::text("Hello "),
                Node::run(code(31), vec![Node::text("World")]),
            ]
        );
    }

    #[test]
    fn test_wrap_across_existing_run_flattens_selection() {
        // Selecting across a styled boundary replaces the selected
        // content with one flat run of its plain text.
        let tree = vec![
            Node::text("ab"),
            Node::run(code(34), vec![Node::text("cd")]),
            Node::text("ef"),
        ];
        let styled = apply_style(&tree, Selection::new(1, 5), code(45));
        assert_eq!(
            styled,
            vec![
                Node::text("a"),
                Node::run(code(45), vec![Node::text("bcde")]),
                Node::text("f"),
            ]
        );
    }

    #[test]
    fn test_backwards_selection_normalized() {
        let tree = vec![Node::text("abcd")];
        let styled = apply_style(&tree, Selection::new(3, 1), code(31));
        assert_eq!(
            styled,
            vec![
                Node::text("a"),
                Node::run(code(31), vec![Node::text("bc")]),
                Node::text("d"),
            ]
        );
    }

    #[test]
    fn test_selection_spanning_linebreak() {
        let tree = vec![Node::text("ab"), Node::LineBreak, Node::text("cd")];
        let styled = apply_style(&tree, Selection::new(1, 4), code(31));
        assert_eq!(
            styled,
            vec![
                Node::text("a"),
                Node::run(
                    code(31),
                    vec![Node::text("b"), Node::LineBreak, Node::text("c")]
                ),
                Node::text("d"),
            ]
        );
    }

    #[test]
    fn test_split_at_run_boundary_keeps_runs_whole() {
        let tree = vec![
            Node::run(code(31), vec![Node::text("ab")]),
            Node::run(code(34), vec![Node::text("cd")]),
        ];
        let (l, r) = split_at(&tree, 2);
        assert_eq!(l, vec![Node::run(code(31), vec![Node::text("ab")])]);
        assert_eq!(r, vec![Node::run(code(34), vec![Node::text("cd")])]);
    }

    #[test]
    fn test_split_inside_nested_run() {
        let tree = vec![Node::run(
            code(45),
            vec![Node::run(code(37), vec![Node::text("abcd")])],
        )];
        let (l, r) = split_at(&tree, 2);
        assert_eq!(
            l,
            vec![Node::run(
                code(45),
                vec![Node::run(code(37), vec![Node::text("ab")])]
            )]
        );
        assert_eq!(
            r,
            vec![Node::run(
                code(45),
                vec![Node::run(code(37), vec![Node::text("cd")])]
            )]
        );
    }

    #[test]
    fn test_whole_tree_selection() {
        let tree = vec![Node::text("xy")];
        let styled = apply_style(&tree, Selection::new(0, 2), code(40));
        assert_eq!(styled, vec![Node::run(code(40), vec![Node::text("xy")])]);
    }
}
