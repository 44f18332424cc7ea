//! Caret restoration across a sanitization rewrite.
//!
//! Sanitization rebuilds the tree, so the host's node references from
//! before the edit are gone. The caret hint records where the caret was
//! in host terms; restoration relocates it in the rewritten tree,
//! best-effort.

use discolor_core::{plain_text, Node, StyleCode};

/// Where the caret was before the edit, in pre-rewrite terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaretHint {
    /// Caret was directly in the root editable area, unstyled
    Root,

    /// Caret was inside a styled run
    InRun {
        /// The run's style code
        code: StyleCode,
        /// The run's full plain-text content
        text: String,
        /// Character offset of the caret within that text
        offset: usize,
    },
}

/// A caret location in the sanitized tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaretPos {
    /// Child indices from the root down to the target node
    pub path: Vec<usize>,
    /// Character offset within the target node's text
    pub offset: usize,
}

impl CaretPos {
    /// The start of the tree.
    pub fn start() -> Self {
        Self {
            path: Vec::new(),
            offset: 0,
        }
    }
}

/// Restore the caret in a rewritten tree, best-effort.
///
/// If the caret was inside a styled run, the first run in document
/// order with the same style code and the same plain-text content wins;
/// under ambiguous duplicate content this may pick a different run than
/// the one the user was in (documented limitation). A root caret goes
/// to the start of the tree. No match restores nothing, leaving the
/// host's default behavior in charge.
pub fn restore_caret(tree: &[Node], hint: &CaretHint) -> Option<CaretPos> {
    match hint {
        CaretHint::Root => Some(CaretPos::start()),
        CaretHint::InRun { code, text, offset } => {
            let mut path = Vec::new();
            find_run(tree, *code, text, &mut path).map(|path| CaretPos {
                offset: (*offset).min(text.chars().count()),
                path,
            })
        }
    }
}

/// Depth-first search for the first matching run, in document order.
fn find_run(
    nodes: &[Node],
    code: StyleCode,
    text: &str,
    path: &mut Vec<usize>,
) -> Option<Vec<usize>> {
    for (i, node) in nodes.iter().enumerate() {
        if let Node::Run {
            code: run_code,
            children,
        } = node
        {
            path.push(i);
            if *run_code == code && plain_text(children) == text {
                return Some(path.clone());
            }
            if let Some(found) = find_run(children, code, text, path) {
                return Some(found);
            }
            path.pop();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(c: u8) -> StyleCode {
        StyleCode::new(c).unwrap()
    }

    #[test]
    fn test_root_hint_restores_to_start() {
        let tree = vec![Node::text("abc")];
        let pos = restore_caret(&tree, &CaretHint::Root).unwrap();
        assert_eq!(pos, CaretPos::start());
    }

    #[test]
    fn test_run_hint_finds_matching_run() {
        let tree = vec![
            Node::text("Hello "),
            Node::run(code(31), vec![Node::text("World")]),
        ];
        let hint = CaretHint::InRun {
            code: code(31),
            text: "World".to_string(),
            offset: 3,
        };
        let pos = restore_caret(&tree, &hint).unwrap();
        assert_eq!(pos.path, vec![1]);
        assert_eq!(pos.offset, 3);
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let tree = vec![
            Node::run(code(31), vec![Node::text("x")]),
            Node::run(code(31), vec![Node::text("x")]),
        ];
        let hint = CaretHint::InRun {
            code: code(31),
            text: "x".to_string(),
            offset: 1,
        };
        let pos = restore_caret(&tree, &hint).unwrap();
        assert_eq!(pos.path, vec![0]);
    }

    #[test]
    fn test_nested_run_found_by_path() {
        let tree = vec![Node::run(
            code(45),
            vec![Node::text("a"), Node::run(code(37), vec![Node::text("b")])],
        )];
        let hint = CaretHint::InRun {
            code: code(37),
            text: "b".to_string(),
            offset: 0,
        };
        let pos = restore_caret(&tree, &hint).unwrap();
        assert_eq!(pos.path, vec![0, 1]);
    }

    #[test]
    fn test_wrong_code_is_no_match() {
        let tree = vec![Node::run(code(31), vec![Node::text("x")])];
        let hint = CaretHint::InRun {
            code: code(34),
            text: "x".to_string(),
            offset: 0,
        };
        assert!(restore_caret(&tree, &hint).is_none());
    }

    #[test]
    fn test_offset_clamped_to_text_length() {
        let tree = vec![Node::run(code(31), vec![Node::text("ab")])];
        let hint = CaretHint::InRun {
            code: code(31),
            text: "ab".to_string(),
            offset: 10,
        };
        let pos = restore_caret(&tree, &hint).unwrap();
        assert_eq!(pos.offset, 2);
    }
}
