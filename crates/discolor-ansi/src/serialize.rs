//! Tree-to-ANSI serialization.
//!
//! A depth-first walk over the content tree with an explicit stack of
//! accumulated style states. Entering a run pushes the derived state and
//! emits its escape sequence; leaving a run emits a blanket reset, pops,
//! and re-emits whatever the enclosing state still carries. The blanket
//! reset clears ALL Discord-side styling, including styling inherited
//! from an ancestor run, so the resume step is what keeps nested runs
//! rendering correctly after a child closes.

use crate::codes::{sgr, FENCE_CLOSE, FENCE_OPEN, RESET};
use discolor_core::{Node, StyleAxis, StyleState, UNSET};

/// Serialize a content tree into Discord's ANSI escape-coded payload.
///
/// Text leaves are emitted verbatim (Discord ANSI blocks need no
/// character escaping), line breaks become `\n`, and runs wrap their
/// children in escape sequences. Traversal is strict document order;
/// redundant adjacent sequences are tolerated, not collapsed.
///
/// The caller wraps the result in fence markers via [`fenced`].
///
/// # Example
///
/// ```
/// use discolor_ansi::serialize;
/// use discolor_core::{Node, StyleCode};
///
/// let tree = vec![
///     Node::text("Hello "),
///     Node::run(StyleCode::new(31).unwrap(), vec![Node::text("World")]),
/// ];
/// assert_eq!(serialize(&tree), "Hello \x1b[2;31mWorld\x1b[0m");
/// ```
pub fn serialize(tree: &[Node]) -> String {
    let mut out = String::new();
    let mut stack = vec![StyleState::unset()];
    walk(tree, &mut stack, &mut out);
    out
}

/// Wrap a serialized payload in the ` ```ansi ` fence markers.
pub fn fenced(payload: &str) -> String {
    format!("{}{}{}", FENCE_OPEN, payload, FENCE_CLOSE)
}

fn walk(nodes: &[Node], stack: &mut Vec<StyleState>, out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(s) => out.push_str(s),
            Node::LineBreak => out.push('\n'),
            Node::Run { code, children } => {
                let top = *stack.last().unwrap_or(&StyleState::unset());
                let state = top.apply(*code);
                stack.push(state);

                if code.is_reset() {
                    // A reset run clears every active style for its
                    // children; there is no single-axis sequence to emit.
                    out.push_str(RESET);
                } else {
                    // The emitted color channel matches the axis this
                    // run just set; an unset channel is omitted, never
                    // emitted as the sentinel.
                    let color = match code.axis() {
                        StyleAxis::Background => state.bg,
                        _ => state.fg,
                    };
                    let color = (color != UNSET).then_some(color);
                    out.push_str(&sgr(state.text, color));
                }

                walk(children, stack, out);

                out.push_str(RESET);
                stack.pop();

                // Resume the enclosing state the blanket reset wiped out.
                // The initial fully-unset state never reaches here with
                // anything to re-emit.
                let top = *stack.last().unwrap_or(&StyleState::unset());
                if top.has_fg() {
                    out.push_str(&sgr(top.text, Some(top.fg)));
                }
                if top.has_bg() {
                    out.push_str(&sgr(top.text, Some(top.bg)));
                }
            }
        }
    }
}
