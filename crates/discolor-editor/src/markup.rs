//! Parsing and rendering the canonical markup vocabulary.
//!
//! Canonical markup contains exactly three constructs:
//! `<span class="ansi-N">…</span>` for styled runs, `<br>` for line
//! breaks, and entity-encoded text. This is the innerHTML analogue of
//! the editable surface after sanitization; [`parse_markup`] builds the
//! node tree from it and [`render_markup`] is the inverse.

use crate::entities::{decode_entities, encode_entities};
use crate::sanitize::RESERVED_PLACEHOLDERS;
use discolor_core::{Node, StyleCode};
use regex::Regex;
use std::sync::LazyLock;

/// Any tag, for splitting markup into tag and text segments.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// An allowed run opener, capturing the style code digits.
static OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^<span class="ansi-([0-9]+)">$"#).unwrap());

/// A line break tag, with or without the self-closing slash.
static BR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<br\s*/?>$").unwrap());

/// Parse canonical markup into a node tree.
///
/// Lenient by design: unrecognized tags are dropped, an unmatched
/// `</span>` is ignored, and runs left open at end of input are closed
/// there. Text content has its entities decoded.
///
/// # Example
///
/// ```
/// use discolor_core::Node;
/// use discolor_editor::parse_markup;
///
/// let tree = parse_markup(r#"Hi <span class="ansi-31">red</span>"#);
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree[0], Node::text("Hi "));
/// ```
pub fn parse_markup(markup: &str) -> Vec<Node> {
    // Stack of open runs: the code plus the siblings collected so far
    // in the enclosing scope.
    let mut open: Vec<(StyleCode, Vec<Node>)> = Vec::new();
    let mut current: Vec<Node> = Vec::new();
    let mut last = 0;

    for m in TAG_RE.find_iter(markup) {
        push_text(&mut current, &markup[last..m.start()]);
        last = m.end();

        let tag = m.as_str();
        if let Some(caps) = OPEN_RE.captures(tag) {
            match caps[1].parse::<u8>().ok().and_then(StyleCode::new) {
                Some(code) => {
                    open.push((code, std::mem::take(&mut current)));
                }
                None => {
                    // Out-of-vocabulary class: drop the wrapper, keep
                    // whatever content follows as plain siblings.
                }
            }
        } else if tag == "</span>" {
            if let Some((code, parent)) = open.pop() {
                let children = std::mem::replace(&mut current, parent);
                current.push(Node::run(code, children));
            }
        } else if BR_RE.is_match(tag) {
            current.push(Node::LineBreak);
        }
        // Any other tag is silently dropped.
    }
    push_text(&mut current, &markup[last..]);

    // Close runs left open at end of input.
    while let Some((code, parent)) = open.pop() {
        let children = std::mem::replace(&mut current, parent);
        current.push(Node::run(code, children));
    }

    current
}

fn push_text(nodes: &mut Vec<Node>, raw: &str) {
    if raw.is_empty() {
        return;
    }
    // Decoded text never carries newlines in the tree (they are
    // LineBreak nodes) and adjacent text leaves are merged, so parsing
    // rendered markup reproduces the tree exactly. Sanitizer
    // placeholder characters are dropped even when a numeric entity
    // tries to smuggle one in.
    for (i, segment) in decode_entities(raw).split('\n').enumerate() {
        if i > 0 {
            nodes.push(Node::LineBreak);
        }
        let segment: String = segment
            .chars()
            .filter(|c| !RESERVED_PLACEHOLDERS.contains(c))
            .collect();
        if segment.is_empty() {
            continue;
        }
        match nodes.last_mut() {
            Some(Node::Text(prev)) => prev.push_str(&segment),
            _ => nodes.push(Node::Text(segment)),
        }
    }
}

/// Render a node tree back into canonical markup.
///
/// Text is entity-encoded; embedded newlines render as `<br>` so the
/// markup string itself stays single-line per text node.
pub fn render_markup(nodes: &[Node]) -> String {
    let mut out = String::new();
    render_into(nodes, &mut out);
    out
}

fn render_into(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(s) => {
                for (i, line) in s.split('\n').enumerate() {
                    if i > 0 {
                        out.push_str("<br>");
                    }
                    out.push_str(&encode_entities(line));
                }
            }
            Node::LineBreak => out.push_str("<br>"),
            Node::Run { code, children } => {
                out.push_str(&format!("<span class=\"ansi-{}\">", code));
                render_into(children, out);
                out.push_str("</span>");
            }
        }
    }
}
