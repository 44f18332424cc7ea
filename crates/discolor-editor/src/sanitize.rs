//! Edit-time markup sanitization.
//!
//! After every edit the surface's raw markup may contain anything the
//! host's rich-edit machinery introduced: pasted formatting, wrapper
//! divs, attributes. This pass restricts the vocabulary to exactly
//! `{text, <br>, <span class="ansi-N">}` using a protect/strip/restore
//! scheme: the allowed constructs are first encoded as private-use
//! placeholder characters, every remaining tag is stripped blindly, and
//! the placeholders are decoded back. Naive stripping alone would also
//! destroy the allowed style runs, which is the whole reason for the
//! two-phase approach. A final parse/render round trip canonicalizes
//! the result (balances runs, merges adjacent text).

use crate::caret::{restore_caret, CaretHint, CaretPos};
use crate::markup::{parse_markup, render_markup};
use discolor_core::{Node, StyleCode};
use regex::{Captures, Regex};
use std::sync::LazyLock;

// Placeholder characters, from the Unicode private use area so no
// legitimate markup collides with them.
const OPEN_START: char = '\u{e000}';
const OPEN_END: char = '\u{e001}';
const CLOSE_MARK: char = '\u{e002}';
const BREAK_MARK: char = '\u{e003}';

/// The character range reserved for placeholders. Content can never
/// carry these, not even via numeric entities; the parser drops them.
pub(crate) const RESERVED_PLACEHOLDERS: std::ops::RangeInclusive<char> = OPEN_START..=BREAK_MARK;

/// An allowed run opener anywhere in the input.
static SPAN_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<span class="ansi-([0-9]+)">"#).unwrap());

/// A `</div><div>` boundary, the way contenteditable wraps lines.
static DIV_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</div>\s*<div[^>]*>").unwrap());

/// A line break tag.
static BR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<br\s*/?>").unwrap());

/// Any remaining tag, stripped indiscriminately.
static ANY_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// A protected run opener awaiting restoration.
static OPEN_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x{e000}([0-9]+)\x{e001}").unwrap());

/// The protect/strip/restore passes, before canonicalization.
fn scrub(raw: &str) -> String {
    // Forgery guard: the input must not be able to smuggle placeholder
    // characters past the strip phase.
    let mut s: String = raw
        .chars()
        .filter(|c| !RESERVED_PLACEHOLDERS.contains(c))
        .collect();

    // Protect: encode the allowed constructs as placeholders.
    s = SPAN_OPEN_RE
        .replace_all(&s, |caps: &Captures| {
            match caps[1].parse::<u8>().ok().and_then(StyleCode::new) {
                Some(code) => format!("{}{}{}", OPEN_START, code, OPEN_END),
                // Out-of-vocabulary class: leave the tag for the strip
                // phase, keeping only its content.
                None => caps[0].to_string(),
            }
        })
        .into_owned();
    s = s.replace("</span>", &CLOSE_MARK.to_string());
    s = DIV_BOUNDARY_RE
        .replace_all(&s, BREAK_MARK.to_string())
        .into_owned();
    s = BR_RE.replace_all(&s, BREAK_MARK.to_string()).into_owned();

    // Strip: everything still shaped like a tag goes.
    s = ANY_TAG_RE.replace_all(&s, "").into_owned();

    // Restore: decode the placeholders back into real markup.
    s = OPEN_TOKEN_RE
        .replace_all(&s, r#"<span class="ansi-$1">"#)
        .into_owned();
    s = s.replace(CLOSE_MARK, "</span>");
    s = s.replace(BREAK_MARK, "<br>");
    s
}

/// Sanitize raw markup down to the allowed vocabulary.
///
/// Idempotent: feeding the output back in returns it unchanged.
///
/// # Example
///
/// ```
/// use discolor_editor::sanitize_markup;
///
/// let raw = r#"<b>Hi</b> <span class="ansi-31">x</span>"#;
/// assert_eq!(sanitize_markup(raw), r#"Hi <span class="ansi-31">x</span>"#);
/// ```
pub fn sanitize_markup(raw: &str) -> String {
    render_markup(&parse_markup(&scrub(raw)))
}

/// Sanitize raw markup into a node tree and restore the caret.
///
/// The returned caret is best-effort per [`restore_caret`]; `None`
/// means the host's default caret placement applies.
pub fn sanitize(raw: &str, caret: Option<&CaretHint>) -> (Vec<Node>, Option<CaretPos>) {
    let tree = parse_markup(&scrub(raw));
    let caret = caret.and_then(|hint| restore_caret(&tree, hint));
    (tree, caret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use discolor_core::plain_text;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(sanitize_markup("hello world"), "hello world");
    }

    #[test]
    fn test_allowed_run_survives() {
        let raw = r#"<span class="ansi-31">x</span>"#;
        assert_eq!(sanitize_markup(raw), raw);
    }

    #[test]
    fn test_disallowed_tags_stripped_content_kept() {
        let raw = r#"<b>bold</b> and <i data-x="1">italic</i>"#;
        assert_eq!(sanitize_markup(raw), "bold and italic");
    }

    #[test]
    fn test_span_with_extra_attributes_stripped() {
        // Only the exact allowed opener is protected; a span with other
        // attributes is arbitrary markup.
        let raw = r#"<span style="color:red" class="ansi-31">x</span>"#;
        assert_eq!(sanitize_markup(raw), "x");
    }

    #[test]
    fn test_out_of_vocabulary_class_stripped() {
        let raw = r#"<span class="ansi-99">x</span>"#;
        assert_eq!(sanitize_markup(raw), "x");
    }

    #[test]
    fn test_br_normalized() {
        assert_eq!(sanitize_markup("a<br/>b<br >c"), "a<br>b<br>c");
        assert_eq!(sanitize_markup("a<br />b"), "a<br>b");
    }

    #[test]
    fn test_div_boundary_becomes_break() {
        let raw = r#"<div>line one</div><div>line two</div>"#;
        assert_eq!(sanitize_markup(raw), "line one<br>line two");
    }

    #[test]
    fn test_unmatched_close_dropped() {
        assert_eq!(sanitize_markup("a</span>b"), "ab");
    }

    #[test]
    fn test_unclosed_run_balanced() {
        assert_eq!(
            sanitize_markup(r#"a<span class="ansi-31">b"#),
            r#"a<span class="ansi-31">b</span>"#
        );
    }

    #[test]
    fn test_placeholder_forgery_removed() {
        let raw = "a\u{e000}31\u{e001}b\u{e002}c";
        assert_eq!(sanitize_markup(raw), "a31bc");
    }

    #[test]
    fn test_placeholder_entity_smuggling_removed() {
        let once = sanitize_markup("a&#xE000;31&#xE001;b");
        assert_eq!(once, "a31b");
        assert_eq!(sanitize_markup(&once), once);
    }

    #[test]
    fn test_idempotent_on_sanitized_output() {
        let raw = r#"<p>Hi <span class="ansi-45"><span class="ansi-37">there</span></span><br><script>x</script></p>"#;
        let once = sanitize_markup(raw);
        assert_eq!(sanitize_markup(&once), once);
    }

    #[test]
    fn test_sanitize_builds_tree() {
        let (tree, caret) = sanitize(r#"Hi <b><span class="ansi-31">red</span></b>"#, None);
        assert_eq!(plain_text(&tree), "Hi red");
        assert!(caret.is_none());
        assert!(matches!(tree[1], Node::Run { .. }));
    }

    #[test]
    fn test_nested_runs_preserved_verbatim() {
        let raw = r#"<span class="ansi-45"><span class="ansi-37">y</span></span>"#;
        assert_eq!(sanitize_markup(raw), raw);
    }
}
