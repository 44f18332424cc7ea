//! HTML entity decoding and encoding
//!
//! The editing surface hands over markup the way a browser serializes
//! it, so text content arrives with `&nbsp;`, `&amp;`, and friends.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Named entities a contenteditable surface actually emits
static HTML_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("amp", "&");
    m.insert("lt", "<");
    m.insert("gt", ">");
    m.insert("quot", "\"");
    m.insert("apos", "'");
    m.insert("nbsp", "\u{00a0}");
    m
});

/// Decode HTML entities in a string.
///
/// Handles the named entities above plus numeric forms like `&#169;`
/// and `&#x00A9;`. Anything unrecognized is left verbatim.
pub fn decode_entities(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        result.push_str(&rest[..start]);
        let tail = &rest[start..];

        // An entity is `&` + up to ~8 chars + `;`
        match tail[1..].find(';').filter(|&end| end <= 8) {
            Some(end) => {
                let name = &tail[1..end + 1];
                if let Some(replacement) = HTML_ENTITIES.get(name) {
                    result.push_str(replacement);
                } else if let Some(c) = decode_numeric(name) {
                    result.push(c);
                } else {
                    result.push_str(&tail[..end + 2]);
                }
                rest = &tail[end + 2..];
            }
            None => {
                result.push('&');
                rest = &tail[1..];
            }
        }
    }

    result.push_str(rest);
    result
}

/// Decode a numeric entity body: `#169` or `#x00A9`.
fn decode_numeric(name: &str) -> Option<char> {
    let digits = name.strip_prefix('#')?;
    let codepoint = if let Some(hex) = digits.strip_prefix(['x', 'X']) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse::<u32>().ok()?
    };
    char::from_u32(codepoint)
}

/// Encode text content for embedding in markup.
///
/// Escapes the characters that would otherwise read as markup, and
/// writes non-breaking spaces back as `&nbsp;`.
pub fn encode_entities(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\u{00a0}' => result.push_str("&nbsp;"),
            _ => result.push(c),
        }
    }
    result
}
