//! ANSI escape code constants and fence markers.
//!
//! Discord only understands plain SGR sequences of the form
//! `ESC[<style>;<color>m` (plus the bare reset `ESC[0m`) inside an
//! ` ```ansi ` fenced code block. Codes are decimal with no leading
//! zeros.

/// Control Sequence Introducer: the two-character escape prefix.
pub const CSI: &str = "\x1b[";

/// Reset all attributes (colors and formatting).
pub const RESET: &str = "\x1b[0m";

/// Opening fence for a Discord ANSI code block.
pub const FENCE_OPEN: &str = "```ansi\n";

/// Closing fence for a Discord ANSI code block.
pub const FENCE_CLOSE: &str = "\n```";

/// Build an SGR escape sequence for a style digit and optional color.
///
/// With a color this is `ESC[<style>;<color>m`; without one it is
/// `ESC[<style>m`. The color slot must never carry the unset sentinel;
/// callers pass `None` for an unset color axis.
///
/// # Example
///
/// ```
/// use discolor_ansi::codes::sgr;
///
/// assert_eq!(sgr(2, Some(31)), "\x1b[2;31m");
/// assert_eq!(sgr(1, None), "\x1b[1m");
/// ```
pub fn sgr(style: u8, color: Option<u8>) -> String {
    match color {
        Some(color) => format!("{}{};{}m", CSI, style, color),
        None => format!("{}{}m", CSI, style),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sgr_with_color() {
        assert_eq!(sgr(2, Some(45)), "\x1b[2;45m");
        assert_eq!(sgr(1, Some(31)), "\x1b[1;31m");
    }

    #[test]
    fn test_sgr_without_color() {
        assert_eq!(sgr(4, None), "\x1b[4m");
    }

    #[test]
    fn test_reset_matches_sgr_zero() {
        assert_eq!(RESET, sgr(0, None));
    }
}
