//! OSC 52 clipboard integration.
//!
//! Writes the fenced block straight into the terminal's clipboard via
//! the OSC 52 escape, so the output can be pasted into Discord without
//! manual selection. This only works when stdout is a real terminal
//! that understands OSC 52.

use discolor_core::{DiscolorError, Result};
use std::io::{self, IsTerminal, Write};

/// Maximum payload size for an OSC 52 write.
///
/// Terminals cap the sequence length; oversized writes would be
/// silently truncated or corrupt the terminal state.
const MAX_CLIPBOARD_SIZE: usize = 74_994;

/// Check if we're running in an interactive terminal.
pub fn is_tty() -> bool {
    io::stdout().is_terminal()
}

/// Copy text to the clipboard using OSC 52.
///
/// # Arguments
/// * `text` - The text to copy
/// * `writer` - Output destination (normally stdout)
///
/// # Errors
///
/// Returns a clipboard error when the payload exceeds the terminal's
/// size limit; IO errors propagate from the write itself.
pub fn copy_to_clipboard<W: Write>(text: &str, writer: &mut W) -> Result<()> {
    use base64::{engine::general_purpose::STANDARD, Engine};

    if text.len() > MAX_CLIPBOARD_SIZE {
        return Err(DiscolorError::Clipboard(format!(
            "payload of {} bytes exceeds the {} byte OSC 52 limit",
            text.len(),
            MAX_CLIPBOARD_SIZE
        )));
    }

    let encoded = STANDARD.encode(text.as_bytes());

    // OSC 52: \033]52;c;<base64>\a
    // The 'c' means clipboard (as opposed to 'p' for primary selection)
    write!(writer, "\x1b]52;c;{}\x07", encoded)?;
    writer.flush()?;
    Ok(())
}
