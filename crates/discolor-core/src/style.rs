//! The style model: codes, axes, and accumulated style state.
//!
//! Discord's ANSI code blocks recognize a small closed vocabulary of SGR
//! codes: reset (0), bold (1), underline (4), eight foreground colors
//! (30-37), and eight background colors (40-47). A styled run overrides
//! exactly one of the three style axes; the other two are inherited from
//! the enclosing run.

use serde::{Deserialize, Serialize};

/// Sentinel value meaning "no override on this axis".
///
/// This is never a valid color code; it may appear as the text-style
/// digit of an emitted escape sequence but never as a color.
pub const UNSET: u8 = 2;

/// The three independent style dimensions a run can override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleAxis {
    /// Text style: reset, bold, or underline (codes below 30)
    Text,
    /// Foreground color (codes 30-37)
    Foreground,
    /// Background color (codes 40-47)
    Background,
}

/// A validated style code from the closed Discord ANSI vocabulary.
///
/// Construction goes through [`StyleCode::new`], which rejects every
/// integer outside the enumerated set, so downstream code never has to
/// re-check ranges.
///
/// # Example
///
/// ```
/// use discolor_core::{StyleAxis, StyleCode};
///
/// let red = StyleCode::new(31).unwrap();
/// assert_eq!(red.axis(), StyleAxis::Foreground);
/// assert!(StyleCode::new(99).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StyleCode(u8);

impl TryFrom<u8> for StyleCode {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        StyleCode::new(code).ok_or_else(|| format!("style code {} is not recognized", code))
    }
}

impl From<StyleCode> for u8 {
    fn from(code: StyleCode) -> u8 {
        code.0
    }
}

impl StyleCode {
    /// Reset-all: clears every active style.
    pub const RESET: StyleCode = StyleCode(0);

    /// Bold text style.
    pub const BOLD: StyleCode = StyleCode(1);

    /// Underline text style.
    pub const UNDERLINE: StyleCode = StyleCode(4);

    /// Validate an integer against the closed vocabulary.
    ///
    /// Returns `None` for anything outside
    /// `{0, 1, 4, 30..=37, 40..=47}`.
    pub fn new(code: u8) -> Option<Self> {
        match code {
            0 | 1 | 4 | 30..=37 | 40..=47 => Some(Self(code)),
            _ => None,
        }
    }

    /// The raw numeric code.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Which style axis this code overrides.
    pub fn axis(self) -> StyleAxis {
        match self.0 {
            c if c >= 40 => StyleAxis::Background,
            c if c >= 30 => StyleAxis::Foreground,
            _ => StyleAxis::Text,
        }
    }

    /// Whether this is the reset-all code.
    pub fn is_reset(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for StyleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The accumulated style at one point of a serialization walk.
///
/// Each axis is either [`UNSET`] or a concrete code from that axis's
/// range. Applying a code copies the state and overwrites exactly one
/// axis; applying reset clears all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleState {
    /// Foreground color code, or [`UNSET`]
    pub fg: u8,
    /// Background color code, or [`UNSET`]
    pub bg: u8,
    /// Text style code, or [`UNSET`]
    pub text: u8,
}

impl Default for StyleState {
    fn default() -> Self {
        Self::unset()
    }
}

impl StyleState {
    /// The fully-unset state: no override on any axis.
    pub fn unset() -> Self {
        Self {
            fg: UNSET,
            bg: UNSET,
            text: UNSET,
        }
    }

    /// Whether no axis carries an override.
    pub fn is_unset(&self) -> bool {
        self.fg == UNSET && self.bg == UNSET && self.text == UNSET
    }

    /// Whether a foreground color is active.
    pub fn has_fg(&self) -> bool {
        self.fg != UNSET
    }

    /// Whether a background color is active.
    pub fn has_bg(&self) -> bool {
        self.bg != UNSET
    }

    /// Derive the state for a run nested under this one.
    ///
    /// Overwrites the axis the code belongs to and inherits the other
    /// two unchanged. Reset clears the inherited style entirely rather
    /// than updating one axis.
    pub fn apply(self, code: StyleCode) -> StyleState {
        if code.is_reset() {
            return Self::unset();
        }
        let mut next = self;
        match code.axis() {
            StyleAxis::Text => next.text = code.get(),
            StyleAxis::Foreground => next.fg = code.get(),
            StyleAxis::Background => next.bg = code.get(),
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_vocabulary() {
        for code in [0u8, 1, 4, 30, 31, 37, 40, 45, 47] {
            assert!(StyleCode::new(code).is_some(), "code {} rejected", code);
        }
    }

    #[test]
    fn test_new_rejects_everything_else() {
        for code in [2u8, 3, 5, 29, 38, 39, 48, 90, 255] {
            assert!(StyleCode::new(code).is_none(), "code {} accepted", code);
        }
    }

    #[test]
    fn test_axis_classification() {
        assert_eq!(StyleCode::BOLD.axis(), StyleAxis::Text);
        assert_eq!(StyleCode::UNDERLINE.axis(), StyleAxis::Text);
        assert_eq!(StyleCode::new(30).unwrap().axis(), StyleAxis::Foreground);
        assert_eq!(StyleCode::new(37).unwrap().axis(), StyleAxis::Foreground);
        assert_eq!(StyleCode::new(40).unwrap().axis(), StyleAxis::Background);
        assert_eq!(StyleCode::new(47).unwrap().axis(), StyleAxis::Background);
    }

    #[test]
    fn test_apply_overwrites_one_axis() {
        let state = StyleState::unset().apply(StyleCode::new(31).unwrap());
        assert_eq!(state.fg, 31);
        assert_eq!(state.bg, UNSET);
        assert_eq!(state.text, UNSET);

        let state = state.apply(StyleCode::new(45).unwrap());
        assert_eq!(state.fg, 31);
        assert_eq!(state.bg, 45);

        let state = state.apply(StyleCode::BOLD);
        assert_eq!(state.fg, 31);
        assert_eq!(state.bg, 45);
        assert_eq!(state.text, 1);
    }

    #[test]
    fn test_apply_reset_clears_all_axes() {
        let state = StyleState::unset()
            .apply(StyleCode::new(31).unwrap())
            .apply(StyleCode::new(45).unwrap())
            .apply(StyleCode::RESET);
        assert!(state.is_unset());
    }

    #[test]
    fn test_apply_same_axis_replaces() {
        let state = StyleState::unset()
            .apply(StyleCode::new(31).unwrap())
            .apply(StyleCode::new(34).unwrap());
        assert_eq!(state.fg, 34);
    }
}
