//! Style palette metadata.
//!
//! The palette maps every code in the closed style vocabulary to its
//! human-readable name and (for colors) the swatch hex value the button
//! palette displays. The codes themselves are fixed by the core; the
//! palette only carries display metadata and can be overridden from the
//! config file.

use discolor_core::StyleCode;
use serde::{Deserialize, Serialize};

/// One palette entry: a style code plus its display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Swatch {
    /// The style code this entry describes
    pub code: u8,

    /// Human-readable name shown in tooltips and the CLI legend
    pub name: String,

    /// Swatch color as `#rrggbb`, absent for text styles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

impl Swatch {
    fn new(code: u8, name: &str, hex: Option<&str>) -> Self {
        Self {
            code,
            name: name.to_string(),
            hex: hex.map(str::to_string),
        }
    }
}

/// Default palette entries: (code, name, swatch hex).
const DEFAULT_STYLES: [(u8, &str); 3] = [(0, "Reset"), (1, "Bold"), (4, "Underline")];

const DEFAULT_FOREGROUND: [(u8, &str, &str); 8] = [
    (30, "Dark Gray (33%)", "#4f545c"),
    (31, "Red", "#dc322f"),
    (32, "Yellowish Green", "#859900"),
    (33, "Gold", "#b58900"),
    (34, "Light Blue", "#268bd2"),
    (35, "Pink", "#d33682"),
    (36, "Teal", "#2aa198"),
    (37, "White", "#ffffff"),
];

const DEFAULT_BACKGROUND: [(u8, &str, &str); 8] = [
    (40, "Blueish Black", "#002b36"),
    (41, "Rust Brown", "#cb4b16"),
    (42, "Gray (40%)", "#586e75"),
    (43, "Gray (45%)", "#657b83"),
    (44, "Light Gray (55%)", "#839496"),
    (45, "Blurple", "#6c71c4"),
    (46, "Light Gray (60%)", "#93a1a1"),
    (47, "Cream White", "#fdf6e3"),
];

/// Palette configuration: text styles plus the two color rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaletteConfig {
    /// The three text-style entries (reset, bold, underline)
    #[serde(default = "default_styles")]
    pub styles: Vec<Swatch>,

    /// The eight foreground color entries (30-37)
    #[serde(default = "default_foreground")]
    pub foreground: Vec<Swatch>,

    /// The eight background color entries (40-47)
    #[serde(default = "default_background")]
    pub background: Vec<Swatch>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            styles: default_styles(),
            foreground: default_foreground(),
            background: default_background(),
        }
    }
}

impl PaletteConfig {
    /// Iterate over every entry in display order.
    pub fn all(&self) -> impl Iterator<Item = &Swatch> {
        self.styles
            .iter()
            .chain(self.foreground.iter())
            .chain(self.background.iter())
    }

    /// Look up the display name for a code.
    pub fn name_of(&self, code: u8) -> Option<&str> {
        self.all()
            .find(|s| s.code == code)
            .map(|s| s.name.as_str())
    }

    /// Look up the swatch hex for a code.
    pub fn hex_of(&self, code: u8) -> Option<&str> {
        self.all()
            .find(|s| s.code == code)
            .and_then(|s| s.hex.as_deref())
    }

    /// Check that every entry's code is in the closed vocabulary and
    /// the three rows carry the expected counts.
    pub fn validate(&self) -> Result<(), String> {
        if self.styles.len() != 3 || self.foreground.len() != 8 || self.background.len() != 8 {
            return Err(format!(
                "palette must have 3 styles, 8 foreground, 8 background entries (got {}/{}/{})",
                self.styles.len(),
                self.foreground.len(),
                self.background.len()
            ));
        }
        for swatch in self.all() {
            if StyleCode::new(swatch.code).is_none() {
                return Err(format!("palette code {} is not recognized", swatch.code));
            }
        }
        Ok(())
    }

    /// Merge another PaletteConfig into this one.
    ///
    /// Rows are replaced wholesale; a partial override keeps the
    /// compiled-in defaults for the rows it omits.
    pub fn merge(&mut self, other: &PaletteConfig) {
        self.styles = other.styles.clone();
        self.foreground = other.foreground.clone();
        self.background = other.background.clone();
    }
}

fn default_styles() -> Vec<Swatch> {
    DEFAULT_STYLES
        .iter()
        .map(|&(code, name)| Swatch::new(code, name, None))
        .collect()
}

fn default_foreground() -> Vec<Swatch> {
    DEFAULT_FOREGROUND
        .iter()
        .map(|&(code, name, hex)| Swatch::new(code, name, Some(hex)))
        .collect()
}

fn default_background() -> Vec<Swatch> {
    DEFAULT_BACKGROUND
        .iter()
        .map(|&(code, name, hex)| Swatch::new(code, name, Some(hex)))
        .collect()
}
