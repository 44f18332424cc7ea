//! Discolor Config
//!
//! This crate handles configuration loading and management for
//! discolor, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/discolor/config.toml`
//! - macOS: `~/Library/Application Support/discolor/config.toml`
//! - Windows: `%APPDATA%\discolor\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use discolor_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//! assert!(config.palette.validate().is_ok());
//! ```

mod features;
mod palette;

pub use features::FeaturesConfig;
pub use palette::{PaletteConfig, Swatch};

use discolor_core::{DiscolorError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
///
/// The palette defaults are compiled in; a `[palette]` section in the
/// config file overrides them row by row.
const DEFAULT_TOML: &str = r#"[features]
Clipboard     = true
CopiedTimeout = 2.0
"#;

/// Main configuration structure.
///
/// Contains all configuration sections for discolor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Feature flags configuration
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Style palette metadata
    #[serde(default)]
    pub palette: PaletteConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use discolor_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[features]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "discolor")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "discolor")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| DiscolorError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path)?;
                return toml::from_str(&content)
                    .map_err(|e| DiscolorError::Config(format!("Parse error: {}", e)));
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            DiscolorError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Merge another configuration into this one.
    pub fn merge(&mut self, other: &Config) {
        self.features.merge(&other.features);
        self.palette.merge(&other.palette);
    }

    /// Save configuration to a file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to save the configuration to
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| DiscolorError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.features.clipboard);
        assert!(config.palette.validate().is_ok());
    }

    #[test]
    fn test_default_toml_matches_defaults() {
        let parsed: Config = toml::from_str(DEFAULT_TOML).unwrap();
        assert_eq!(parsed.features.clipboard, FeaturesConfig::default().clipboard);
        assert_eq!(parsed.palette, PaletteConfig::default());
    }

    #[test]
    fn test_merge_overrides_features() {
        let mut base = Config::default();
        let over: Config = toml::from_str("[features]\nClipboard = false").unwrap();
        base.merge(&over);
        assert!(!base.features.clipboard);
        // Palette untouched by a features-only override
        assert_eq!(base.palette.name_of(45), Some("Blurple"));
    }

    #[test]
    fn test_roundtrip_serialization() {
        let config = Config::default();
        let s = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&s).unwrap();
        assert_eq!(back.palette, config.palette);
    }
}
