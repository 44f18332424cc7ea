//! Feature flags configuration.
//!
//! This module contains the `FeaturesConfig` struct which holds
//! feature flags and UI-facing timings.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
///
/// Controls which optional behaviors are enabled in discolor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Enable clipboard integration (OSC 52).
    /// Default: true
    #[serde(default = "default_true")]
    pub clipboard: bool,

    /// Seconds the "Copied" feedback state lasts before reverting.
    /// Default: 2.0
    #[serde(default = "default_copied_timeout")]
    pub copied_timeout: f64,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            clipboard: true,
            copied_timeout: 2.0,
        }
    }
}

impl FeaturesConfig {
    /// Merge another FeaturesConfig into this one.
    ///
    /// TOML does not distinguish "not set" from "set to default", so
    /// all values are copied from `other`; an override file should only
    /// contain the values the user wants to change.
    pub fn merge(&mut self, other: &FeaturesConfig) {
        self.clipboard = other.clipboard;
        self.copied_timeout = other.copied_timeout;
    }
}

fn default_true() -> bool {
    true
}

fn default_copied_timeout() -> f64 {
    2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let features = FeaturesConfig::default();
        assert!(features.clipboard);
        assert!((features.copied_timeout - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_pascal_case() {
        let toml_str = r#"
            Clipboard = false
            CopiedTimeout = 0.5
        "#;

        let features: FeaturesConfig = toml::from_str(toml_str).unwrap();
        assert!(!features.clipboard);
        assert!((features.copied_timeout - 0.5).abs() < f64::EPSILON);
    }
}
