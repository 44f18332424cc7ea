//! Error types for discolor

use thiserror::Error;

/// Main error type for discolor operations
#[derive(Error, Debug)]
pub enum DiscolorError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Markup error during sanitization or parsing
    #[error("Markup error: {0}")]
    Markup(String),

    /// Style code outside the recognized vocabulary
    #[error("Style error: {0}")]
    Style(String),

    /// Clipboard write failure
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type alias for discolor operations
pub type Result<T> = std::result::Result<T, DiscolorError>;
