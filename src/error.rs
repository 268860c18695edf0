//! Error types for playground operations
//!
//! Provides unified error handling for host calls, state persistence and
//! preview rendering.

use thiserror::Error;

/// Errors that can occur while driving the playground
#[derive(Error, Debug)]
pub enum PlaygroundError {
    /// A part of the app was used before initialization created it
    #[error("The {0} is not created yet")]
    NotInitialized(&'static str),

    /// The host rejected or failed an event
    #[error("Host error: {0}")]
    Host(String),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored code is not valid base64
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Stored code is not valid UTF-8 after decoding
    #[error("UTF-8 decode error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Host color palettes do not have the expected shape
    #[error(
        "The length of colors in appConfig.styleConfig.chartColorPalettes ({actual}) does not match with the numColorPalettes * 5 ({expected})"
    )]
    ColorPalettes { expected: usize, actual: usize },

    /// Playground data could not be produced for the stored version
    #[error("Failed to evaluate the playground data: {0}")]
    PlaygroundData(String),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Preview hosting failed
    #[error("Preview error: {0}")]
    Preview(String),

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for playground operations
pub type Result<T> = std::result::Result<T, PlaygroundError>;

impl From<String> for PlaygroundError {
    fn from(s: String) -> Self {
        PlaygroundError::Other(s)
    }
}

impl From<&str> for PlaygroundError {
    fn from(s: &str) -> Self {
        PlaygroundError::Other(s.to_string())
    }
}
