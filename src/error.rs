//! Error types for ytgist.

use thiserror::Error;

/// Library-level error type for ytgist operations.
#[derive(Error, Debug)]
pub enum YtgistError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caption retrieval failed. The rendered message keeps the `Error`
    /// prefix that web and console callers have always matched on.
    #[error("Error getting transcript: {0}")]
    Transcript(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl YtgistError {
    /// Whether this error came from the caption service rather than the generator.
    pub fn is_transcript(&self) -> bool {
        matches!(self, YtgistError::Transcript(_))
    }
}

/// Result type alias for ytgist operations.
pub type Result<T> = std::result::Result<T, YtgistError>;
