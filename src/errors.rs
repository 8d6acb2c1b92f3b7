//! Error types for the solace engine
//!
//! The conversation core itself is infallible by contract: classification,
//! memory recording, and composition always return a value. Errors exist for
//! the surfaces that touch the filesystem (configuration, transcripts).

use thiserror::Error;

/// Main error type for the engine's fallible surfaces
#[derive(Error, Debug)]
pub enum EngineError {
    /// Transcript save/load errors
    #[error("Transcript error: {0}")]
    Transcript(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::Transcript("missing title".to_string());
        assert_eq!(err.to_string(), "Transcript error: missing title");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: EngineError = io.into();
        assert!(matches!(err, EngineError::Io(_)));
    }
}
