//! Error types for Loom operations.
//!
//! This module provides the main error type [`LoomError`] which wraps the
//! error conditions that can occur while preparing a diagram for rendering.

use thiserror::Error;

/// The main error type for Loom operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoomError {
    /// A configured value (typically a color) could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// The diagram structure cannot be laid out.
    #[error("Layout error: {0}")]
    Layout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            LoomError::Config("invalid color `nope`".to_string()).to_string(),
            "Config error: invalid color `nope`"
        );
        assert_eq!(
            LoomError::Layout("call cycle".to_string()).to_string(),
            "Layout error: call cycle"
        );
    }
}
