//! Error types for rapid_mindmap

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, MindMapError>;

/// Errors surfaced by the mind map pipeline
#[derive(Debug, Error)]
pub enum MindMapError {
    /// The input paragraph was empty or whitespace only
    #[error("please provide a valid paragraph")]
    EmptyInput,

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Rendering the mind map to an image failed
    #[error("error saving mindmap: {0}")]
    Export(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl MindMapError {
    /// Build an [`MindMapError::InvalidConfig`]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build an [`MindMapError::Export`]
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Whether this error is a user-facing warning rather than a failure
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MindMapError::EmptyInput.to_string(),
            "please provide a valid paragraph"
        );
        assert_eq!(
            MindMapError::invalid_config("max_per_keyword must be > 0").to_string(),
            "invalid configuration: max_per_keyword must be > 0"
        );
        assert_eq!(
            MindMapError::export("dot not found").to_string(),
            "error saving mindmap: dot not found"
        );
    }

    #[test]
    fn test_warning_classification() {
        assert!(MindMapError::EmptyInput.is_warning());
        assert!(!MindMapError::export("x").is_warning());
    }
}
