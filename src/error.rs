//! Error types for the session and configuration layers
//!
//! Game actions report rejection with `false`; typed errors only appear
//! where input crosses into the crate from outside.

use std::path::PathBuf;

/// Errors returned by [`Session`](crate::Session) operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Requested search depth outside the configured bounds
    #[error("Search depth {depth} out of range [{min}, {max}]")]
    InvalidDepth { depth: i8, min: i8, max: i8 },
}

/// Errors raised while loading an [`EngineConfig`](crate::EngineConfig)
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for the schema
    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    /// Depth bounds are inconsistent
    #[error("Invalid depth bounds: min {min}, max {max}, default {depth}")]
    InvalidBounds { min: i8, max: i8, depth: i8 },
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_depth_message() {
        let err = SessionError::InvalidDepth { depth: 9, min: 1, max: 6 };
        assert_eq!(err.to_string(), "Search depth 9 out of range [1, 6]");
    }

    #[test]
    fn test_invalid_bounds_message() {
        let err = ConfigError::InvalidBounds { min: 4, max: 2, depth: 3 };
        assert!(err.to_string().contains("min 4"));
    }
}
