//! Engine configuration
//!
//! Loaded from TOML; any field left out falls back to its default.
//!
//! ```toml
//! depth = 4
//! min_depth = 1
//! max_depth = 6
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Search depth settings for the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Depth used when no depth is given explicitly.
    pub depth: i8,

    /// Smallest depth accepted from callers.
    pub min_depth: i8,

    /// Largest depth accepted from callers.
    /// Search time grows quickly past this point.
    pub max_depth: i8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            min_depth: 1,
            max_depth: 6,
        }
    }
}

impl EngineConfig {
    /// Create a new config with custom default depth.
    pub fn with_depth(mut self, depth: i8) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with custom depth bounds.
    pub fn with_bounds(mut self, min_depth: i8, max_depth: i8) -> Self {
        self.min_depth = min_depth;
        self.max_depth = max_depth;
        self
    }

    /// Whether `depth` lies within the accepted bounds
    pub fn accepts(&self, depth: i8) -> bool {
        (self.min_depth..=self.max_depth).contains(&depth)
    }

    /// Check that `1 <= min_depth <= depth <= max_depth`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_depth < 1 || self.min_depth > self.max_depth || !self.accepts(self.depth) {
            return Err(ConfigError::InvalidBounds {
                min: self.min_depth,
                max: self.max_depth,
                depth: self.depth,
            });
        }
        Ok(())
    }

    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded engine config");
        Ok(config)
    }
}
