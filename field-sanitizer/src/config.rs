// Sanitizer configuration
use std::path::Path;

use serde::{Deserialize, Serialize};

use error_common::{FieldKitError, Result};

use crate::extract::{SanitizeOptions, DEFAULT_MAX_DEPTH};

pub const ENV_MAX_DEPTH: &str = "FIELDKIT_MAX_DEPTH";
pub const ENV_DEFAULT_KEYS: &str = "FIELDKIT_DEFAULT_KEYS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizerConfig {
    /// Depth cap for nested values (default: 10)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Keys to extract when the caller does not name any
    #[serde(default)]
    pub default_keys: Vec<String>,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            default_keys: Vec::new(),
        }
    }
}

impl SanitizerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply `FIELDKIT_*` environment variables on top of `self`
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(
            std::env::var(ENV_MAX_DEPTH).ok(),
            std::env::var(ENV_DEFAULT_KEYS).ok(),
        )
    }

    fn with_overrides(
        mut self,
        max_depth: Option<String>,
        default_keys: Option<String>,
    ) -> Result<Self> {
        if let Some(raw) = max_depth {
            self.max_depth = raw.trim().parse().map_err(|_| {
                FieldKitError::Config(format!(
                    "{ENV_MAX_DEPTH} must be a non-negative integer, got `{raw}`"
                ))
            })?;
        }

        if let Some(raw) = default_keys {
            self.default_keys = parse_key_list(&raw);
        }

        Ok(self)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&contents)
    }

    pub fn options(&self) -> SanitizeOptions {
        SanitizeOptions::new(self.max_depth)
    }
}

/// Split a comma separated key list, dropping blanks
pub fn parse_key_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_owned)
        .collect()
}
