// CLI configuration: .env, optional YAML file, then FIELDKIT_* variables
use std::path::Path;

use error_common::Result;
use field_sanitizer::SanitizerConfig;
use tracing::debug;

/// Main CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Sanitizer settings after all layers are applied
    pub sanitizer: SanitizerConfig,
}

impl CliConfig {
    /// Resolve configuration. Later layers win: built-in defaults, the YAML
    /// file at `config_path`, then environment variables.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env file");
        }

        let base = match config_path {
            Some(path) => {
                debug!(path = %path.display(), "Reading configuration file");
                SanitizerConfig::from_file(path)?
            }
            None => SanitizerConfig::default(),
        };

        Ok(Self {
            sanitizer: base.with_env_overrides()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use error_common::FieldKitError;

    #[test]
    fn test_missing_file_fails() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/fieldkit.yaml"))).unwrap_err();
        assert!(matches!(err, FieldKitError::Io(_)));
    }

    #[test]
    fn test_loads_sanitizer_settings_from_file() {
        let path = std::env::temp_dir()
            .join(format!("fieldkit-config-{}.yaml", std::process::id()));
        std::fs::write(&path, "default_keys: [role, notes]\n").unwrap();

        let config = CliConfig::load(Some(&path));
        let _ = std::fs::remove_file(&path);

        let config = config.unwrap();
        if std::env::var(field_sanitizer::ENV_DEFAULT_KEYS).is_err() {
            assert_eq!(config.sanitizer.default_keys, vec!["role", "notes"]);
        }
    }
}
