//! Configuration loader for bloglist
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "BLOGLIST";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// Sources in order of priority (lowest first):
/// 1. `default.toml` - base configuration
/// 2. `{environment}.toml` - environment-specific configuration
/// 3. `local.toml` - local development overrides (not committed)
/// 4. `BLOGLIST__*` environment variables
///
/// Every layer is optional; serde defaults fill in anything left unset.
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Current application environment
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader for the default config directory
    /// and the environment taken from `BLOGLIST_APP_ENV`.
    pub fn new() -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            environment: AppEnvironment::from_env(),
        }
    }

    /// Override the application environment (CLI flag takes precedence over
    /// the environment variable).
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Get the current application environment
    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Load configuration from all layered sources
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .add_source(File::from(self.config_dir.join("default.toml")).required(false))
            .add_source(
                File::from(
                    self.config_dir
                        .join(format!("{}.toml", self.environment.as_str())),
                )
                .required(false),
            )
            .add_source(File::from(self.config_dir.join("local.toml")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        Self::deserialize_and_validate(config)
    }

    /// Load configuration from a single explicit file, skipping layering.
    /// Used for the `--config` CLI flag.
    pub fn load_from_file(path: &Path) -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        Self::deserialize_and_validate(config)
    }

    fn deserialize_and_validate(config: Config) -> Result<Settings, ConfigError> {
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            r#"
[server]
host = "0.0.0.0"
port = 8080

[jwt]
secret = "0123456789abcdef0123456789abcdef"
token_expiration = 2
"#
        )
        .unwrap();

        let settings = ConfigLoader::load_from_file(file.path()).unwrap();
        assert_eq!(settings.server.address(), "0.0.0.0:8080");
        assert_eq!(settings.jwt.token_expiration, 2);
        // Sections absent from the file fall back to defaults.
        assert_eq!(settings.logger.level, "info");
    }

    #[test]
    fn invalid_settings_in_file_are_rejected() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            r#"
[logger]
format = "xml"
"#
        )
        .unwrap();

        assert!(ConfigLoader::load_from_file(file.path()).is_err());
    }

    #[test]
    fn loader_with_environment_override() {
        let loader = ConfigLoader::new().with_environment(AppEnvironment::Test);
        assert_eq!(loader.environment(), AppEnvironment::Test);
    }
}
