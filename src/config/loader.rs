//! Configuration loading from disk.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::SiteConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Name of the environment variable selecting the runtime mode. Any value
/// other than `production` leaves the config file's setting in place.
pub const SITE_ENV_VAR: &str = "SITE_ENV";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SiteConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides. `SITE_ENV=production` forces production
/// mode regardless of the config file.
pub fn apply_env_overrides(config: &mut SiteConfig) {
    if env::var(SITE_ENV_VAR).as_deref() == Ok("production") {
        config.production = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert!(!config.production);
        assert_eq!(config.site.year, 2019);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: SiteConfig = toml::from_str(
            r#"
            production = true

            [listener]
            bind_address = "127.0.0.1:9999"

            [site]
            year = 2019
            stage = "event"
            "#,
        )
        .unwrap();
        assert!(config.production);
        assert_eq!(config.listener.bind_address, "127.0.0.1:9999");
        assert_eq!(config.site.stage.as_str(), "event");
        // untouched sections keep their defaults
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_env_override_sets_production() {
        let mut config = SiteConfig::default();
        std::env::set_var(SITE_ENV_VAR, "production");
        apply_env_overrides(&mut config);
        std::env::remove_var(SITE_ENV_VAR);
        assert!(config.production);
    }
}
