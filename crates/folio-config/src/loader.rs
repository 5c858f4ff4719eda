//! Configuration loading utilities

use crate::schema::SiteConfig;
use crate::validator::ConfigValidator;
use folio_common::{FolioError, FolioResult, Locale};
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {}", .0.join("; "))]
    ValidationError(Vec<String>),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Name of the variable
        var: String,
        /// Conversion failure for its value
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for FolioError {
    fn from(err: ConfigError) -> Self {
        FolioError::config_with_source("Failed to load site configuration", err)
    }
}

/// Configuration loader for the site
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SiteConfig, ConfigError> {
        debug!("Reading configuration from {:?}", path.as_ref());
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: SiteConfig = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;

        Ok(config)
    }

    /// Parse configuration from YAML text, e.g. a document embedded at build time.
    ///
    /// Environment overrides are not applied.
    pub fn from_yaml_str(yaml: &str) -> Result<SiteConfig, ConfigError> {
        let config: SiteConfig = serde_yaml::from_str(yaml)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from the environment and well-known files
    pub fn load() -> FolioResult<SiteConfig> {
        let config = if let Ok(config_path) = env::var("FOLIO_CONFIG_PATH") {
            Self::load_config(&config_path)?
        } else if Path::new("folio.yaml").exists() {
            Self::load_config("folio.yaml")?
        } else if Path::new("folio.yml").exists() {
            Self::load_config("folio.yml")?
        } else {
            let mut config = SiteConfig::default();
            Self::apply_env_overrides(&mut config)?;
            ConfigValidator::validate(&config)?;
            config
        };

        info!(
            "Configuration loaded (default locale: {}, default section: {})",
            config.localization.default_locale, config.navigation.default_section
        );
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FolioResult<SiteConfig> {
        Ok(Self::load_config(path)?)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut SiteConfig) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides read through `lookup`, which maps a variable name to its value.
    pub fn apply_overrides<F>(config: &mut SiteConfig, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup("FOLIO_CONTENT_BASE_URL") {
            config.content.base_url = base_url;
        }

        if let Some(bypass) = lookup("FOLIO_BYPASS_CACHE") {
            config.content.bypass_cache = bypass.parse().map_err(|e| ConfigError::EnvParseError {
                var: "FOLIO_BYPASS_CACHE".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Some(locale) = lookup("FOLIO_DEFAULT_LOCALE") {
            config.localization.default_locale =
                locale
                    .parse::<Locale>()
                    .map_err(|e| ConfigError::EnvParseError {
                        var: "FOLIO_DEFAULT_LOCALE".to_string(),
                        source: Box::new(e),
                    })?;
        }

        if let Some(key) = lookup("FOLIO_STORAGE_KEY") {
            config.localization.storage_key = key;
        }

        if let Some(section) = lookup("FOLIO_DEFAULT_SECTION") {
            config.navigation.default_section = section;
        }

        if let Some(delay) = lookup("FOLIO_DEEP_LINK_DELAY_MS") {
            config.navigation.deep_link_delay_ms =
                delay.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "FOLIO_DEEP_LINK_DELAY_MS".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Some(level) = lookup("FOLIO_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}
