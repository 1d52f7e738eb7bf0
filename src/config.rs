use crate::codec::brotli::DEFAULT_MAX_DECOMPRESSED_SIZE;
use crate::inscription::{ContentLimits, DEFAULT_MAX_METADATA_SIZE};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default `tracing` filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Application configuration loaded from artifacts.toml or environment variables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub limits: LimitsConfig,
    pub logging: LoggingConfig,
}

/// Ceilings applied when decoding inscription content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Brotli output ceiling in bytes
    pub max_decompressed_size: usize,
    /// Largest CBOR metadata input in bytes
    pub max_metadata_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            limits: LimitsConfig {
                max_decompressed_size: DEFAULT_MAX_DECOMPRESSED_SIZE,
                max_metadata_size: DEFAULT_MAX_METADATA_SIZE,
            },
            logging: LoggingConfig {
                filter: DEFAULT_LOG_FILTER.to_string(),
            },
        }
    }
}

impl From<&LimitsConfig> for ContentLimits {
    fn from(limits: &LimitsConfig) -> Self {
        ContentLimits {
            max_decompressed_size: limits.max_decompressed_size,
            max_metadata_size: limits.max_metadata_size,
        }
    }
}

impl AppConfig {
    /// Load configuration from artifacts.toml (if present) and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(File::with_name("artifacts").required(false))
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();

        let config = Config::builder()
            .set_default(
                "limits.max_decompressed_size",
                defaults.limits.max_decompressed_size as u64,
            )?
            .set_default(
                "limits.max_metadata_size",
                defaults.limits.max_metadata_size as u64,
            )?
            .set_default("logging.filter", defaults.logging.filter)?
            .add_source(file)
            // ARTIFACTS__LIMITS__MAX_DECOMPRESSED_SIZE etc.
            .add_source(
                Environment::with_prefix("ARTIFACTS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Get config values, falling back to built-in defaults on any load failure
    pub fn get_defaults() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn content_limits(&self) -> ContentLimits {
        ContentLimits::from(&self.limits)
    }
}
