//! Demo configuration

use std::path::PathBuf;

use serde::Deserialize;
use validator::Validate;

use crate::error::CliError;

/// Prefix of the environment variables read by [`DemoConfig::from_env`]
pub const ENV_PREFIX: &str = "FRAUD";

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How log events are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Demo configuration
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct DemoConfig {
    /// Log level: trace, debug, info, warn, error
    #[validate(length(min = 1))]
    pub log_level: String,
    /// Log event format
    pub log_format: LogFormat,
    /// JSON file with claims; built-in samples are used when unset
    pub claims_file: Option<PathBuf>,
    /// Report format
    pub output_format: OutputFormat,
    /// Maximum indicators printed per analysis
    #[validate(range(min = 1, max = 50))]
    pub indicator_preview: usize,
    /// Maximum reasoning characters printed per analysis
    #[validate(range(min = 1))]
    pub reasoning_preview: usize,
    /// Number of generated claims in the sample batch
    #[validate(range(min = 1, max = 1000))]
    pub batch_size: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            claims_file: None,
            output_format: OutputFormat::Text,
            indicator_preview: 5,
            reasoning_preview: 300,
            batch_size: 5,
        }
    }
}

impl DemoConfig {
    /// Loads configuration from `FRAUD_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, CliError> {
        Self::load(None)
    }

    /// Loads configuration from an explicit set of environment variables
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Result<Self, CliError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect::<config::Map<String, String>>();
        Self::load(Some(vars))
    }

    fn load(vars: Option<config::Map<String, String>>) -> Result<Self, CliError> {
        let config: DemoConfig = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX).source(vars))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }
}
