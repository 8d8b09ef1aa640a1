//! CLI error handling

use core_kernel::CoreError;
use domain_fraud::FraudError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to read claims file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Fraud(#[from] FraudError),

    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

impl CliError {
    /// Returns true if the error comes from startup configuration
    pub fn is_configuration(&self) -> bool {
        match self {
            CliError::Config(_) | CliError::InvalidConfig(_) => true,
            CliError::Core(error) => error.is_fatal(),
            _ => false,
        }
    }
}
