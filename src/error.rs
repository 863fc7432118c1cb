use crate::revenue::Tier;
use thiserror::Error;

/// Errors raised while loading configuration or reading operator input
#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("Invalid customer count for {tier} plan: {input:?}")]
    InvalidCount { tier: Tier, input: String },

    #[error("Input closed before {tier} plan count was entered")]
    InputClosed { tier: Tier },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Configuration file is corrupted: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization failed: {0}")]
    Serialize(String),
}

impl From<toml::ser::Error> for CalculatorError {
    fn from(error: toml::ser::Error) -> Self {
        CalculatorError::Serialize(format!("TOML error: {}", error))
    }
}

impl From<serde_json::Error> for CalculatorError {
    fn from(error: serde_json::Error) -> Self {
        CalculatorError::Serialize(format!("JSON error: {}", error))
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
