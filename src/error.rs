//! Error types for the Premier Pulse statistics engine and CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PulseError>;

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Unknown statistic: {name}")]
    UnknownStat { name: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Invalid API URL: {url} (expected http:// or https://)")]
    InvalidApiUrl { url: String },
}

impl PulseError {
    /// Shorthand for the contract-violation variant.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        PulseError::InvalidInput {
            message: message.into(),
        }
    }
}
