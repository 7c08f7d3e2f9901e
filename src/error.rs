use thiserror::Error;

/// Errors that can occur during recipe import operations
#[derive(Error, Debug)]
pub enum ImportError {
    /// The URL string could not be parsed at all
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL scheme is not http or https
    #[error("Invalid URL protocol: {0}")]
    InvalidProtocol(String),

    /// Network error, timeout, or non-success HTTP status
    #[error("Failed to fetch URL: {0}")]
    FetchFailure(#[from] reqwest::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
