//! Error types for lifollow

use thiserror::Error;

/// Result type alias for lifollow operations
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown in place of the raw transport error when LinkedIn cannot be reached.
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Network error. Could not reach LinkedIn; check your connection, proxy or firewall settings.";

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Text shown to the user for this error.
    ///
    /// Transport failures get a fixed, actionable message; every other error
    /// is surfaced verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Error::Api(ApiError::Network(_)) => NETWORK_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Input problems detected before any request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please provide an access token.")]
    MissingToken,

    #[error("Enter either the organization ID or URN.")]
    MissingIdentifier,

    #[error("Organization IDs must be numeric.")]
    NonNumericId,
}

/// LinkedIn API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("LinkedIn rejected the token (401 Unauthorized).")]
    Unauthorized,

    #[error(
        "LinkedIn denied access (403). Ensure your app has Marketing Developer Platform approval."
    )]
    Forbidden,

    #[error("LinkedIn request failed ({status}). {snippet}")]
    Request { status: u16, snippet: String },

    #[error("LinkedIn did not return follower statistics for that organization.")]
    NoData,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to LinkedIn API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `lifollow init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
