//! Weather API error types.

use thiserror::Error;

/// Result type for weather operations.
pub type WeatherResult<T> = Result<T, WeatherError>;

/// Errors that can occur while serving a weather tool call.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The API key is not configured; raised before any network call.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A caller-supplied parameter failed local validation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The upstream API answered with a non-success status.
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// Transport-level failure (DNS, connection, undecodable body).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl WeatherError {
    /// Create a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an upstream error.
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Short machine-readable name of the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Upstream { .. } => "upstream",
            Self::Transport(_) => "transport",
        }
    }

    /// HTTP-like status code reported to the caller.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Configuration(_) => 500,
            Self::InvalidArgument(_) => 400,
            Self::Upstream { status, .. } => *status,
            Self::Transport(_) => 502,
        }
    }

    /// The message without the error class prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Configuration(msg) | Self::InvalidArgument(msg) => msg.clone(),
            Self::Upstream { message, .. } => message.clone(),
            Self::Transport(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(WeatherError::configuration("x").status_code(), 500);
        assert_eq!(WeatherError::invalid_argument("x").status_code(), 400);
        assert_eq!(WeatherError::upstream(403, "denied").status_code(), 403);
    }

    #[test]
    fn test_upstream_display() {
        let err = WeatherError::upstream(400, "No matching location found.");
        assert_eq!(
            err.to_string(),
            "Upstream error (400): No matching location found."
        );
        assert_eq!(err.message(), "No matching location found.");
        assert_eq!(err.kind(), "upstream");
    }
}
