//! Error types for API calls.

use thiserror::Error;

/// Errors that can occur during API calls.
///
/// Every failure mode collapses into one of these variants so callers can
/// branch on kind rather than parsing message strings.
#[derive(Debug, Error)]
pub enum RestError {
    /// The server replied with an error status and a JSON body carrying a
    /// `message` field. `message` is exactly the server's string.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The server replied with an error status but the body had no usable
    /// `message` field. The raw body is preserved for diagnostics.
    #[error("API error: {status} (no error message in body)")]
    Opaque { status: u16, body: String },

    /// Transport-level failure with no server response (connection refused,
    /// timeout, invalid URL).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A success response whose body did not decode into the requested type.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl RestError {
    /// HTTP status of the remote error, when the server responded at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Opaque { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Serialization(_) | Self::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_server_message() {
        let err = RestError::Api {
            status: 400,
            message: "invalid name".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 400 - invalid name");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn opaque_error_does_not_leak_body_into_display() {
        let err = RestError::Opaque {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 502 (no error message in body)");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn config_error_has_no_status() {
        let err = RestError::Config("invalid bearer token".to_string());
        assert_eq!(err.status(), None);
    }
}
