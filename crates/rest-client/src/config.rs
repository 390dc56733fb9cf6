//! Client configuration and default headers.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::RestError;

/// Environment variable for the API base URL.
const ENV_API_BASE_URL: &str = "API_BASE_URL";

/// Environment variable for the bearer token.
const ENV_API_TOKEN: &str = "API_TOKEN";

/// Header marking requests as AJAX-style API calls.
const X_REQUESTED_WITH: &str = "x-requested-with";

/// Immutable client configuration: base URL plus bearer token.
#[derive(Debug, Clone)]
pub struct RestConfig {
    base_url: String,
    token: String,
}

impl RestConfig {
    /// Create a configuration with explicit values.
    ///
    /// Trailing slashes are trimmed from `base_url` so request paths can
    /// always be written with a leading slash.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Create a configuration from `API_BASE_URL` and `API_TOKEN`.
    ///
    /// Missing variables pass through as empty strings; requests made with an
    /// empty base URL fail at the transport level, not here.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(ENV_API_BASE_URL).unwrap_or_default(),
            std::env::var(ENV_API_TOKEN).unwrap_or_default(),
        )
    }

    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Default header map attached to every outgoing request.
    ///
    /// The `Authorization` value is marked sensitive so it is redacted from
    /// debug output.
    pub(crate) fn default_headers(&self) -> Result<HeaderMap, RestError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(X_REQUESTED_WITH, HeaderValue::from_static("XMLHttpRequest"));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|e| RestError::Config(format!("invalid bearer token: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = RestConfig::new("https://api.example.com///", "t");
        assert_eq!(config.base_url(), "https://api.example.com");
    }

    #[test]
    fn default_headers_contain_auth_and_content_type() {
        let config = RestConfig::new("https://api.example.com", "secret");
        let headers = config.default_headers().unwrap();

        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(X_REQUESTED_WITH).unwrap(), "XMLHttpRequest");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer secret");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
    }

    #[test]
    fn empty_token_still_produces_headers() {
        let config = RestConfig::new("https://api.example.com", "");
        let headers = config.default_headers().unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer ");
    }

    #[test]
    fn control_characters_in_token_are_rejected() {
        let config = RestConfig::new("https://api.example.com", "bad\ntoken");
        let err = config.default_headers().unwrap_err();
        assert!(matches!(err, RestError::Config(_)));
    }
}
