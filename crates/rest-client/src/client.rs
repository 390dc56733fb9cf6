//! Verb methods over a pre-configured HTTP transport.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::RestConfig;
use crate::error::RestError;

/// A decoded response with its status metadata.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// Decoded JSON body.
    pub body: T,
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers as returned by the transport.
    pub headers: HeaderMap,
}

/// Per-call header overrides for POST/PUT.
///
/// The overridable set is closed: only the content type can be replaced.
/// Everything else (authorization, `X-Requested-With`) always comes from the
/// client defaults.
#[derive(Debug, Clone, Default)]
pub struct HeaderOverrides {
    /// Replacement for the default `Content-Type: application/json`.
    pub content_type: Option<String>,
}

impl HeaderOverrides {
    /// Override the content type for one call.
    #[must_use]
    pub fn content_type(value: impl Into<String>) -> Self {
        Self {
            content_type: Some(value.into()),
        }
    }
}

/// Shape of the error payload expected from remote servers.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Thin JSON API client: base URL, default headers, four verb methods.
///
/// Cloning is cheap (the inner transport is reference-counted) and a single
/// instance is safe to share across tasks: no mutable state is written after
/// construction, and each call owns its request/response state.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// Create a client from an explicit configuration.
    ///
    /// # Errors
    /// Returns an error if the token cannot be encoded as a header value or
    /// the underlying transport fails to initialize.
    pub fn new(config: RestConfig) -> Result<Self, RestError> {
        let headers = config.default_headers()?;
        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    /// Create a client from `API_BASE_URL` and `API_TOKEN`.
    ///
    /// # Errors
    /// Same failure modes as [`RestClient::new`].
    pub fn from_env() -> Result<Self, RestError> {
        Self::new(RestConfig::from_env())
    }

    /// Issue a GET request to `base_url + path`.
    ///
    /// Non-empty `query` pairs become URL query parameters; pass `&[]` for
    /// none. Numeric values are formatted by the caller.
    ///
    /// # Errors
    /// See [`RestError`] for the failure taxonomy.
    pub async fn get<T>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse<T>, RestError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "GET request");

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Issue a POST request with `body` serialized as JSON.
    ///
    /// `overrides` replaces the content type for this call only; the
    /// remaining default headers are untouched.
    ///
    /// # Errors
    /// See [`RestError`] for the failure taxonomy.
    pub async fn post<T, B>(
        &self,
        path: &str,
        body: &B,
        overrides: Option<&HeaderOverrides>,
    ) -> Result<ApiResponse<T>, RestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "POST request");

        let request = Self::apply_overrides(self.client.post(&url).json(body), overrides)?;
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Issue a PUT request with `body` serialized as JSON.
    ///
    /// Identical contract to [`RestClient::post`].
    ///
    /// # Errors
    /// See [`RestError`] for the failure taxonomy.
    pub async fn put<T, B>(
        &self,
        path: &str,
        body: &B,
        overrides: Option<&HeaderOverrides>,
    ) -> Result<ApiResponse<T>, RestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "PUT request");

        let request = Self::apply_overrides(self.client.put(&url).json(body), overrides)?;
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Issue a DELETE request with `body` as the request payload.
    ///
    /// The body goes out as JSON payload, not as query parameters. Pass
    /// `&serde_json::json!({})` when the endpoint expects an empty object.
    ///
    /// # Errors
    /// See [`RestError`] for the failure taxonomy.
    pub async fn delete<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, RestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "DELETE request");

        let response = self.client.delete(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Apply per-call header overrides after `.json()`.
    ///
    /// `RequestBuilder::header` appends, which would leave the request with
    /// two `Content-Type` values; `RequestBuilder::headers` replaces per key,
    /// so the override is the only content type on the wire.
    fn apply_overrides(
        request: RequestBuilder,
        overrides: Option<&HeaderOverrides>,
    ) -> Result<RequestBuilder, RestError> {
        let Some(content_type) = overrides.and_then(|o| o.content_type.as_deref()) else {
            return Ok(request);
        };

        let value = HeaderValue::from_str(content_type)
            .map_err(|e| RestError::Config(format!("invalid content type override: {e}")))?;
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, value);
        Ok(request.headers(headers))
    }

    /// Normalize a transport response: decode `T` on success, extract the
    /// server's `message` on error statuses.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<ApiResponse<T>, RestError> {
        let status = response.status();
        let headers = response.headers().clone();
        let text = response.text().await?;

        if status.is_success() {
            let body = serde_json::from_str(&text).map_err(|e| {
                warn!(error = %e, body = %text, "Failed to parse response");
                RestError::Serialization(e)
            })?;
            return Ok(ApiResponse {
                body,
                status,
                headers,
            });
        }

        match serde_json::from_str::<ErrorBody>(&text) {
            Ok(ErrorBody {
                message: Some(message),
            }) => Err(RestError::Api {
                status: status.as_u16(),
                message,
            }),
            _ => Err(RestError::Opaque {
                status: status.as_u16(),
                body: text,
            }),
        }
    }
}
