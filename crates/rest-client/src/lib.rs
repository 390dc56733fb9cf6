//! Thin JSON-over-HTTP API client.
//!
//! Wraps a pre-configured [`reqwest::Client`] with a base URL and default
//! headers (JSON content type, `X-Requested-With`, bearer token) and exposes
//! four verb methods that normalize every failure into [`RestError`].
//!
//! # Usage
//!
//! ```no_run
//! use rest_client::{ApiResponse, RestClient, RestConfig};
//!
//! #[derive(serde::Deserialize)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! # async fn run() -> Result<(), rest_client::RestError> {
//! let config = RestConfig::new("https://api.example.com", "secret-token");
//! let client = RestClient::new(config)?;
//!
//! let users: ApiResponse<Vec<User>> = client.get("/users", &[("page", "2")]).await?;
//! println!("fetched {} users (HTTP {})", users.body.len(), users.status);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! [`RestClient::from_env`] reads two environment variables:
//!
//! - `API_BASE_URL`: base URL prefixed to every request path
//! - `API_TOKEN`: bearer token sent in the `Authorization` header
//!
//! Both pass through unvalidated (an absent variable becomes an empty
//! string). Outside of application entry points, prefer [`RestConfig::new`]
//! with injected values so tests never depend on process environment.
//!
//! # Error model
//!
//! Every failure collapses into one [`RestError`] variant: a remote error
//! whose JSON body carried a `message` field, a remote error without one, a
//! transport-level failure, or an undecodable success body. Callers branch on
//! the variant instead of parsing message strings.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;

pub use client::{ApiResponse, HeaderOverrides, RestClient};
pub use config::RestConfig;
pub use error::RestError;
