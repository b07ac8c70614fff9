//! Backend REST API client.
//!
//! The admin owns no data: every list and detail view is fetched from the
//! backend, which authenticates requests with a bearer token obtained from
//! `POST /auth/login`.
//!
//! # Endpoints
//!
//! | Method   | Path                      | Use                          |
//! |----------|---------------------------|------------------------------|
//! | `POST`   | `/auth/login`             | exchange credentials for JWT |
//! | `GET`    | `/users?role=user`        | users listing                |
//! | `GET`    | `/users?role=admin`       | administrators listing       |
//! | `GET`    | `/users/{id}`             | profile detail               |
//! | `PATCH`  | `/users/{id}/food-styles` | replace a user's food styles |
//! | `GET`    | `/food-style`             | food styles listing          |
//! | `POST`   | `/food-style`             | create a food style          |
//! | `PATCH`  | `/food-style/{id}`        | rename a food style          |
//! | `DELETE` | `/food-style/{id}`        | delete a food style          |

mod accounts;
mod auth;
mod food_styles;

pub use auth::{Credentials, LoginResponse};

use std::sync::Arc;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::config::AdminConfig;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Missing, expired or rejected credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Input rejected before any request was sent.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Backend API client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: String,
    access_token: Option<SecretString>,
}

impl BackendClient {
    /// Create a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &AdminConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(BackendClientInner {
                client,
                base_url: config.backend_url.as_str().trim_end_matches('/').to_string(),
                access_token: config.access_token.clone(),
            }),
        })
    }

    /// A client sharing this one's connection pool but sending `token`.
    #[must_use]
    pub fn with_access_token(&self, token: SecretString) -> Self {
        Self {
            inner: Arc::new(BackendClientInner {
                client: self.inner.client.clone(),
                base_url: self.inner.base_url.clone(),
                access_token: Some(token),
            }),
        }
    }

    /// Base URL requests are sent to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Whether requests carry a bearer token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.access_token.is_some()
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.inner.base_url);
        let builder = self.inner.client.request(method, url);
        match &self.inner.access_token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    /// Execute a GET request to the backend.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        Self::handle_response(response).await
    }

    /// Execute a POST request to the backend.
    pub(crate) async fn post<T: serde::de::DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Execute a PATCH request to the backend.
    pub(crate) async fn patch<T: serde::de::DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .request(reqwest::Method::PATCH, path)
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Execute a DELETE request to the backend.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::parse_error(response).await)
    }

    /// Handle API response and parse JSON.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("Failed to parse response: {e}")));
        }
        Err(Self::parse_error(response).await)
    }

    /// Map an error response to an `ApiError`.
    async fn parse_error(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let path = response.url().path().to_string();

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| {
            if body.is_empty() {
                "Unknown error".to_string()
            } else {
                body
            }
        });

        tracing::warn!(status, path = %path, message = %message, "Backend request failed");

        match status {
            401 | 403 => ApiError::Unauthorized(message),
            404 => ApiError::NotFound(path),
            _ => ApiError::Api { status, message },
        }
    }
}

/// Pull `message` out of a JSON error body.
///
/// The backend answers errors with `{"statusCode", "message", "error"}`;
/// `message` is either a string or a list of validation messages.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        serde_json::Value::String(message) => Some(message.clone()),
        serde_json::Value::Array(messages) => Some(
            messages
                .iter()
                .filter_map(serde_json::Value::as_str)
                .collect::<Vec<_>>()
                .join("; "),
        ),
        _ => None,
    }
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.inner.base_url)
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config(url: &str, token: Option<&str>) -> AdminConfig {
        AdminConfig::from_lookup(|key| match key {
            "BACKEND_URL" => Some(url.to_string()),
            "TOQUE_ACCESS_TOKEN" => token.map(str::to_string),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        let client = BackendClient::new(&config("http://localhost:3000/api/", None)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api");
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_debug_hides_token() {
        let client =
            BackendClient::new(&config("http://localhost:3000", Some("jwt-secret"))).unwrap();
        let debug_output = format!("{client:?}");
        assert!(debug_output.contains("authenticated: true"));
        assert!(!debug_output.contains("jwt-secret"));
    }

    #[test]
    fn test_with_access_token() {
        let client = BackendClient::new(&config("http://localhost:3000", None)).unwrap();
        let authed = client.with_access_token(SecretString::from("t"));
        assert!(authed.is_authenticated());
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_error_message_shapes() {
        assert_eq!(
            error_message(r#"{"statusCode":400,"message":"name must not be empty"}"#).as_deref(),
            Some("name must not be empty")
        );
        assert_eq!(
            error_message(r#"{"message":["email must be an email","password too short"]}"#)
                .as_deref(),
            Some("email must be an email; password too short")
        );
        assert!(error_message("<html>Bad Gateway</html>").is_none());
    }
}
