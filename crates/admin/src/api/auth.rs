//! Login.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use toque_core::Email;

use super::{ApiError, BackendClient};

/// Minimum password length accepted by the login form.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validated login credentials.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct Credentials {
    email: Email,
    password: SecretString,
}

impl Credentials {
    /// Validate an email and password pair.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for a malformed email or a password
    /// shorter than six characters.
    pub fn new(email: &str, password: &str) -> Result<Self, ApiError> {
        let email = Email::parse(email).map_err(|e| ApiError::Validation(e.to_string()))?;
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ApiError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        Ok(Self {
            email,
            password: SecretString::from(password.to_string()),
        })
    }

    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Body of a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: Option<String>,
}

impl BackendClient {
    /// Exchange credentials for an access token.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` for rejected credentials and
    /// `ApiError::Parse` when the response carries no token.
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<SecretString, ApiError> {
        let body = LoginRequest {
            email: credentials.email.as_str(),
            password: credentials.password.expose_secret(),
        };

        let response: LoginResponse = self.post("/auth/login", &body).await?;
        let token = response
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::Parse("Missing token in response".to_string()))?;

        tracing::info!("Logged in");
        Ok(SecretString::from(token))
    }
}
