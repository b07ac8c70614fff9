//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `BACKEND_URL` - Base URL of the backend REST API
//!
//! ## Optional
//! - `TOQUE_ACCESS_TOKEN` - Bearer token from a previous `login`
//! - `TOQUE_HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
//! - `TOQUE_EXPORT_DIR` - Directory CSV exports are written to (default: `.`)

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_HTTP_TIMEOUT_SECS: &str = "30";
const DEFAULT_EXPORT_DIR: &str = ".";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct AdminConfig {
    /// Backend REST API base URL
    pub backend_url: Url,
    /// Bearer token sent with authenticated requests
    pub access_token: Option<SecretString>,
    /// Per-request timeout
    pub http_timeout: Duration,
    /// Where CSV exports are saved
    pub export_dir: PathBuf,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("backend_url", &self.backend_url.as_str())
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("http_timeout", &self.http_timeout)
            .field("export_dir", &self.export_dir)
            .finish()
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Lookup(lookup);

        let backend_url = env.required("BACKEND_URL")?;
        let backend_url = Url::parse(&backend_url)
            .map_err(|e| ConfigError::InvalidEnvVar("BACKEND_URL".to_string(), e.to_string()))?;
        if !matches!(backend_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvVar(
                "BACKEND_URL".to_string(),
                format!("unsupported scheme {}", backend_url.scheme()),
            ));
        }

        let access_token = env
            .optional("TOQUE_ACCESS_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .map(SecretString::from);

        let timeout_secs = env
            .or_default("TOQUE_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("TOQUE_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
            })?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "TOQUE_HTTP_TIMEOUT_SECS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        let export_dir = Self::export_dir_from_lookup(&env.0);

        Ok(Self {
            backend_url,
            access_token,
            http_timeout: Duration::from_secs(timeout_secs),
            export_dir,
        })
    }

    /// Export directory alone, for commands that never reach the backend.
    #[must_use]
    pub fn export_dir_from_env() -> PathBuf {
        Self::export_dir_from_lookup(|key| std::env::var(key).ok())
    }

    /// `TOQUE_EXPORT_DIR`, defaulting to the working directory.
    #[must_use]
    pub fn export_dir_from_lookup<F>(lookup: F) -> PathBuf
    where
        F: Fn(&str) -> Option<String>,
    {
        PathBuf::from(Lookup(lookup).or_default("TOQUE_EXPORT_DIR", DEFAULT_EXPORT_DIR))
    }

    /// Same configuration with a different access token.
    #[must_use]
    pub fn with_access_token(mut self, token: SecretString) -> Self {
        self.access_token = Some(token);
        self
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

struct Lookup<F>(F);

impl<F: Fn(&str) -> Option<String>> Lookup<F> {
    /// Get a required variable.
    fn required(&self, key: &str) -> Result<String, ConfigError> {
        (self.0)(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
    }

    /// Get an optional variable.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        (self.0)(key).unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AdminConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AdminConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("BACKEND_URL", "http://localhost:3000")]).unwrap();
        assert_eq!(config.backend_url.as_str(), "http://localhost:3000/");
        assert!(config.access_token.is_none());
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.export_dir, PathBuf::from("."));
    }

    #[test]
    fn test_export_dir_without_backend_url() {
        assert_eq!(AdminConfig::export_dir_from_lookup(|_| None), PathBuf::from("."));
        assert_eq!(
            AdminConfig::export_dir_from_lookup(|key| {
                (key == "TOQUE_EXPORT_DIR").then(|| "/srv/exports".to_string())
            }),
            PathBuf::from("/srv/exports")
        );
    }

    #[test]
    fn test_missing_backend_url() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref key) if key == "BACKEND_URL"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[("BACKEND_URL", "not a url")]),
            Err(ConfigError::InvalidEnvVar(..))
        ));
        assert!(matches!(
            load(&[("BACKEND_URL", "ftp://files.toque.app")]),
            Err(ConfigError::InvalidEnvVar(..))
        ));
        assert!(matches!(
            load(&[
                ("BACKEND_URL", "http://localhost:3000"),
                ("TOQUE_HTTP_TIMEOUT_SECS", "0"),
            ]),
            Err(ConfigError::InvalidEnvVar(..))
        ));
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let config = load(&[
            ("BACKEND_URL", "http://localhost:3000"),
            ("TOQUE_ACCESS_TOKEN", "   "),
        ])
        .unwrap();
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = load(&[
            ("BACKEND_URL", "https://api.toque.app"),
            ("TOQUE_ACCESS_TOKEN", "eyJ-super-secret"),
        ])
        .unwrap();
        assert_eq!(
            config.access_token.as_ref().unwrap().expose_secret(),
            "eyJ-super-secret"
        );

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("https://api.toque.app"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("eyJ-super-secret"));
    }
}
