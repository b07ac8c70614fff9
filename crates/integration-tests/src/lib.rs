//! Integration tests for Toque.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p toque-integration-tests
//! ```
//!
//! No backend is needed: the client tests run against a `wiremock` server.
//!
//! # Test Categories
//!
//! - `table_engine` - search, filters, rendering and CSV export end to end
//! - `backend_client` - REST client against a mocked backend

use chrono::{DateTime, TimeZone, Utc};
use secrecy::SecretString;
use serde_json::{Value, json};

use toque_admin::api::BackendClient;
use toque_admin::config::{AdminConfig, ConfigError};
use toque_admin::models::{BaseUser, FoodStyle};
use toque_core::{AuthProvider, FoodStyleId, UserId, UserRole};

/// Fixed timestamp used by every fixture.
///
/// # Panics
///
/// Never; the date is a valid constant.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap()
}

/// An account with the given names and role.
#[must_use]
pub fn account(
    id: i64,
    first_name: Option<&str>,
    last_name: Option<&str>,
    email: &str,
    role: UserRole,
) -> BaseUser {
    BaseUser {
        id: UserId::new(id),
        first_name: first_name.map(str::to_string),
        last_name: last_name.map(str::to_string),
        email: email.to_string(),
        role,
        provider: AuthProvider::Local,
        created_at: created_at(),
        updated_at: created_at(),
    }
}

/// A small mixed listing.
#[must_use]
pub fn sample_accounts() -> Vec<BaseUser> {
    let mut jose = account(3, Some("José"), Some("O\"Neil"), "Jose@x.com", UserRole::User);
    jose.provider = AuthProvider::Google;
    vec![
        account(1, Some("Alice"), Some("Martin"), "a@x.com", UserRole::User),
        account(2, Some("Bob"), None, "b@x.com", UserRole::Admin),
        jose,
    ]
}

#[must_use]
pub fn food_style(id: i64, name: &str) -> FoodStyle {
    FoodStyle {
        id: FoodStyleId::new(id),
        name: name.to_string(),
    }
}

/// Backend JSON for an account, as the listing endpoints return it.
#[must_use]
pub fn account_json(user: &BaseUser) -> Value {
    json!({
        "id": user.id.as_i64(),
        "firstName": user.first_name,
        "lastName": user.last_name,
        "email": user.email,
        "role": user.role.as_str(),
        "provider": user.provider.as_str(),
        "createdAt": "2024-03-09T14:05:00.000Z",
        "updatedAt": "2024-03-09T14:05:00.000Z",
    })
}

/// Configuration pointing at `backend_url`.
///
/// # Errors
///
/// Returns `ConfigError` if the URL is invalid.
pub fn config_for(backend_url: &str, token: Option<&str>) -> Result<AdminConfig, ConfigError> {
    AdminConfig::from_lookup(|key| match key {
        "BACKEND_URL" => Some(backend_url.to_string()),
        "TOQUE_ACCESS_TOKEN" => token.map(str::to_string),
        _ => None,
    })
}

/// Client for a mock server, authenticated with `token`.
///
/// # Panics
///
/// Panics if the client cannot be built; only used from tests.
#[must_use]
#[allow(clippy::expect_used)]
pub fn client_for(backend_url: &str, token: &str) -> BackendClient {
    let config = config_for(backend_url, None).expect("valid mock server URL");
    BackendClient::new(&config)
        .expect("client builds")
        .with_access_token(SecretString::from(token.to_string()))
}
