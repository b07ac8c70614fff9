//! `toque login`.

use std::io::Write;

use secrecy::ExposeSecret;
use toque_admin::api::{BackendClient, Credentials};
use toque_admin::config::AdminConfig;

use crate::error::CliError;

/// Log in and print the access token.
///
/// Credentials are validated locally before anything is sent.
pub async fn run(email: &str, password: &str) -> Result<(), CliError> {
    let credentials = Credentials::new(email, password)?;
    let config = AdminConfig::from_env()?;
    let client = BackendClient::new(&config)?;

    tracing::info!(backend = client.base_url(), "Logging in");
    let token = client.login(&credentials).await?;

    writeln!(std::io::stdout().lock(), "{}", token.expose_secret())?;
    Ok(())
}
