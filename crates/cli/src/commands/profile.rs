//! `toque profile`.

use toque_core::UserId;

use super::client;
use crate::error::CliError;
use crate::output;

/// Print a user's profile.
pub async fn run(id: i64) -> Result<(), CliError> {
    let profile = client()?.get_user_profile(UserId::new(id)).await?;
    output::write_profile(&mut std::io::stdout().lock(), &profile)?;
    Ok(())
}
