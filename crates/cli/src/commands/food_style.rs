//! `toque food-style`.

use std::io::Write;

use toque_core::{FoodStyleId, UserId};

use super::client;
use crate::error::CliError;

/// Create a food style and print its ID.
pub async fn add(name: &str) -> Result<(), CliError> {
    let created = client()?.create_food_style(name).await?;
    writeln!(std::io::stdout().lock(), "{}\t{}", created.id, created.name)?;
    Ok(())
}

/// Rename a food style.
pub async fn rename(id: i64, name: &str) -> Result<(), CliError> {
    let updated = client()?
        .update_food_style(FoodStyleId::new(id), name)
        .await?;
    writeln!(std::io::stdout().lock(), "{}\t{}", updated.id, updated.name)?;
    Ok(())
}

/// Delete a food style.
pub async fn delete(id: i64) -> Result<(), CliError> {
    client()?.delete_food_style(FoodStyleId::new(id)).await?;
    Ok(())
}

/// Replace the food styles attached to a user and print the result.
pub async fn assign(user_id: i64, ids: &[i64]) -> Result<(), CliError> {
    let ids: Vec<FoodStyleId> = ids.iter().copied().map(FoodStyleId::new).collect();
    let profile = client()?
        .update_user_food_styles(UserId::new(user_id), &ids)
        .await?;
    writeln!(
        std::io::stdout().lock(),
        "{}",
        profile.food_style_names().join(", ")
    )?;
    Ok(())
}
