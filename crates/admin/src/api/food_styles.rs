//! Food style management.

use tracing::instrument;

use toque_core::FoodStyleId;

use super::{ApiError, BackendClient};
use crate::models::{FoodStyle, FoodStyleInput};

fn input(name: &str) -> Result<FoodStyleInput, ApiError> {
    FoodStyleInput::new(name)
        .ok_or_else(|| ApiError::Validation("food style name must not be empty".to_string()))
}

impl BackendClient {
    /// List all food styles.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_food_styles(&self) -> Result<Vec<FoodStyle>, ApiError> {
        self.get("/food-style").await
    }

    /// Create a food style. The name is trimmed first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for a blank name, or error if the API
    /// request fails.
    #[instrument(skip(self))]
    pub async fn create_food_style(&self, name: &str) -> Result<FoodStyle, ApiError> {
        let body = input(name)?;
        let created: FoodStyle = self.post("/food-style", &body).await?;
        tracing::info!(id = %created.id, name = %created.name, "Food style created");
        Ok(created)
    }

    /// Rename a food style. The name is trimmed first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for a blank name, or error if the API
    /// request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn update_food_style(
        &self,
        id: FoodStyleId,
        name: &str,
    ) -> Result<FoodStyle, ApiError> {
        let body = input(name)?;
        self.patch(&format!("/food-style/{id}"), &body).await
    }

    /// Delete a food style.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if it does not exist.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_food_style(&self, id: FoodStyleId) -> Result<(), ApiError> {
        self.delete(&format!("/food-style/{id}")).await?;
        tracing::info!("Food style deleted");
        Ok(())
    }
}
