//! Account listings and profiles.

use tracing::instrument;

use toque_core::{FoodStyleId, UserId, UserRole};

use super::{ApiError, BackendClient};
use crate::models::{BaseUser, FoodStyleSelection, UserProfile};

impl BackendClient {
    /// List accounts with the given role.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(role = %role))]
    pub async fn list_accounts(&self, role: UserRole) -> Result<Vec<BaseUser>, ApiError> {
        let path = format!("/users?role={}", role.as_str());
        let accounts: Vec<BaseUser> = self.get(&path).await?;
        tracing::debug!(count = accounts.len(), "Fetched accounts");
        Ok(accounts)
    }

    /// List regular users.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn list_users(&self) -> Result<Vec<BaseUser>, ApiError> {
        self.list_accounts(UserRole::User).await
    }

    /// List administrators.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn list_administrators(&self) -> Result<Vec<BaseUser>, ApiError> {
        self.list_accounts(UserRole::Admin).await
    }

    /// Get the full profile of one user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the user does not exist.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn get_user_profile(&self, id: UserId) -> Result<UserProfile, ApiError> {
        self.get(&format!("/users/{id}")).await
    }

    /// Replace the food styles attached to a user's profile.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, food_style_ids), fields(user_id = %user_id, count = food_style_ids.len()))]
    pub async fn update_user_food_styles(
        &self,
        user_id: UserId,
        food_style_ids: &[FoodStyleId],
    ) -> Result<UserProfile, ApiError> {
        let mut ids = food_style_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        let body = FoodStyleSelection {
            food_style_ids: ids,
        };
        self.patch(&format!("/users/{user_id}/food-styles"), &body)
            .await
    }
}
