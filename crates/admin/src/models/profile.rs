//! User profile detail view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use toque_core::{AuthProvider, ProfileId, UserId, UserRole};

use super::FoodStyle;

/// Account summary embedded in a profile.
///
/// The backend also sends credential columns (password hash, refresh token);
/// they are not deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAccount {
    pub id: UserId,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub google_id: Option<String>,
    pub provider: AuthProvider,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A review left for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub rating: u8,
    pub comment: String,
    pub service_date: DateTime<Utc>,
    pub reviewer_name: String,
    pub reviewer_email: Option<String>,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregated review statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total_reviews: u32,
    pub average_rating: f64,
    /// Review count per star rating, keyed by the rating as a string.
    #[serde(default)]
    pub rating_distribution: std::collections::BTreeMap<String, u32>,
}

/// Full profile of one user, as shown on the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: ProfileId,
    pub user_id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub description: Option<String>,
    pub date_of_birth: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub user: ProfileAccount,
    #[serde(default)]
    pub food_styles: Vec<FoodStyle>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    pub review_stats: Option<ReviewStats>,
}

impl UserProfile {
    /// Names of the attached food styles.
    #[must_use]
    pub fn food_style_names(&self) -> Vec<&str> {
        self.food_styles.iter().map(|s| s.name.as_str()).collect()
    }
}
