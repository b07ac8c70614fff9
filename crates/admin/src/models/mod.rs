//! Entities served by the backend and displayed by the admin.

mod account;
mod food_style;
mod profile;

pub use account::{BaseUser, BaseUserField};
pub use food_style::{FoodStyle, FoodStyleField, FoodStyleInput, FoodStyleSelection};
pub use profile::{ProfileAccount, Review, ReviewStats, UserProfile};
