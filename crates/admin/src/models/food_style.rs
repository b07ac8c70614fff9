//! Food styles (cuisine tags attached to user profiles).

use serde::{Deserialize, Serialize};

use toque_core::FoodStyleId;

use crate::components::data_table::{FieldValue, Record};
use crate::record_fields;

/// A food style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodStyle {
    /// Food style ID.
    pub id: FoodStyleId,
    /// Display name, e.g. "Italian".
    pub name: String,
}

record_fields! {
    /// Fields of [`FoodStyle`].
    pub enum FoodStyleField {
        Id => "id",
        Name => "name",
    }
}

impl Record for FoodStyle {
    type Field = FoodStyleField;
    const ID_FIELD: FoodStyleField = FoodStyleField::Id;

    fn field(&self, field: FoodStyleField) -> FieldValue<'_> {
        match field {
            FoodStyleField::Id => self.id.as_i64().into(),
            FoodStyleField::Name => (&self.name).into(),
        }
    }
}

/// Body of create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodStyleInput {
    /// Trimmed, non-empty name.
    pub name: String,
}

impl FoodStyleInput {
    /// Trim `name` and reject blank input.
    #[must_use]
    pub fn new(name: &str) -> Option<Self> {
        let name = name.trim();
        (!name.is_empty()).then(|| Self {
            name: name.to_string(),
        })
    }
}

/// Body of the request replacing a user's food styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodStyleSelection {
    /// Selected food style IDs.
    pub food_style_ids: Vec<FoodStyleId>,
}
