//! Dashboard accounts: regular users and administrators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use toque_core::{AuthProvider, UserId, UserRole};

use crate::components::data_table::{FieldValue, Record};
use crate::record_fields;

/// An account as returned by the backend's user listing.
///
/// Users and administrators share this shape; the backend tells them apart
/// by `role`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseUser {
    /// Account ID.
    pub id: UserId,
    /// First name, if the account filled it in.
    pub first_name: Option<String>,
    /// Last name, if the account filled it in.
    pub last_name: Option<String>,
    /// Sign-in email. Kept as reported; the backend owns validation.
    pub email: String,
    /// Account role.
    pub role: UserRole,
    /// How the account signs in.
    pub provider: AuthProvider,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl BaseUser {
    /// "First Last", skipping missing parts.
    #[must_use]
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

record_fields! {
    /// Fields of [`BaseUser`], named as in the backend's JSON.
    pub enum BaseUserField {
        Id => "id",
        FirstName => "firstName",
        LastName => "lastName",
        Email => "email",
        Role => "role",
        Provider => "provider",
        CreatedAt => "createdAt",
        UpdatedAt => "updatedAt",
    }
}

impl Record for BaseUser {
    type Field = BaseUserField;
    const ID_FIELD: BaseUserField = BaseUserField::Id;

    fn field(&self, field: BaseUserField) -> FieldValue<'_> {
        match field {
            BaseUserField::Id => self.id.as_i64().into(),
            BaseUserField::FirstName => self.first_name.as_ref().into(),
            BaseUserField::LastName => self.last_name.as_ref().into(),
            BaseUserField::Email => (&self.email).into(),
            BaseUserField::Role => self.role.as_str().into(),
            BaseUserField::Provider => self.provider.as_str().into(),
            BaseUserField::CreatedAt => self.created_at.into(),
            BaseUserField::UpdatedAt => self.updated_at.into(),
        }
    }
}
