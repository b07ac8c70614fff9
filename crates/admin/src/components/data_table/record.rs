//! Record abstraction shared by every table.

use std::fmt::Debug;

use super::FieldValue;

/// The field-name domain of a record type.
///
/// Implemented by a plain enum per entity, usually through [`record_fields!`].
/// Column and filter definitions are keyed by this type, so a definition can
/// only ever name a field the record actually has.
///
/// [`record_fields!`]: crate::record_fields
pub trait FieldName: Copy + Eq + Debug + Send + Sync + 'static {
    /// Every field, in declaration order.
    const ALL: &'static [Self];

    /// Wire name of the field (matches the backend's JSON key).
    fn as_str(self) -> &'static str;

    /// Look a field up by its wire name.
    #[must_use]
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.as_str() == name)
    }
}

/// A row that can be displayed in a data table.
pub trait Record {
    /// Field names of this record type.
    type Field: FieldName;

    /// Field holding the stable, collection-unique identity of the record.
    const ID_FIELD: Self::Field;

    /// Read a single field.
    fn field(&self, field: Self::Field) -> FieldValue<'_>;

    /// String form of the record's identity.
    fn record_id(&self) -> String {
        self.field(Self::ID_FIELD).to_string()
    }
}

/// Define the field enum of a [`Record`] type.
///
/// Generates the enum with `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
/// a [`FieldName`] implementation mapping each variant to its wire name, and
/// `Display`.
///
/// # Example
///
/// ```rust
/// use toque_admin::components::data_table::FieldName;
/// use toque_admin::record_fields;
///
/// record_fields! {
///     /// Fields of a menu entry.
///     pub enum MenuField {
///         Id => "id",
///         Title => "title",
///     }
/// }
///
/// assert_eq!(MenuField::Title.as_str(), "title");
/// assert_eq!(MenuField::from_name("id"), Some(MenuField::Id));
/// assert_eq!(MenuField::from_name("price"), None);
/// ```
///
/// [`Record`]: crate::components::data_table::Record
/// [`FieldName`]: crate::components::data_table::FieldName
#[macro_export]
macro_rules! record_fields {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::components::data_table::FieldName for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::components::data_table::FieldName::as_str(*self))
            }
        }
    };
}
