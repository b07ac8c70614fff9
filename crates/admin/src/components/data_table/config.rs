//! Declarative table configuration.
//!
//! One [`TableConfig`] is built per entity type and stays immutable while a
//! table is on screen. Columns may carry a render function, which makes each
//! column its own formatting strategy.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{FieldName, FieldValue, Record};

/// Default name of the exported CSV file.
pub const DEFAULT_EXPORT_FILENAME: &str = "export.csv";

/// Message shown when a table has no rows and nothing is filtered.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data found.";

/// Message shown when filters or search leave no rows.
pub const DEFAULT_NO_RESULTS_MESSAGE: &str = "No results match your search criteria.";

/// Formats a cell from the field value and the whole record.
pub type CellFormatter<R> = Arc<dyn Fn(&FieldValue<'_>, &R) -> String + Send + Sync>;

/// What a column displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKey<F> {
    /// A field of the record.
    Field(F),
    /// A computed column with no backing field (e.g. row actions).
    Derived(&'static str),
}

impl<F: FieldName> ColumnKey<F> {
    /// Key as shown to templates and in exports.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Field(field) => field.as_str(),
            Self::Derived(key) => key,
        }
    }

    /// The backing field, if any.
    #[must_use]
    pub const fn field(&self) -> Option<F> {
        match self {
            Self::Field(field) => Some(*field),
            Self::Derived(_) => None,
        }
    }
}

/// Column definition for a data table.
pub struct TableColumn<R: Record> {
    /// Field or derived key of the column.
    pub key: ColumnKey<R::Field>,
    /// Display label for the column header.
    pub label: String,
    /// Optional cell formatter; the value's string form is used otherwise.
    pub render: Option<CellFormatter<R>>,
    /// Optional CSV formatter; the value's string form is used otherwise.
    pub export: Option<CellFormatter<R>>,
    /// Display hint for the column (CSS classes in the web front end).
    pub class_name: Option<String>,
}

impl<R: Record> TableColumn<R> {
    /// Create a column backed by a record field.
    #[must_use]
    pub fn new(field: R::Field, label: &str) -> Self {
        Self {
            key: ColumnKey::Field(field),
            label: label.to_string(),
            render: None,
            export: None,
            class_name: None,
        }
    }

    /// Create a computed column.
    ///
    /// Derived columns have no field to fall back on, so they always carry a
    /// render function. They are left out of CSV exports.
    #[must_use]
    pub fn derived<F>(key: &'static str, label: &str, render: F) -> Self
    where
        F: Fn(&FieldValue<'_>, &R) -> String + Send + Sync + 'static,
    {
        Self {
            key: ColumnKey::Derived(key),
            label: label.to_string(),
            render: Some(Arc::new(render)),
            export: None,
            class_name: None,
        }
    }

    /// Set the cell formatter.
    #[must_use]
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&FieldValue<'_>, &R) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Set the formatter used when writing this column to CSV.
    #[must_use]
    pub fn export_with<F>(mut self, export: F) -> Self
    where
        F: Fn(&FieldValue<'_>, &R) -> String + Send + Sync + 'static,
    {
        self.export = Some(Arc::new(export));
        self
    }

    /// Set the display hint.
    #[must_use]
    pub fn class_name(mut self, class_name: &str) -> Self {
        self.class_name = Some(class_name.to_string());
        self
    }

    fn value<'r>(&self, record: &'r R) -> FieldValue<'r> {
        self.key
            .field()
            .map_or(FieldValue::Null, |field| record.field(field))
    }

    /// Display value of this column for one record.
    ///
    /// `render(value, record)` when a render function is set, else the
    /// string form of the value (empty for missing or null values).
    #[must_use]
    pub fn cell(&self, record: &R) -> String {
        let value = self.value(record);
        match &self.render {
            Some(render) => render(&value, record),
            None => value.to_string(),
        }
    }

    /// CSV value of this column, or `None` for derived columns.
    #[must_use]
    pub fn export_value(&self, record: &R) -> Option<String> {
        self.key.field()?;
        let value = self.value(record);
        Some(match &self.export {
            Some(export) => export(&value, record),
            None => value.to_string(),
        })
    }

    /// Whether the column appears in CSV exports.
    #[must_use]
    pub const fn is_exported(&self) -> bool {
        matches!(self.key, ColumnKey::Field(_))
    }
}

impl<R: Record> Clone for TableColumn<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label.clone(),
            render: self.render.clone(),
            export: self.export.clone(),
            class_name: self.class_name.clone(),
        }
    }
}

impl<R: Record> fmt::Debug for TableColumn<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableColumn")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .field("export", &self.export.as_ref().map(|_| "<fn>"))
            .field("class_name", &self.class_name)
            .finish()
    }
}

/// Filter type for data tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    /// Dropdown; matches the field's string form exactly.
    Select,
    /// Free text; case-insensitive substring of a text field.
    Text,
    /// Number input; numeric equality after coercion.
    Number,
    /// Date input; substring of the field's string form.
    Date,
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Select => "select",
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
        })
    }
}

/// Option for select filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Option value.
    pub value: String,
    /// Display label.
    pub label: String,
}

impl FilterOption {
    /// Create a new filter option.
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Filter definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFilter<F> {
    /// Field the filter applies to.
    pub field: F,
    /// How the filter value is compared.
    pub filter_type: FilterType,
    /// Display label.
    pub label: String,
    /// Fixed options for select filters; derived from the data when `None`.
    pub options: Option<Vec<FilterOption>>,
    /// Placeholder text.
    pub placeholder: Option<String>,
}

impl<F: FieldName> TableFilter<F> {
    fn with_type(field: F, filter_type: FilterType, label: &str) -> Self {
        Self {
            field,
            filter_type,
            label: label.to_string(),
            options: None,
            placeholder: None,
        }
    }

    /// Create a select filter.
    #[must_use]
    pub fn select(field: F, label: &str) -> Self {
        Self::with_type(field, FilterType::Select, label)
    }

    /// Create a text filter.
    #[must_use]
    pub fn text(field: F, label: &str) -> Self {
        Self::with_type(field, FilterType::Text, label)
    }

    /// Create a number filter.
    #[must_use]
    pub fn number(field: F, label: &str) -> Self {
        Self::with_type(field, FilterType::Number, label)
    }

    /// Create a date filter.
    #[must_use]
    pub fn date(field: F, label: &str) -> Self {
        Self::with_type(field, FilterType::Date, label)
    }

    /// Set fixed select options.
    #[must_use]
    pub fn options(mut self, options: Vec<FilterOption>) -> Self {
        self.options = Some(options);
        self
    }

    /// Set placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    /// Placeholder to display, falling back to one derived from the label.
    #[must_use]
    pub fn effective_placeholder(&self) -> Option<String> {
        if let Some(placeholder) = &self.placeholder {
            return Some(placeholder.clone());
        }
        let label = self.label.to_lowercase();
        match self.filter_type {
            FilterType::Select => Some(format!("All {label}")),
            FilterType::Text | FilterType::Number => Some(format!("Filter by {label}")),
            FilterType::Date => None,
        }
    }
}

/// Configuration for a data table.
pub struct TableConfig<R: Record> {
    /// Unique table identifier.
    pub table_id: String,
    /// Column definitions, in display order.
    pub columns: Vec<TableColumn<R>>,
    /// Fields searched by the free-text search box.
    pub search_fields: Vec<R::Field>,
    /// Filter definitions, in display order.
    pub filters: Vec<TableFilter<R::Field>>,
    /// Whether the table offers CSV export.
    pub exportable: bool,
    /// File name of the CSV export.
    pub export_filename: String,
    /// Search placeholder text.
    pub search_placeholder: String,
    /// Shown when the table is empty and nothing is filtered.
    pub empty_message: String,
    /// Shown when filters or search leave no rows.
    pub no_results_message: String,
}

impl<R: Record> TableConfig<R> {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: vec![],
            search_fields: vec![],
            filters: vec![],
            exportable: false,
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
            search_placeholder: "Search...".to_string(),
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            no_results_message: DEFAULT_NO_RESULTS_MESSAGE.to_string(),
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn<R>) -> Self {
        self.columns.push(column);
        self
    }

    /// Set the fields searched by free-text search.
    #[must_use]
    pub fn search_fields(mut self, fields: &[R::Field]) -> Self {
        self.search_fields = fields.to_vec();
        self
    }

    /// Add a filter.
    #[must_use]
    pub fn filter(mut self, filter: TableFilter<R::Field>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Enable CSV export under the given file name.
    #[must_use]
    pub fn exportable(mut self, filename: &str) -> Self {
        self.exportable = true;
        self.export_filename = filename.to_string();
        self
    }

    /// Set search placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &str) -> Self {
        self.search_placeholder = placeholder.to_string();
        self
    }

    /// Set the empty-state messages.
    #[must_use]
    pub fn empty_state(mut self, empty: &str, no_results: &str) -> Self {
        self.empty_message = empty.to_string();
        self.no_results_message = no_results.to_string();
        self
    }

    /// Whether the table has any filter definitions.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Filter definition for a field, if one is configured.
    #[must_use]
    pub fn filter_for(&self, field: R::Field) -> Option<&TableFilter<R::Field>> {
        self.filters.iter().find(|filter| filter.field == field)
    }
}

impl<R: Record> fmt::Debug for TableConfig<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableConfig")
            .field("table_id", &self.table_id)
            .field("columns", &self.columns)
            .field("search_fields", &self.search_fields)
            .field("filters", &self.filters)
            .field("exportable", &self.exportable)
            .field("export_filename", &self.export_filename)
            .finish_non_exhaustive()
    }
}
