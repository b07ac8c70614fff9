//! Configuration-driven data table.
//!
//! Every list page in the admin (users, administrators, food styles) is the
//! same table with different columns. A [`TableConfig`] describes the columns,
//! searchable fields, filters and export settings for one entity type; a
//! [`DataTable`] combines it with fetched records and the user's
//! [`FilterState`].
//!
//! The pipeline is pure and synchronous:
//!
//! 1. [`compute_filtered_data`] applies the search term and active filters.
//! 2. [`render_table`] turns the filtered rows into display cells.
//! 3. [`export_to_csv`] writes the filtered rows as a quoted CSV file.
//!
//! Records plug in through the [`Record`] trait, whose field enum is usually
//! generated with [`record_fields!`](crate::record_fields).
//!
//! # Example
//!
//! ```rust
//! use toque_admin::components::data_table::{
//!     DataTable, FieldValue, Record, TableColumn, TableConfig, TableFilter,
//! };
//! use toque_admin::record_fields;
//!
//! record_fields! {
//!     pub enum DishField {
//!         Id => "id",
//!         Name => "name",
//!         Course => "course",
//!     }
//! }
//!
//! struct Dish {
//!     id: i64,
//!     name: &'static str,
//!     course: &'static str,
//! }
//!
//! impl Record for Dish {
//!     type Field = DishField;
//!     const ID_FIELD: DishField = DishField::Id;
//!
//!     fn field(&self, field: DishField) -> FieldValue<'_> {
//!         match field {
//!             DishField::Id => self.id.into(),
//!             DishField::Name => self.name.into(),
//!             DishField::Course => self.course.into(),
//!         }
//!     }
//! }
//!
//! let config = TableConfig::new("dishes-table")
//!     .column(TableColumn::new(DishField::Name, "Name"))
//!     .column(TableColumn::new(DishField::Course, "Course"))
//!     .search_fields(&[DishField::Name])
//!     .filter(TableFilter::select(DishField::Course, "Course"))
//!     .exportable("dishes.csv");
//!
//! let mut table = DataTable::new(
//!     &config,
//!     vec![
//!         Dish { id: 1, name: "Ratatouille", course: "main" },
//!         Dish { id: 2, name: "Tarte Tatin", course: "dessert" },
//!     ],
//! );
//!
//! table.set_filter(DishField::Course, "dessert");
//! assert_eq!(table.filtered_data().len(), 1);
//! assert_eq!(table.render().rows[0].cells[0].value, "Tarte Tatin");
//! ```

mod config;
mod export;
mod filter;
mod record;
mod render;
mod state;
mod table;
mod value;

pub use config::{
    CellFormatter, ColumnKey, DEFAULT_EMPTY_MESSAGE, DEFAULT_EXPORT_FILENAME,
    DEFAULT_NO_RESULTS_MESSAGE, FilterOption, FilterType, TableColumn, TableConfig, TableFilter,
};
pub use export::{CsvExport, ExportError, csv_content, export_to_csv};
pub use filter::{compute_filtered_data, matches_value, unique_values};
pub use record::{FieldName, Record};
pub use render::{
    Cell, FilterChip, HeaderCell, RenderedRow, RenderedTable, ResultSummary, filter_chips,
    render_table,
};
pub use state::{FilterState, TableMode};
pub use table::DataTable;
pub use value::FieldValue;
