//! A table instance: one configuration, one collection, one filter state.

use super::{
    CsvExport, ExportError, FieldName, FilterChip, FilterOption, FilterState, FilterType,
    RenderedTable, Record, ResultSummary, TableConfig, TableMode, compute_filtered_data,
    export_to_csv, filter_chips, render_table, unique_values,
};

/// Interactive state of one table on screen.
///
/// Holds the records fetched for the view and the user's search and filter
/// state. The filtered view is recomputed on demand; nothing is cached, so
/// the result always reflects the current records and state.
#[derive(Debug)]
pub struct DataTable<'c, R: Record> {
    config: &'c TableConfig<R>,
    records: Vec<R>,
    state: FilterState<R::Field>,
    filters_expanded: bool,
}

impl<'c, R: Record> DataTable<'c, R> {
    /// Create an unfiltered table over `records`.
    #[must_use]
    pub const fn new(config: &'c TableConfig<R>, records: Vec<R>) -> Self {
        Self {
            config,
            records,
            state: FilterState::new(),
            filters_expanded: false,
        }
    }

    /// Table configuration.
    #[must_use]
    pub const fn config(&self) -> &'c TableConfig<R> {
        self.config
    }

    /// Current filter state.
    #[must_use]
    pub const fn state(&self) -> &FilterState<R::Field> {
        &self.state
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.set_search_term(term);
    }

    pub fn set_filter(&mut self, field: R::Field, value: impl Into<String>) {
        self.state.set_filter(field, value);
    }

    /// Set a filter by the field's wire name.
    ///
    /// Returns `false` and leaves the state untouched when the record has no
    /// such field.
    pub fn set_filter_by_name(&mut self, name: &str, value: impl Into<String>) -> bool {
        let Some(field) = R::Field::from_name(name) else {
            tracing::debug!(field = name, table = %self.config.table_id, "Unknown filter field");
            return false;
        };
        self.state.set_filter(field, value);
        true
    }

    pub fn clear_filter(&mut self, field: R::Field) {
        self.state.clear_filter(field);
    }

    pub fn clear_filters(&mut self) {
        self.state.clear_filters();
    }

    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.state.has_active_filters()
    }

    #[must_use]
    pub fn mode(&self) -> TableMode {
        self.state.mode()
    }

    /// Badge count on the filters button.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.state.active_filter_count()
    }

    #[must_use]
    pub fn active_filter_chips(&self) -> Vec<FilterChip> {
        filter_chips(self.config, &self.state)
    }

    /// Records visible under the current search and filters, in input order.
    #[must_use]
    pub fn filtered_data(&self) -> Vec<&R> {
        compute_filtered_data(
            &self.records,
            self.state.search_term(),
            self.state.active_filters(),
            &self.config.search_fields,
            &self.config.filters,
        )
    }

    /// Distinct values of `field` across all records.
    #[must_use]
    pub fn unique_values(&self, field: R::Field) -> Vec<FilterOption> {
        unique_values(&self.records, field)
    }

    /// Options offered by the filter on `field`.
    ///
    /// Fixed options from the configuration win; select filters without them
    /// fall back to the values present in the data. Other filter types and
    /// fields without a filter have no options.
    #[must_use]
    pub fn filter_options(&self, field: R::Field) -> Vec<FilterOption> {
        match self.config.filter_for(field) {
            Some(filter) => match (&filter.options, filter.filter_type) {
                (Some(options), _) => options.clone(),
                (None, FilterType::Select) => self.unique_values(field),
                (None, _) => Vec::new(),
            },
            None => Vec::new(),
        }
    }

    #[must_use]
    pub fn filter_placeholder(&self, field: R::Field) -> Option<String> {
        self.config
            .filter_for(field)
            .and_then(|filter| filter.effective_placeholder())
    }

    #[must_use]
    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            shown: self.filtered_data().len(),
            total: self.records.len(),
            filtered: self.has_active_filters(),
        }
    }

    /// Render the filtered rows.
    #[must_use]
    pub fn render(&self) -> RenderedTable {
        let rows = self.filtered_data();
        render_table(self.config, &rows, &self.state, self.records.len())
    }

    /// Export the filtered rows under the configured file name.
    ///
    /// Returns `Ok(None)` when the table is not exportable or nothing is shown.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the CSV writer fails.
    pub fn export_csv(&self) -> Result<Option<CsvExport>, ExportError> {
        if !self.config.exportable {
            tracing::debug!(table = %self.config.table_id, "Table is not exportable");
            return Ok(None);
        }
        let rows = self.filtered_data();
        export_to_csv(
            &rows,
            &self.config.columns,
            Some(&self.config.export_filename),
        )
    }

    /// Toggle the filter panel. Tables without filters have no panel.
    pub fn toggle_filters(&mut self) {
        if self.config.has_filters() {
            self.filters_expanded = !self.filters_expanded;
        }
    }

    pub fn close_filters(&mut self) {
        self.filters_expanded = false;
    }

    #[must_use]
    pub const fn filters_expanded(&self) -> bool {
        self.filters_expanded
    }
}
