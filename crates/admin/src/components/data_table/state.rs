//! Search and filter state of one table view.

use serde::Serialize;

use super::FieldName;

/// Observable mode of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableMode {
    /// Empty search term and no non-empty filter.
    Unfiltered,
    /// A search term or at least one non-empty filter is set.
    Filtered,
}

/// Search term plus per-field filter values.
///
/// Owned by a single table instance and never persisted. Active filters keep
/// the order in which they were first set, which is the order chips are shown.
/// An entry may hold an empty value; empty values never constrain the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<F> {
    search_term: String,
    active_filters: Vec<(F, String)>,
}

impl<F: FieldName> Default for FilterState<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FieldName> FilterState<F> {
    /// Empty state: no search term, no filters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            search_term: String::new(),
            active_filters: Vec::new(),
        }
    }

    /// Current search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// All filter entries, including those set to an empty value.
    #[must_use]
    pub fn active_filters(&self) -> &[(F, String)] {
        &self.active_filters
    }

    /// Value of the filter on `field`, if an entry exists.
    #[must_use]
    pub fn filter_value(&self, field: F) -> Option<&str> {
        self.active_filters
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| value.as_str())
    }

    /// Replace the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Set the value of one filter, keeping its position if already present.
    pub fn set_filter(&mut self, field: F, value: impl Into<String>) {
        let value = value.into();
        match self.active_filters.iter_mut().find(|(f, _)| *f == field) {
            Some((_, existing)) => *existing = value,
            None => self.active_filters.push((field, value)),
        }
    }

    /// Remove the entry for one field. The search term is left untouched.
    pub fn clear_filter(&mut self, field: F) {
        self.active_filters.retain(|(f, _)| *f != field);
    }

    /// Reset the search term and drop every filter.
    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.active_filters.clear();
    }

    /// Non-empty filter entries.
    pub fn non_empty_filters(&self) -> impl Iterator<Item = (F, &str)> {
        self.active_filters
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(field, value)| (*field, value.as_str()))
    }

    /// True when the search term or any filter value is non-empty.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty() || self.non_empty_filters().next().is_some()
    }

    /// Non-empty filters, plus one for a non-empty search term.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.non_empty_filters().count() + usize::from(!self.search_term.is_empty())
    }

    /// Current mode of the table.
    #[must_use]
    pub fn mode(&self) -> TableMode {
        if self.has_active_filters() {
            TableMode::Filtered
        } else {
            TableMode::Unfiltered
        }
    }
}
