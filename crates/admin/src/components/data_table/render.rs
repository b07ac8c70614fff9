//! Turning configuration plus filtered rows into displayable cells.

use std::fmt;

use serde::Serialize;

use super::{FieldName, FilterState, Record, TableConfig, TableMode};

/// Column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    /// Column key.
    pub key: &'static str,
    /// Display label.
    pub label: String,
    /// Display hint.
    pub class_name: Option<String>,
}

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Display value.
    pub value: String,
    /// Display hint inherited from the column.
    pub class_name: Option<String>,
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    /// Identity of the record the row was rendered from.
    pub id: String,
    /// Cells, one per column in declaration order.
    pub cells: Vec<Cell>,
}

/// An active search or filter condition, for display as a removable chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    /// Filtered field; `None` for the search term.
    pub field: Option<&'static str>,
    /// Chip label: the filter label, or the field name without a definition.
    pub label: String,
    /// Current value.
    pub value: String,
}

/// "N results found" line under the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    /// Rows after filtering.
    pub shown: usize,
    /// Rows before filtering.
    pub total: usize,
    /// Whether any search or filter is active.
    pub filtered: bool,
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.shown == 1 { "" } else { "s" };
        write!(f, "{} result{plural} found", self.shown)?;
        if self.filtered {
            write!(f, " out of {} total", self.total)?;
        }
        Ok(())
    }
}

/// Fully rendered table, ready for a template or a terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTable {
    /// Table identifier.
    pub table_id: String,
    /// Observable table mode.
    pub mode: TableMode,
    /// Column headers.
    pub headers: Vec<HeaderCell>,
    /// Rendered rows.
    pub rows: Vec<RenderedRow>,
    /// Empty-state message when there are no rows.
    pub empty_state: Option<String>,
    /// Active search and filter chips.
    pub chips: Vec<FilterChip>,
    /// Result count line.
    pub summary: ResultSummary,
}

/// Chips for the search term and every non-empty filter.
#[must_use]
pub fn filter_chips<R: Record>(
    config: &TableConfig<R>,
    state: &FilterState<R::Field>,
) -> Vec<FilterChip> {
    let mut chips = Vec::new();
    if !state.search_term().is_empty() {
        chips.push(FilterChip {
            field: None,
            label: "Search".to_string(),
            value: state.search_term().to_string(),
        });
    }
    for (field, value) in state.non_empty_filters() {
        let label = config
            .filter_for(field)
            .map_or_else(|| field.as_str().to_string(), |f| f.label.clone());
        chips.push(FilterChip {
            field: Some(field.as_str()),
            label,
            value: value.to_string(),
        });
    }
    chips
}

/// Render `rows` with the columns of `config`.
///
/// `total` is the size of the unfiltered collection, used for the summary.
/// With no rows, `empty_state` carries `no_results_message` when filters are
/// active and `empty_message` otherwise.
#[must_use]
pub fn render_table<R: Record>(
    config: &TableConfig<R>,
    rows: &[&R],
    state: &FilterState<R::Field>,
    total: usize,
) -> RenderedTable {
    let headers = config
        .columns
        .iter()
        .map(|column| HeaderCell {
            key: column.key.as_str(),
            label: column.label.clone(),
            class_name: column.class_name.clone(),
        })
        .collect();

    let rendered_rows = rows
        .iter()
        .map(|record| RenderedRow {
            id: record.record_id(),
            cells: config
                .columns
                .iter()
                .map(|column| Cell {
                    value: column.cell(record),
                    class_name: column.class_name.clone(),
                })
                .collect(),
        })
        .collect();

    let filtered = state.has_active_filters();
    let empty_state = rows.is_empty().then(|| {
        if filtered {
            config.no_results_message.clone()
        } else {
            config.empty_message.clone()
        }
    });

    RenderedTable {
        table_id: config.table_id.clone(),
        mode: state.mode(),
        headers,
        rows: rendered_rows,
        empty_state,
        chips: filter_chips(config, state),
        summary: ResultSummary {
            shown: rows.len(),
            total,
            filtered,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_display() {
        let summary = ResultSummary {
            shown: 1,
            total: 1,
            filtered: false,
        };
        assert_eq!(summary.to_string(), "1 result found");

        let summary = ResultSummary {
            shown: 3,
            total: 10,
            filtered: true,
        };
        assert_eq!(summary.to_string(), "3 results found out of 10 total");

        let summary = ResultSummary {
            shown: 0,
            total: 10,
            filtered: true,
        };
        assert_eq!(summary.to_string(), "0 results found out of 10 total");
    }
}
