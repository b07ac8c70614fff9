//! CSV export of the filtered rows.
//!
//! Building the CSV text is pure and testable. Handing the file to the user
//! is the side-effecting boundary: [`CsvExport::save_to`] writes it into a
//! directory, and web handlers serve [`CsvExport::content`] as an attachment.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{Record, TableColumn};

/// Errors that can occur while producing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer rejected a record.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The buffered CSV output could not be recovered.
    #[error("CSV encoding error: {0}")]
    Encoding(String),

    /// Writing the export file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A CSV file ready to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// Suggested file name.
    pub filename: String,
    /// CSV text: header line plus one line per record, `\n` separated.
    pub content: String,
    /// Number of data rows.
    pub rows: usize,
}

impl CsvExport {
    /// Write the export into `dir` under its file name.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Io` if the file cannot be written.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.content)?;
        tracing::info!(path = %path.display(), rows = self.rows, "CSV export written");
        Ok(path)
    }
}

/// Build the CSV text for `records` using the column definitions.
///
/// The header row holds the labels of the exported columns in declaration
/// order; derived columns are skipped. Every field is quoted, embedded quotes
/// are doubled, and lines are joined by `\n` without a trailing newline.
///
/// # Errors
///
/// Returns `ExportError` if the CSV writer fails.
pub fn csv_content<R: Record>(
    records: &[&R],
    columns: &[TableColumn<R>],
) -> Result<String, ExportError> {
    let exported: Vec<&TableColumn<R>> = columns.iter().filter(|c| c.is_exported()).collect();

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(exported.iter().map(|column| column.label.as_str()))?;
    for record in records {
        writer.write_record(
            exported
                .iter()
                .map(|column| column.export_value(record).unwrap_or_default()),
        )?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Encoding(e.to_string()))?;
    let mut content = String::from_utf8(bytes).map_err(|e| ExportError::Encoding(e.to_string()))?;
    if content.ends_with('\n') {
        content.pop();
    }
    Ok(content)
}

/// Export `records` to a CSV file named `filename` (default `export.csv`).
///
/// Returns `Ok(None)` without producing anything when there is nothing to
/// export: no records, or no column backed by a record field.
///
/// # Errors
///
/// Returns `ExportError` if the CSV writer fails.
pub fn export_to_csv<R: Record>(
    records: &[&R],
    columns: &[TableColumn<R>],
    filename: Option<&str>,
) -> Result<Option<CsvExport>, ExportError> {
    if records.is_empty() {
        tracing::debug!("Nothing to export");
        return Ok(None);
    }
    if !columns.iter().any(TableColumn::is_exported) {
        tracing::warn!("Export requested for a table without field-backed columns");
        return Ok(None);
    }

    let content = csv_content(records, columns)?;
    Ok(Some(CsvExport {
        filename: filename
            .unwrap_or(super::DEFAULT_EXPORT_FILENAME)
            .to_string(),
        content,
        rows: records.len(),
    }))
}
