//! Terminal rendering.

use std::io::{self, Write};

use toque_admin::components::data_table::RenderedTable;
use toque_admin::models::UserProfile;

use crate::error::CliError;

const COLUMN_GAP: &str = "  ";

/// Write a rendered table as aligned plain text.
///
/// Layout: header, separator, rows (or the empty-state message), then the
/// active conditions and the result count.
pub fn write_table<W: Write>(out: &mut W, table: &RenderedTable) -> io::Result<()> {
    let mut widths: Vec<usize> = table
        .headers
        .iter()
        .map(|h| h.label.chars().count())
        .collect();
    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.value.chars().count());
        }
    }

    let header: Vec<&str> = table.headers.iter().map(|h| h.label.as_str()).collect();
    write_line(out, &header, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_line(out, &rule, &widths)?;

    if let Some(message) = &table.empty_state {
        writeln!(out, "{message}")?;
    }
    for row in &table.rows {
        let cells: Vec<&str> = row.cells.iter().map(|c| c.value.as_str()).collect();
        write_line(out, &cells, &widths)?;
    }

    writeln!(out)?;
    if !table.chips.is_empty() {
        let chips: Vec<String> = table
            .chips
            .iter()
            .map(|chip| format!("{}: \"{}\"", chip.label, chip.value))
            .collect();
        writeln!(out, "{}", chips.join(COLUMN_GAP))?;
    }
    writeln!(out, "{}", table.summary)
}

fn write_line<W: Write, S: AsRef<str>>(out: &mut W, cells: &[S], widths: &[usize]) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    writeln!(out, "{}", line.trim_end())
}

/// Write a user's profile as `label: value` lines.
pub fn write_profile<W: Write>(out: &mut W, profile: &UserProfile) -> io::Result<()> {
    let or_dash = |value: Option<&String>| value.map_or("-", String::as_str).to_string();
    let name = [profile.first_name.as_deref(), profile.last_name.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    let lines = [
        ("ID", profile.user_id.to_string()),
        ("Name", if name.is_empty() { "-".to_string() } else { name }),
        ("Email", profile.user.email.clone()),
        ("Role", profile.user.role.to_string()),
        ("Provider", profile.user.provider.to_string()),
        ("Phone", or_dash(profile.phone_number.as_ref())),
        ("Address", or_dash(profile.address.as_ref())),
        ("City", or_dash(profile.city.as_ref())),
        ("Postal code", or_dash(profile.postal_code.as_ref())),
        ("Country", or_dash(profile.country.as_ref())),
        ("Food styles", profile.food_style_names().join(", ")),
    ];
    for (label, value) in lines {
        writeln!(out, "{label:<12}{value}")?;
    }
    if let Some(stats) = &profile.review_stats {
        writeln!(
            out,
            "{:<12}{} ({:.1} average)",
            "Reviews", stats.total_reviews, stats.average_rating
        )?;
    }
    Ok(())
}

/// Print the error for the operator on stderr.
pub fn report_error(error: &CliError) {
    let _ = writeln!(io::stderr().lock(), "error: {}", error.user_message());
}
