//! Filter engine: free-text search plus field-scoped filters.
//!
//! Everything here is pure and synchronous. A record is kept when it passes
//! the search stage and every non-empty filter. Input order is preserved.

use std::collections::HashSet;

use super::{FieldName, FieldValue, FilterOption, FilterType, Record, TableFilter};

/// Compute the records visible under the given search term and filters.
///
/// - Search: an empty term matches everything; otherwise at least one of
///   `search_fields` must be a text value containing the term, ignoring case.
/// - Filters: every non-empty `(field, value)` entry must match according to
///   the type of the filter definition on that field. Entries without a
///   definition are ignored.
#[must_use]
pub fn compute_filtered_data<'r, R: Record>(
    records: &'r [R],
    search_term: &str,
    active_filters: &[(R::Field, String)],
    search_fields: &[R::Field],
    filters: &[TableFilter<R::Field>],
) -> Vec<&'r R> {
    let needle = search_term.to_lowercase();

    let filtered: Vec<&R> = records
        .iter()
        .filter(|record| {
            matches_search(*record, &needle, search_fields)
                && matches_filters(*record, active_filters, filters)
        })
        .collect();

    tracing::debug!(
        total = records.len(),
        shown = filtered.len(),
        search = search_term,
        filters = active_filters.len(),
        "Filtered table data"
    );
    filtered
}

/// Search stage. `needle` must already be lowercased.
fn matches_search<R: Record>(record: &R, needle: &str, search_fields: &[R::Field]) -> bool {
    if needle.is_empty() {
        return true;
    }
    search_fields.iter().any(|field| {
        record
            .field(*field)
            .as_text()
            .is_some_and(|text| text.to_lowercase().contains(needle))
    })
}

/// Filter stage: logical AND across all non-empty entries.
fn matches_filters<R: Record>(
    record: &R,
    active_filters: &[(R::Field, String)],
    filters: &[TableFilter<R::Field>],
) -> bool {
    active_filters.iter().all(|(field, wanted)| {
        if wanted.is_empty() {
            return true;
        }
        let Some(filter) = filters.iter().find(|filter| filter.field == *field) else {
            return true;
        };
        matches_value(&record.field(*field), filter.filter_type, wanted)
    })
}

/// Compare one field value against a filter value.
///
/// `Null` never matches a non-empty filter value.
#[must_use]
pub fn matches_value(value: &FieldValue<'_>, filter_type: FilterType, wanted: &str) -> bool {
    if value.is_null() {
        return false;
    }
    match filter_type {
        FilterType::Select => value.to_string() == wanted,
        FilterType::Text => value
            .as_text()
            .is_some_and(|text| text.to_lowercase().contains(&wanted.to_lowercase())),
        FilterType::Number => {
            let wanted = wanted.trim().parse::<f64>().ok();
            match (value.as_number(), wanted) {
                #[allow(clippy::float_cmp)]
                (Some(have), Some(wanted)) => have == wanted,
                _ => false,
            }
        }
        // Substring on the string form; not calendar aware.
        FilterType::Date => value.to_string().contains(wanted),
    }
}

/// Distinct string forms of `field` across `records`, sorted by label.
///
/// Null and empty values are skipped. Sorting ignores case first and falls
/// back to the raw string so the order is total.
#[must_use]
pub fn unique_values<R: Record>(records: &[R], field: R::Field) -> Vec<FilterOption> {
    let mut seen = HashSet::new();
    let mut values: Vec<String> = records
        .iter()
        .map(|record| record.field(field).to_string())
        .filter(|value| !value.is_empty() && seen.insert(value.clone()))
        .collect();

    values.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });

    tracing::trace!(field = field.as_str(), count = values.len(), "Derived filter options");
    values
        .into_iter()
        .map(|value| FilterOption {
            label: value.clone(),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record_fields;
    use pretty_assertions::assert_eq;

    record_fields! {
        enum StaffField {
            Id => "id",
            Name => "name",
            Email => "email",
            Role => "role",
            Seats => "seats",
            Joined => "joined",
        }
    }

    #[derive(Debug, PartialEq)]
    struct Staff {
        id: i64,
        name: &'static str,
        email: Option<&'static str>,
        role: &'static str,
        seats: i64,
        joined: &'static str,
    }

    impl Record for Staff {
        type Field = StaffField;
        const ID_FIELD: StaffField = StaffField::Id;

        fn field(&self, field: StaffField) -> FieldValue<'_> {
            match field {
                StaffField::Id => self.id.into(),
                StaffField::Name => self.name.into(),
                StaffField::Email => self.email.into(),
                StaffField::Role => self.role.into(),
                StaffField::Seats => self.seats.into(),
                StaffField::Joined => self.joined.into(),
            }
        }
    }

    fn staff() -> Vec<Staff> {
        vec![
            Staff {
                id: 1,
                name: "Alice",
                email: Some("alice@bistro.fr"),
                role: "user",
                seats: 2,
                joined: "2024-01-15T09:00:00.000Z",
            },
            Staff {
                id: 2,
                name: "Bob",
                email: None,
                role: "admin",
                seats: 4,
                joined: "2024-02-01T12:30:00.000Z",
            },
            Staff {
                id: 3,
                name: "Jose",
                email: Some("Jose@x.com"),
                role: "user",
                seats: 4,
                joined: "2023-12-24T18:00:00.000Z",
            },
        ]
    }

    fn filters() -> Vec<TableFilter<StaffField>> {
        vec![
            TableFilter::select(StaffField::Role, "Role"),
            TableFilter::text(StaffField::Name, "Name"),
            TableFilter::number(StaffField::Seats, "Seats"),
            TableFilter::date(StaffField::Joined, "Joined"),
        ]
    }

    fn ids(records: &[&Staff]) -> Vec<i64> {
        records.iter().map(|s| s.id).collect()
    }

    fn run(search: &str, active: &[(StaffField, &str)]) -> Vec<i64> {
        let records = staff();
        let active: Vec<(StaffField, String)> = active
            .iter()
            .map(|(f, v)| (*f, (*v).to_string()))
            .collect();
        let result = compute_filtered_data(
            &records,
            search,
            &active,
            &[StaffField::Name, StaffField::Email, StaffField::Id],
            &filters(),
        );
        ids(&result)
    }

    #[test]
    fn test_empty_state_returns_everything_in_order() {
        assert_eq!(run("", &[]), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        assert_eq!(run("al", &[]), vec![1]);
        assert_eq!(run("os", &[]), vec![3]);
        assert_eq!(run("BISTRO", &[]), vec![1]);
    }

    #[test]
    fn test_search_skips_non_text_fields() {
        // `id` is searchable but numeric, so it never matches.
        assert_eq!(run("2", &[]), Vec::<i64>::new());
    }

    #[test]
    fn test_search_without_matches_is_empty() {
        assert!(run("zzz", &[]).is_empty());
    }

    #[test]
    fn test_select_filter_is_exact() {
        assert_eq!(run("", &[(StaffField::Role, "admin")]), vec![2]);
        assert!(run("", &[(StaffField::Role, "adm")]).is_empty());
    }

    #[test]
    fn test_text_filter_is_case_insensitive() {
        assert_eq!(run("", &[(StaffField::Name, "JO")]), vec![3]);
    }

    #[test]
    fn test_number_filter_coerces() {
        assert_eq!(run("", &[(StaffField::Seats, " 4.0 ")]), vec![2, 3]);
        assert!(run("", &[(StaffField::Seats, "four")]).is_empty());
    }

    #[test]
    fn test_date_filter_is_substring() {
        assert_eq!(run("", &[(StaffField::Joined, "2024-0")]), vec![1, 2]);
    }

    #[test]
    fn test_filters_and_search_are_combined() {
        // "alice@bistro.fr" and "Jose" both contain an "o"; Bob is filtered out by role.
        assert_eq!(run("o", &[(StaffField::Role, "user")]), vec![1, 3]);
    }

    #[test]
    fn test_empty_filter_value_is_ignored() {
        assert_eq!(run("", &[(StaffField::Role, "")]), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_without_definition_is_ignored() {
        assert_eq!(run("", &[(StaffField::Email, "nobody")]), vec![1, 2, 3]);
    }

    #[test]
    fn test_null_never_matches() {
        assert!(!matches_value(&FieldValue::Null, FilterType::Select, "x"));
        assert!(!matches_value(&FieldValue::Null, FilterType::Number, "0"));
    }

    #[test]
    fn test_unique_values_sorted_and_distinct() {
        let records = staff();
        let roles = unique_values(&records, StaffField::Role);
        assert_eq!(
            roles,
            vec![FilterOption::new("admin", "admin"), FilterOption::new("user", "user")]
        );
    }

    #[test]
    fn test_unique_values_skips_nulls() {
        let records = staff();
        let emails = unique_values(&records, StaffField::Email);
        assert_eq!(
            emails.iter().map(|o| o.value.as_str()).collect::<Vec<_>>(),
            vec!["alice@bistro.fr", "Jose@x.com"]
        );
    }
}
