//! End-to-end tests for the data-table engine.
//!
//! The first half uses a minimal `id/name/email/role` record; the second half
//! drives the real account and food style tables.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use pretty_assertions::assert_eq;

use toque_admin::components::data_table::{
    DataTable, FieldName, FieldValue, FilterState, Record, TableColumn, TableConfig, TableFilter,
    TableMode, compute_filtered_data, export_to_csv, unique_values,
};
use toque_admin::components::tables::{
    administrators_table_config, food_styles_table_config, users_table_config,
};
use toque_admin::models::BaseUserField;
use toque_admin::record_fields;
use toque_core::UserRole;
use toque_integration_tests::{account, food_style, sample_accounts};

record_fields! {
    enum MemberField {
        Id => "id",
        Name => "name",
        Email => "email",
        Role => "role",
    }
}

#[derive(Debug)]
struct Member {
    id: i64,
    name: String,
    email: String,
    role: String,
}

impl Record for Member {
    type Field = MemberField;
    const ID_FIELD: MemberField = MemberField::Id;

    fn field(&self, field: MemberField) -> FieldValue<'_> {
        match field {
            MemberField::Id => self.id.into(),
            MemberField::Name => (&self.name).into(),
            MemberField::Email => (&self.email).into(),
            MemberField::Role => (&self.role).into(),
        }
    }
}

fn member(id: i64, name: &str, email: &str, role: &str) -> Member {
    Member {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
    }
}

fn members() -> Vec<Member> {
    vec![
        member(1, "Alice", "a@x.com", "user"),
        member(2, "Bob", "b@x.com", "admin"),
    ]
}

fn member_config() -> TableConfig<Member> {
    TableConfig::new("members")
        .column(TableColumn::new(MemberField::Id, "ID"))
        .column(TableColumn::new(MemberField::Name, "Name"))
        .column(TableColumn::new(MemberField::Email, "Email"))
        .column(TableColumn::new(MemberField::Role, "Role"))
        .search_fields(&[MemberField::Name, MemberField::Email, MemberField::Id])
        .filter(TableFilter::select(MemberField::Role, "Role"))
        .exportable("members.csv")
}

fn ids(rows: &[&Member]) -> Vec<i64> {
    rows.iter().map(|m| m.id).collect()
}

// =============================================================================
// Filter Engine
// =============================================================================

#[test]
fn test_search_al_finds_alice() {
    let records = members();
    let config = member_config();
    let rows = compute_filtered_data(&records, "al", &[], &config.search_fields, &config.filters);
    assert_eq!(ids(&rows), vec![1]);
}

#[test]
fn test_role_admin_finds_bob() {
    let records = members();
    let config = member_config();
    let active = vec![(MemberField::Role, "admin".to_string())];
    let rows = compute_filtered_data(&records, "", &active, &config.search_fields, &config.filters);
    assert_eq!(ids(&rows), vec![2]);
}

#[test]
fn test_empty_state_is_identity() {
    let records = members();
    let config = member_config();
    let rows = compute_filtered_data(&records, "", &[], &config.search_fields, &config.filters);
    assert_eq!(ids(&rows), vec![1, 2]);
}

#[test]
fn test_result_is_subset_in_input_order() {
    let records = vec![
        member(5, "Zoe", "z@x.com", "user"),
        member(3, "Ana", "ana@x.com", "user"),
        member(4, "Bea", "bea@x.com", "admin"),
    ];
    let config = member_config();
    let rows = compute_filtered_data(&records, "a", &[], &config.search_fields, &config.filters);
    assert_eq!(ids(&rows), vec![3, 4]);
}

#[test]
fn test_search_is_case_insensitive() {
    let records = vec![member(9, "Jose", "Jose@x.com", "user")];
    let config = member_config();
    for term in ["os", "OS", "jOsE@"] {
        let rows = compute_filtered_data(&records, term, &[], &config.search_fields, &config.filters);
        assert_eq!(ids(&rows), vec![9], "term {term:?}");
    }
}

#[test]
fn test_clear_filter_leaves_search() {
    let mut state = FilterState::new();
    state.set_search_term("x");
    state.set_filter(MemberField::Role, "admin");
    state.clear_filter(MemberField::Role);

    assert_eq!(state.search_term(), "x");
    assert!(state.filter_value(MemberField::Role).is_none());
}

#[test]
fn test_has_active_filters_ignores_empty_values() {
    let mut state = FilterState::new();
    state.set_filter(MemberField::Role, "");
    assert!(!state.has_active_filters());
    state.set_search_term("b");
    assert!(state.has_active_filters());
    state.clear_filters();
    assert_eq!(state.mode(), TableMode::Unfiltered);
}

#[test]
fn test_unique_values() {
    let records = members();
    let values: Vec<String> = unique_values(&records, MemberField::Role)
        .into_iter()
        .map(|o| o.value)
        .collect();
    assert_eq!(values, vec!["admin", "user"]);
}

#[test]
fn test_field_names_round_trip() {
    for field in MemberField::ALL {
        assert_eq!(MemberField::from_name(field.as_str()), Some(*field));
    }
}

// =============================================================================
// Export Engine
// =============================================================================

#[test]
fn test_export_escapes_quotes() {
    let records = vec![member(1, "O\"Brien", "o@x.com", "user")];
    let refs: Vec<&Member> = records.iter().collect();
    let export = export_to_csv(&refs, &member_config().columns, None)
        .unwrap()
        .unwrap();

    assert_eq!(export.filename, "export.csv");
    assert!(export.content.contains("\"O\"\"Brien\""));
}

#[test]
fn test_export_has_header_plus_one_line_per_record() {
    let records = members();
    let refs: Vec<&Member> = records.iter().collect();
    let export = export_to_csv(&refs, &member_config().columns, Some("members.csv"))
        .unwrap()
        .unwrap();

    assert_eq!(
        export.content,
        "\"ID\",\"Name\",\"Email\",\"Role\"\n\
         \"1\",\"Alice\",\"a@x.com\",\"user\"\n\
         \"2\",\"Bob\",\"b@x.com\",\"admin\""
    );
    assert_eq!(export.content.split('\n').count(), refs.len() + 1);
}

#[test]
fn test_export_empty_is_noop() {
    let export = export_to_csv::<Member>(&[], &member_config().columns, None).unwrap();
    assert!(export.is_none());
}

// =============================================================================
// Account and Food Style Tables
// =============================================================================

#[test]
fn test_users_table_search_and_filters() {
    let config = users_table_config();
    let mut table = DataTable::new(&config, sample_accounts());

    table.set_search_term("os");
    assert_eq!(table.filtered_data().len(), 1);
    assert_eq!(table.filtered_data()[0].email, "Jose@x.com");

    table.clear_filters();
    table.set_filter(BaseUserField::Role, "admin");
    table.set_filter(BaseUserField::Provider, "local");
    let rendered = table.render();
    assert_eq!(rendered.rows.len(), 1);
    assert_eq!(rendered.rows[0].id, "2");
    assert_eq!(rendered.summary.to_string(), "1 result found out of 3 total");
    assert_eq!(table.active_filter_count(), 2);
}

#[test]
fn test_users_table_no_results_message() {
    let config = users_table_config();
    let mut table = DataTable::new(&config, sample_accounts());
    table.set_filter(BaseUserField::Provider, "github");

    let rendered = table.render();
    assert!(rendered.rows.is_empty());
    assert_eq!(
        rendered.empty_state.as_deref(),
        Some("No user matches the search criteria.")
    );
    assert!(table.export_csv().unwrap().is_none());
}

#[test]
fn test_users_table_empty_message() {
    let config = administrators_table_config();
    let table = DataTable::new(&config, Vec::new());
    assert_eq!(
        table.render().empty_state.as_deref(),
        Some("No administrators found.")
    );
}

#[test]
fn test_account_export_escapes_names() {
    let config = users_table_config();
    let mut table = DataTable::new(&config, sample_accounts());
    table.set_search_term("jose");

    let export = table.export_csv().unwrap().unwrap();
    assert_eq!(export.filename, "users.csv");
    let lines: Vec<&str> = export.content.split('\n').collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        "\"3\",\"José\",\"O\"\"Neil\",\"Jose@x.com\",\"user\",\"google\",\"09/03/2024\",\"09/03/2024\""
    );
}

#[test]
fn test_account_role_filter_options_come_from_data() {
    let config = users_table_config();
    let table = DataTable::new(
        &config,
        vec![
            account(1, None, None, "a@x.com", UserRole::User),
            account(2, None, None, "b@x.com", UserRole::User),
        ],
    );
    let options: Vec<String> = table
        .filter_options(BaseUserField::Role)
        .into_iter()
        .map(|o| o.value)
        .collect();
    assert_eq!(options, vec!["user"]);

    let providers: Vec<String> = table
        .filter_options(BaseUserField::Provider)
        .into_iter()
        .map(|o| o.label)
        .collect();
    assert_eq!(providers, vec!["Email", "Google"]);
}

#[test]
fn test_food_styles_export_skips_actions_column() {
    let config = food_styles_table_config();
    let table = DataTable::new(
        &config,
        vec![food_style(1, "Thai"), food_style(2, "Street food")],
    );

    let rendered = table.render();
    assert_eq!(rendered.headers.len(), 3);
    assert_eq!(rendered.headers[2].key, "actions");

    let export = table.export_csv().unwrap().unwrap();
    assert_eq!(
        export.content,
        "\"ID\",\"Food style\"\n\"1\",\"Thai\"\n\"2\",\"Street food\""
    );
}
