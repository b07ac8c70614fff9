//! Table configurations for the admin list views.

use toque_core::{AuthProvider, UserRole};

use crate::components::data_table::{
    FieldValue, FilterOption, TableColumn, TableConfig, TableFilter,
};
use crate::models::{BaseUser, BaseUserField, FoodStyle, FoodStyleField};

/// Shown instead of a missing first or last name.
const NOT_PROVIDED: &str = "Not provided";

/// Which account listing a table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Regular users (`role=user`).
    Users,
    /// Administrators (`role=admin`).
    Administrators,
}

impl AccountKind {
    /// Role the backend listing is filtered on.
    #[must_use]
    pub const fn role(self) -> UserRole {
        match self {
            Self::Users => UserRole::User,
            Self::Administrators => UserRole::Admin,
        }
    }

    /// Path prefix of the account detail pages.
    #[must_use]
    pub const fn detail_path(self) -> &'static str {
        match self {
            Self::Users => "/dashboard/users",
            Self::Administrators => "/dashboard/administrators",
        }
    }
}

/// Day-first calendar date, e.g. `02/05/2024`.
fn format_date(value: &FieldValue<'_>) -> String {
    match value {
        FieldValue::Timestamp(ts) => ts.format("%d/%m/%Y").to_string(),
        other => other.to_string(),
    }
}

fn name_or_placeholder(value: &FieldValue<'_>) -> String {
    match value.as_text() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => NOT_PROVIDED.to_string(),
    }
}

fn role_label(value: &FieldValue<'_>) -> String {
    match value.as_text().and_then(|role| role.parse::<UserRole>().ok()) {
        Some(UserRole::User) => "User".to_string(),
        Some(UserRole::Admin) => "Administrator".to_string(),
        None => value.to_string(),
    }
}

fn provider_label(value: &FieldValue<'_>) -> String {
    match value
        .as_text()
        .and_then(|provider| provider.parse::<AuthProvider>().ok())
    {
        Some(AuthProvider::Local) => "Email".to_string(),
        Some(AuthProvider::Google) => "Google".to_string(),
        None => value.to_string(),
    }
}

/// Shared configuration of the account listings.
///
/// Search covers first name, last name and email. Role and provider are
/// select filters. Dates render and export as day-first calendar dates.
#[must_use]
pub fn base_users_table_config(kind: AccountKind) -> TableConfig<BaseUser> {
    let (table_id, filename, empty, no_results) = match kind {
        AccountKind::Users => (
            "users-table",
            "users.csv",
            "No users found.",
            "No user matches the search criteria.",
        ),
        AccountKind::Administrators => (
            "administrators-table",
            "administrators.csv",
            "No administrators found.",
            "No administrator matches the search criteria.",
        ),
    };
    let detail_path = kind.detail_path();

    TableConfig::new(table_id)
        .column(TableColumn::new(BaseUserField::Id, "ID").class_name("font-mono text-sm"))
        .column(
            TableColumn::new(BaseUserField::FirstName, "First name")
                .render(|v, _| name_or_placeholder(v))
                .class_name("font-medium"),
        )
        .column(
            TableColumn::new(BaseUserField::LastName, "Last name")
                .render(|v, _| name_or_placeholder(v))
                .class_name("font-medium"),
        )
        .column(TableColumn::new(BaseUserField::Email, "Email"))
        .column(TableColumn::new(BaseUserField::Role, "Role").render(|v, _| role_label(v)))
        .column(
            TableColumn::new(BaseUserField::Provider, "Provider").render(|v, _| provider_label(v)),
        )
        .column(
            TableColumn::new(BaseUserField::CreatedAt, "Created")
                .render(|v, _| format_date(v))
                .export_with(|v, _| format_date(v)),
        )
        .column(
            TableColumn::new(BaseUserField::UpdatedAt, "Last updated")
                .render(|v, _| format_date(v))
                .export_with(|v, _| format_date(v)),
        )
        .column(TableColumn::derived(
            "actions",
            "Actions",
            move |_, user: &BaseUser| format!("{detail_path}/{}", user.id),
        ))
        .search_fields(&[
            BaseUserField::FirstName,
            BaseUserField::LastName,
            BaseUserField::Email,
        ])
        .filter(TableFilter::select(BaseUserField::Role, "Role").placeholder("All roles"))
        .filter(
            TableFilter::select(BaseUserField::Provider, "Provider").options(vec![
                FilterOption::new(AuthProvider::Local.as_str(), "Email"),
                FilterOption::new(AuthProvider::Google.as_str(), "Google"),
            ]),
        )
        .search_placeholder("Search by first name, last name, email...")
        .empty_state(empty, no_results)
        .exportable(filename)
}

/// Regular users listing.
#[must_use]
pub fn users_table_config() -> TableConfig<BaseUser> {
    base_users_table_config(AccountKind::Users)
}

/// Administrators listing.
#[must_use]
pub fn administrators_table_config() -> TableConfig<BaseUser> {
    base_users_table_config(AccountKind::Administrators)
}

/// Food styles listing, with an edit/delete actions column.
#[must_use]
pub fn food_styles_table_config() -> TableConfig<FoodStyle> {
    TableConfig::new("food-styles-table")
        .column(TableColumn::new(FoodStyleField::Id, "ID").class_name("font-mono text-sm w-24"))
        .column(TableColumn::new(FoodStyleField::Name, "Food style").class_name("font-medium"))
        .column(
            TableColumn::derived("actions", "Actions", |_, style: &FoodStyle| {
                format!("edit:{id} delete:{id}", id = style.id)
            })
            .class_name("w-32"),
        )
        .search_fields(&[FoodStyleField::Name, FoodStyleField::Id])
        .search_placeholder("Search food styles...")
        .empty_state("No food styles yet.", "No food style matches your search.")
        .exportable("food-styles.csv")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::components::data_table::DataTable;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use toque_core::{FoodStyleId, UserId};

    fn account(id: i64, first: Option<&str>, email: &str, role: UserRole) -> BaseUser {
        BaseUser {
            id: UserId::new(id),
            first_name: first.map(str::to_string),
            last_name: None,
            email: email.to_string(),
            role,
            provider: AuthProvider::Local,
            created_at: Utc.with_ymd_and_hms(2024, 5, 2, 8, 15, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 6, 10, 17, 45, 30).unwrap(),
        }
    }

    #[test]
    fn test_account_rows_render_placeholders_and_dates() {
        let config = users_table_config();
        let table = DataTable::new(
            &config,
            vec![account(4, None, "nobody@toque.app", UserRole::User)],
        );
        let row = &table.render().rows[0];
        let values: Vec<&str> = row.cells.iter().map(|c| c.value.as_str()).collect();

        assert_eq!(
            values,
            vec![
                "4",
                "Not provided",
                "Not provided",
                "nobody@toque.app",
                "User",
                "Email",
                "02/05/2024",
                "10/06/2024",
                "/dashboard/users/4",
            ]
        );
    }

    #[test]
    fn test_account_export_keeps_raw_values_and_formats_dates() {
        let config = administrators_table_config();
        let table = DataTable::new(
            &config,
            vec![account(9, Some("Lea"), "lea@toque.app", UserRole::Admin)],
        );
        let export = table.export_csv().unwrap().unwrap();

        assert_eq!(export.filename, "administrators.csv");
        assert_eq!(
            export.content,
            "\"ID\",\"First name\",\"Last name\",\"Email\",\"Role\",\"Provider\",\"Created\",\"Last updated\"\n\
             \"9\",\"Lea\",\"\",\"lea@toque.app\",\"admin\",\"local\",\"02/05/2024\",\"10/06/2024\""
        );
    }

    #[test]
    fn test_account_search_ignores_role_text() {
        let config = users_table_config();
        let mut table = DataTable::new(
            &config,
            vec![
                account(1, Some("Alice"), "a@x.com", UserRole::User),
                account(2, Some("Bob"), "b@x.com", UserRole::Admin),
            ],
        );
        table.set_search_term("admin");
        assert!(table.filtered_data().is_empty());

        table.set_search_term("");
        table.set_filter(BaseUserField::Role, "admin");
        assert_eq!(table.filtered_data()[0].id, UserId::new(2));
        assert_eq!(
            table.filter_placeholder(BaseUserField::Role).as_deref(),
            Some("All roles")
        );
    }

    #[test]
    fn test_food_styles_table() {
        let config = food_styles_table_config();
        let styles = vec![
            FoodStyle {
                id: FoodStyleId::new(1),
                name: "Thai".to_string(),
            },
            FoodStyle {
                id: FoodStyleId::new(2),
                name: "Vegan".to_string(),
            },
        ];
        let mut table = DataTable::new(&config, styles);
        table.toggle_filters();
        assert!(!table.filters_expanded());

        table.set_search_term("veg");
        let rendered = table.render();
        assert_eq!(rendered.rows.len(), 1);
        assert_eq!(rendered.rows[0].cells[2].value, "edit:2 delete:2");

        let export = table.export_csv().unwrap().unwrap();
        assert_eq!(export.content, "\"ID\",\"Food style\"\n\"2\",\"Vegan\"");
    }
}
