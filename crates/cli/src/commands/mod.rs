//! Command implementations.

pub mod export;
pub mod food_style;
pub mod list;
pub mod login;
pub mod profile;

use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use toque_admin::api::BackendClient;
use toque_admin::components::data_table::{DataTable, FieldName, Record};
use toque_admin::components::tables::AccountKind;
use toque_admin::config::AdminConfig;
use toque_admin::models::{BaseUser, FoodStyle};

use crate::error::CliError;
use crate::{Entity, TableArgs};

/// Backend client from the environment.
pub fn client() -> Result<BackendClient, CliError> {
    let config = AdminConfig::from_env()?;
    if config.access_token.is_none() {
        tracing::warn!("TOQUE_ACCESS_TOKEN is not set; sending unauthenticated requests");
    }
    Ok(BackendClient::new(&config)?)
}

/// Records saved as a JSON array in the backend's listing format (the body of
/// `GET /users` or `GET /food-style`). `list --json` output is a rendered table
/// and cannot be read back.
pub fn read_records<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>, CliError> {
    let file = std::fs::File::open(path)?;
    let records: Vec<R> = serde_json::from_reader(BufReader::new(file))?;
    tracing::info!(path = %path.display(), count = records.len(), "Loaded records from file");
    Ok(records)
}

/// Accounts from `--input` or the backend.
pub async fn load_accounts(kind: AccountKind, args: &TableArgs) -> Result<Vec<BaseUser>, CliError> {
    match &args.input {
        Some(path) => read_records(path),
        None => Ok(client()?.list_accounts(kind.role()).await?),
    }
}

/// Food styles from `--input` or the backend.
pub async fn load_food_styles(args: &TableArgs) -> Result<Vec<FoodStyle>, CliError> {
    match &args.input {
        Some(path) => read_records(path),
        None => Ok(client()?.list_food_styles().await?),
    }
}

/// Apply `--search` and `--filter` to a table.
///
/// Every filter is checked before the table is touched.
pub fn apply_table_args<R: Record>(
    table: &mut DataTable<'_, R>,
    args: &TableArgs,
    entity: Entity,
) -> Result<(), CliError> {
    let mut filters = Vec::with_capacity(args.filters.len());
    for raw in &args.filters {
        let (field, value) = raw
            .split_once('=')
            .ok_or_else(|| CliError::InvalidFilter(raw.clone()))?;
        let field = field.trim();
        if R::Field::from_name(field).is_none() {
            return Err(CliError::UnknownField {
                field: field.to_string(),
                entity: entity.as_str().to_string(),
            });
        }
        filters.push((field, value.trim()));
    }

    if let Some(term) = &args.search {
        table.set_search_term(term.as_str());
    }
    for (field, value) in filters {
        table.set_filter_by_name(field, value);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use toque_admin::components::data_table::TableMode;
    use toque_admin::components::tables::food_styles_table_config;
    use toque_core::FoodStyleId;

    fn styles() -> Vec<FoodStyle> {
        vec![
            FoodStyle {
                id: FoodStyleId::new(1),
                name: "Thai".to_string(),
            },
            FoodStyle {
                id: FoodStyleId::new(2),
                name: "Vegan".to_string(),
            },
        ]
    }

    #[test]
    fn test_apply_table_args() {
        let config = food_styles_table_config();
        let mut table = DataTable::new(&config, styles());
        let args = TableArgs {
            search: Some("th".to_string()),
            filters: vec!["name = Thai".to_string()],
            input: None,
        };
        apply_table_args(&mut table, &args, Entity::FoodStyles).unwrap();

        assert_eq!(table.mode(), TableMode::Filtered);
        assert_eq!(table.state().search_term(), "th");
        assert_eq!(table.filtered_data().len(), 1);
    }

    #[test]
    fn test_apply_table_args_rejects_bad_filters() {
        let config = food_styles_table_config();
        let mut table = DataTable::new(&config, styles());

        let args = TableArgs {
            search: Some("th".to_string()),
            filters: vec!["name".to_string()],
            input: None,
        };
        assert!(matches!(
            apply_table_args(&mut table, &args, Entity::FoodStyles),
            Err(CliError::InvalidFilter(_))
        ));

        let args = TableArgs {
            filters: vec!["salary=high".to_string()],
            ..TableArgs::default()
        };
        assert!(matches!(
            apply_table_args(&mut table, &args, Entity::FoodStyles),
            Err(CliError::UnknownField { .. })
        ));
        assert_eq!(table.mode(), TableMode::Unfiltered);
    }

    #[test]
    fn test_read_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("styles.json");
        std::fs::write(&path, r#"[{"id": 5, "name": "Korean"}]"#).unwrap();

        let records: Vec<FoodStyle> = read_records(&path).unwrap();
        assert_eq!(records[0].name, "Korean");
        assert!(matches!(
            read_records::<FoodStyle>(&dir.path().join("missing.json")),
            Err(CliError::Io(_))
        ));
    }
}
