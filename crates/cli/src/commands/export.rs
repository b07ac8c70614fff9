//! `toque export`.

use std::io::Write;
use std::path::{Path, PathBuf};

use toque_admin::components::data_table::{DataTable, Record, TableConfig};
use toque_admin::components::tables::{
    AccountKind, administrators_table_config, food_styles_table_config, users_table_config,
};
use toque_admin::config::AdminConfig;

use super::{apply_table_args, load_accounts, load_food_styles};
use crate::error::CliError;
use crate::{Entity, TableArgs};

/// Write the filtered listing to CSV.
pub async fn run(entity: Entity, args: &TableArgs, output: Option<PathBuf>) -> Result<(), CliError> {
    let dir = output.unwrap_or_else(AdminConfig::export_dir_from_env);

    let saved = match entity {
        Entity::Users => {
            let records = load_accounts(AccountKind::Users, args).await?;
            save(&users_table_config(), records, entity, args, &dir)?
        }
        Entity::Administrators => {
            let records = load_accounts(AccountKind::Administrators, args).await?;
            save(&administrators_table_config(), records, entity, args, &dir)?
        }
        Entity::FoodStyles => {
            let records = load_food_styles(args).await?;
            save(&food_styles_table_config(), records, entity, args, &dir)?
        }
    };

    match saved {
        Some(path) => writeln!(std::io::stdout().lock(), "{}", path.display())?,
        None => tracing::info!(entity = entity.as_str(), "Nothing to export"),
    }
    Ok(())
}

/// Export into `dir`; `None` when no row matched.
pub fn save<R: Record>(
    config: &TableConfig<R>,
    records: Vec<R>,
    entity: Entity,
    args: &TableArgs,
    dir: &Path,
) -> Result<Option<PathBuf>, CliError> {
    let mut table = DataTable::new(config, records);
    apply_table_args(&mut table, args, entity)?;

    let Some(export) = table.export_csv()? else {
        return Ok(None);
    };
    std::fs::create_dir_all(dir)?;
    Ok(Some(export.save_to(dir)?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use toque_admin::models::FoodStyle;
    use toque_core::FoodStyleId;

    fn styles() -> Vec<FoodStyle> {
        vec![
            FoodStyle {
                id: FoodStyleId::new(1),
                name: "Thai".to_string(),
            },
            FoodStyle {
                id: FoodStyleId::new(2),
                name: "Vegan \"raw\"".to_string(),
            },
        ]
    }

    #[test]
    fn test_save_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("exports");
        let args = TableArgs {
            search: Some("vegan".to_string()),
            ..TableArgs::default()
        };

        let path = save(
            &food_styles_table_config(),
            styles(),
            Entity::FoodStyles,
            &args,
            &out,
        )
        .unwrap()
        .unwrap();

        assert_eq!(path, out.join("food-styles.csv"));
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "\"ID\",\"Food style\"\n\"2\",\"Vegan \"\"raw\"\"\""
        );
    }

    fn write_styles(dir: &Path) -> PathBuf {
        let path = dir.join("styles.json");
        std::fs::write(&path, r#"[{"id": 1, "name": "Thai"}, {"id": 2, "name": "Vegan"}]"#)
            .unwrap();
        path
    }

    #[tokio::test]
    async fn test_run_from_input_file_needs_no_backend() {
        let dir = tempfile::tempdir().unwrap();
        let args = TableArgs {
            search: Some("thai".to_string()),
            input: Some(write_styles(dir.path())),
            ..TableArgs::default()
        };
        let out = dir.path().join("out");

        run(Entity::FoodStyles, &args, Some(out.clone())).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(out.join("food-styles.csv")).unwrap(),
            "\"ID\",\"Food style\"\n\"1\",\"Thai\""
        );
    }

    #[tokio::test]
    async fn test_run_default_dir_needs_no_backend() {
        let dir = tempfile::tempdir().unwrap();
        let args = TableArgs {
            search: Some("korean".to_string()),
            input: Some(write_styles(dir.path())),
            ..TableArgs::default()
        };

        // Resolves the directory from the environment alone; nothing matches so
        // no file is written.
        run(Entity::FoodStyles, &args, None).await.unwrap();
    }

    #[test]
    fn test_save_nothing_matched() {
        let dir = tempfile::tempdir().unwrap();
        let args = TableArgs {
            search: Some("korean".to_string()),
            ..TableArgs::default()
        };

        let saved = save(
            &food_styles_table_config(),
            styles(),
            Entity::FoodStyles,
            &args,
            dir.path(),
        )
        .unwrap();
        assert!(saved.is_none());
        assert!(!dir.path().join("food-styles.csv").exists());
    }
}
