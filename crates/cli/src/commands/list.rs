//! `toque list`.

use std::io::Write;

use toque_admin::components::data_table::{DataTable, Record, TableConfig};
use toque_admin::components::tables::{
    AccountKind, administrators_table_config, food_styles_table_config, users_table_config,
};

use super::{apply_table_args, load_accounts, load_food_styles};
use crate::error::CliError;
use crate::output;
use crate::{Entity, TableArgs};

/// Print the filtered listing.
pub async fn run(entity: Entity, args: &TableArgs, json: bool) -> Result<(), CliError> {
    match entity {
        Entity::Users => {
            let records = load_accounts(AccountKind::Users, args).await?;
            show(&users_table_config(), records, entity, args, json)
        }
        Entity::Administrators => {
            let records = load_accounts(AccountKind::Administrators, args).await?;
            show(&administrators_table_config(), records, entity, args, json)
        }
        Entity::FoodStyles => {
            let records = load_food_styles(args).await?;
            show(&food_styles_table_config(), records, entity, args, json)
        }
    }
}

fn show<R: Record>(
    config: &TableConfig<R>,
    records: Vec<R>,
    entity: Entity,
    args: &TableArgs,
    json: bool,
) -> Result<(), CliError> {
    let mut table = DataTable::new(config, records);
    apply_table_args(&mut table, args, entity)?;
    let rendered = table.render();

    let mut out = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &rendered)?;
        writeln!(out)?;
    } else {
        output::write_table(&mut out, &rendered)?;
    }
    Ok(())
}
