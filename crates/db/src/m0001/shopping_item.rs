use sea_query::{ColumnDef, Expr, Table, TableCreateStatement, TableDropStatement};

use crate::table::ShoppingItem;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(ShoppingItem::Table)
        .col(
            ColumnDef::new(ShoppingItem::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(ShoppingItem::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(ShoppingItem::Quantity)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(ShoppingItem::Unit)
                .string()
                .not_null()
                .string_len(25)
                .default(""),
        )
        .col(
            ColumnDef::new(ShoppingItem::Checked)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(ShoppingItem::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(ShoppingItem::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
