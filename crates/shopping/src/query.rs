use std::ops::Deref;

use nutriplan_db::table::ShoppingItem;
use nutriplan_shared::State;
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;

#[derive(Debug, Default, Clone, PartialEq, FromRow)]
pub struct ShoppingItemRow {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub checked: bool,
}

impl ShoppingItemRow {
    /// `2 kg`, or just `2` when no unit was given.
    pub fn amount(&self) -> String {
        if self.unit.is_empty() {
            return self.quantity.to_string();
        }

        format!("{} {}", self.quantity, self.unit)
    }
}

#[derive(Clone)]
pub struct Query(pub State);

impl Deref for Query {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn select() -> sea_query::SelectStatement {
    sea_query::Query::select()
        .columns([
            ShoppingItem::Id,
            ShoppingItem::Name,
            ShoppingItem::Quantity,
            ShoppingItem::Unit,
            ShoppingItem::Checked,
        ])
        .from(ShoppingItem::Table)
        .to_owned()
}

impl Query {
    /// Unchecked items first, then by name.
    pub async fn list(&self) -> anyhow::Result<Vec<ShoppingItemRow>> {
        let statement = select()
            .order_by(ShoppingItem::Checked, Order::Asc)
            .order_by(ShoppingItem::Name, Order::Asc)
            .order_by(ShoppingItem::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ShoppingItemRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<ShoppingItemRow>> {
        let statement = select()
            .and_where(Expr::col(ShoppingItem::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ShoppingItemRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }
}
