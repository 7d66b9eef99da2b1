use std::ops::Deref;

use nutriplan_db::table::ShoppingItem;
use nutriplan_shared::{Change, State};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use ulid::Ulid;
use validator::{Validate, ValidationError};

#[derive(Validate, Clone, Debug, Default, PartialEq)]
pub struct ItemInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(custom(function = "finite"))]
    pub quantity: f64,
    #[validate(length(max = 25))]
    pub unit: String,
    pub checked: bool,
}

fn finite(quantity: f64) -> Result<(), ValidationError> {
    if quantity.is_finite() {
        return Ok(());
    }

    Err(ValidationError::new("finite"))
}

#[derive(Clone)]
pub struct Command {
    state: State,
}

impl Deref for Command {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub async fn add(&self, input: ItemInput) -> nutriplan_shared::Result<String> {
        input.validate()?;

        let id = Ulid::new().to_string();
        let statement = Query::insert()
            .into_table(ShoppingItem::Table)
            .columns([
                ShoppingItem::Id,
                ShoppingItem::Name,
                ShoppingItem::Quantity,
                ShoppingItem::Unit,
                ShoppingItem::Checked,
            ])
            .values_panic([
                id.to_owned().into(),
                input.name.into(),
                input.quantity.into(),
                input.unit.into(),
                input.checked.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(item.id = %id, "shopping item added");
        self.notifier.publish(Change::Shopping(id.to_owned()));

        Ok(id)
    }

    pub async fn update(
        &self,
        id: impl Into<String>,
        input: ItemInput,
    ) -> nutriplan_shared::Result<()> {
        input.validate()?;

        let id = id.into();
        let statement = Query::update()
            .table(ShoppingItem::Table)
            .values([
                (ShoppingItem::Name, input.name.into()),
                (ShoppingItem::Quantity, input.quantity.into()),
                (ShoppingItem::Unit, input.unit.into()),
                (ShoppingItem::Checked, input.checked.into()),
            ])
            .and_where(Expr::col(ShoppingItem::Id).eq(id.as_str()))
            .to_owned();

        self.execute_for(id, statement).await
    }

    pub async fn set_checked(
        &self,
        id: impl Into<String>,
        checked: bool,
    ) -> nutriplan_shared::Result<()> {
        let id = id.into();
        let statement = Query::update()
            .table(ShoppingItem::Table)
            .value(ShoppingItem::Checked, checked)
            .and_where(Expr::col(ShoppingItem::Id).eq(id.as_str()))
            .to_owned();

        self.execute_for(id, statement).await
    }

    /// Flips the checked flag in a single statement.
    pub async fn toggle(&self, id: impl Into<String>) -> nutriplan_shared::Result<()> {
        let id = id.into();
        let statement = Query::update()
            .table(ShoppingItem::Table)
            .value(ShoppingItem::Checked, Expr::cust("NOT \"checked\""))
            .and_where(Expr::col(ShoppingItem::Id).eq(id.as_str()))
            .to_owned();

        self.execute_for(id, statement).await
    }

    pub async fn delete(&self, id: impl Into<String>) -> nutriplan_shared::Result<()> {
        let id = id.into();
        let statement = Query::delete()
            .from_table(ShoppingItem::Table)
            .and_where(Expr::col(ShoppingItem::Id).eq(id.as_str()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            nutriplan_shared::not_found!("shopping item {id}");
        }

        tracing::info!(item.id = %id, "shopping item deleted");
        self.notifier.publish(Change::Shopping(id));

        Ok(())
    }

    /// Removes every checked item and returns how many were removed.
    pub async fn clear_checked(&self) -> nutriplan_shared::Result<u64> {
        let statement = Query::delete()
            .from_table(ShoppingItem::Table)
            .and_where(Expr::col(ShoppingItem::Checked).eq(true))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let removed = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?
            .rows_affected();

        if removed > 0 {
            tracing::info!(removed, "checked shopping items cleared");
            self.notifier.publish(Change::ShoppingCleared(removed));
        }

        Ok(removed)
    }

    async fn execute_for(
        &self,
        id: String,
        statement: sea_query::UpdateStatement,
    ) -> nutriplan_shared::Result<()> {
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            nutriplan_shared::not_found!("shopping item {id}");
        }

        tracing::info!(item.id = %id, "shopping item updated");
        self.notifier.publish(Change::Shopping(id));

        Ok(())
    }
}
