use std::ops::Deref;

use nutriplan_db::table::MealPlan;
use nutriplan_shared::{Change, State, format_date, mealplan::MealType};
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::Date;
use ulid::Ulid;

use crate::query::slot_column;

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

    /// Sets or clears one slot of a day.
    ///
    /// Both paths are a single statement touching only the slot column, so
    /// concurrent assignments to different slots of the same day never
    /// overwrite each other. Clearing a day that has no plan is a no-op.
    /// The recipe id is not checked against the recipe table.
    pub async fn assign(
        &self,
        date: Date,
        slot: MealType,
        recipe_id: Option<String>,
    ) -> nutriplan_shared::Result<()> {
        let day = format_date(date);
        let column = slot_column(slot);

        let (sql, values) = match recipe_id.as_ref() {
            Some(recipe_id) => Query::insert()
                .into_table(MealPlan::Table)
                .columns([MealPlan::Id, MealPlan::Date, column])
                .values_panic([
                    Ulid::new().to_string().into(),
                    day.to_owned().into(),
                    recipe_id.to_owned().into(),
                ])
                .on_conflict(OnConflict::column(MealPlan::Date).update_column(column).to_owned())
                .build_sqlx(SqliteQueryBuilder),
            None => Query::update()
                .table(MealPlan::Table)
                .value(column, Option::<String>::None)
                .and_where(Expr::col(MealPlan::Date).eq(day.as_str()))
                .build_sqlx(SqliteQueryBuilder),
        };

        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(date = %day, %slot, "no meal plan to clear");
            return Ok(());
        }

        tracing::info!(date = %day, %slot, recipe.id = ?recipe_id, "meal slot assigned");
        self.notifier.publish(Change::MealPlan(day));

        Ok(())
    }

    /// Removes the whole plan of a day.
    pub async fn delete(&self, date: Date) -> nutriplan_shared::Result<()> {
        let day = format_date(date);
        let statement = Query::delete()
            .from_table(MealPlan::Table)
            .and_where(Expr::col(MealPlan::Date).eq(day.as_str()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            nutriplan_shared::not_found!("meal plan {day}");
        }

        tracing::info!(date = %day, "meal plan deleted");
        self.notifier.publish(Change::MealPlan(day));

        Ok(())
    }
}
