use std::ops::Deref;

use nutriplan_db::table::MealPlan;
use nutriplan_shared::{State, format_date, mealplan::MealType};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use time::Date;

#[derive(Debug, Default, Clone, PartialEq, FromRow)]
pub struct MealPlanRow {
    pub id: String,
    pub date: String,
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub dinner: Option<String>,
}

impl MealPlanRow {
    pub fn recipe_id(&self, slot: MealType) -> Option<&str> {
        match slot {
            MealType::Breakfast => self.breakfast.as_deref(),
            MealType::Lunch => self.lunch.as_deref(),
            MealType::Dinner => self.dinner.as_deref(),
        }
    }

    pub fn recipe_ids(&self) -> impl Iterator<Item = &str> {
        [&self.breakfast, &self.lunch, &self.dinner]
            .into_iter()
            .filter_map(|id| id.as_deref())
    }
}

pub(crate) fn slot_column(slot: MealType) -> MealPlan {
    match slot {
        MealType::Breakfast => MealPlan::Breakfast,
        MealType::Lunch => MealPlan::Lunch,
        MealType::Dinner => MealPlan::Dinner,
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
            MealPlan::Id,
            MealPlan::Date,
            MealPlan::Breakfast,
            MealPlan::Lunch,
            MealPlan::Dinner,
        ])
        .from(MealPlan::Table)
        .to_owned()
}

impl Query {
    /// Rows with `start <= date <= end`.
    pub async fn filter_range(&self, start: Date, end: Date) -> anyhow::Result<Vec<MealPlanRow>> {
        let statement = select()
            .and_where(Expr::col(MealPlan::Date).between(format_date(start), format_date(end)))
            .order_by(MealPlan::Date, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    pub async fn find_by_date(&self, date: Date) -> anyhow::Result<Option<MealPlanRow>> {
        let statement = select()
            .and_where(Expr::col(MealPlan::Date).eq(format_date(date)))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }
}
