use std::ops::Deref;

use nutriplan_db::table::Recipe;
use nutriplan_shared::State;
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;

#[derive(Debug, Default, Clone, PartialEq, FromRow)]
pub struct RecipeRow {
    pub id: String,
    pub title: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub ingredients: String,
    pub instructions: String,
}

impl RecipeRow {
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    pub fn ingredient_lines(&self) -> impl Iterator<Item = &str> {
        self.ingredients
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
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
            Recipe::Id,
            Recipe::Title,
            Recipe::PrepTime,
            Recipe::CookTime,
            Recipe::Servings,
            Recipe::Ingredients,
            Recipe::Instructions,
        ])
        .from(Recipe::Table)
        .to_owned()
}

impl Query {
    pub async fn list(&self) -> anyhow::Result<Vec<RecipeRow>> {
        let statement = select()
            .order_by(Recipe::Title, Order::Asc)
            .order_by(Recipe::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<RecipeRow>> {
        let statement = select()
            .and_where(Expr::col(Recipe::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    /// Ids with no matching recipe are silently absent from the result.
    pub async fn find_many(
        &self,
        ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> anyhow::Result<Vec<RecipeRow>> {
        let ids = ids.into_iter().map(Into::into).collect::<Vec<String>>();
        if ids.is_empty() {
            return Ok(vec![]);
        }

        tracing::debug!(count = ids.len(), "resolving recipes");

        let statement = select()
            .and_where(Expr::col(Recipe::Id).is_in(ids))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }
}
