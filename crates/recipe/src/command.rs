use std::ops::Deref;

use nutriplan_db::table::Recipe;
use nutriplan_shared::{Change, State};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use ulid::Ulid;
use validator::Validate;

#[derive(Validate, Clone, Debug, Default, PartialEq)]
pub struct RecipeInput {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    #[validate(length(max = 10000))]
    pub ingredients: String,
    #[validate(length(max = 20000))]
    pub instructions: String,
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

    pub async fn create(&self, input: RecipeInput) -> nutriplan_shared::Result<String> {
        input.validate()?;

        let id = Ulid::new().to_string();
        let statement = Query::insert()
            .into_table(Recipe::Table)
            .columns([
                Recipe::Id,
                Recipe::Title,
                Recipe::PrepTime,
                Recipe::CookTime,
                Recipe::Servings,
                Recipe::Ingredients,
                Recipe::Instructions,
            ])
            .values_panic([
                id.to_owned().into(),
                input.title.into(),
                input.prep_time.into(),
                input.cook_time.into(),
                input.servings.into(),
                input.ingredients.into(),
                input.instructions.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(recipe.id = %id, "recipe created");
        self.notifier.publish(Change::Recipe(id.to_owned()));

        Ok(id)
    }

    /// Replaces every field of the recipe.
    pub async fn update(
        &self,
        id: impl Into<String>,
        input: RecipeInput,
    ) -> nutriplan_shared::Result<()> {
        input.validate()?;

        let id = id.into();
        let statement = Query::update()
            .table(Recipe::Table)
            .values([
                (Recipe::Title, input.title.into()),
                (Recipe::PrepTime, input.prep_time.into()),
                (Recipe::CookTime, input.cook_time.into()),
                (Recipe::Servings, input.servings.into()),
                (Recipe::Ingredients, input.ingredients.into()),
                (Recipe::Instructions, input.instructions.into()),
            ])
            .and_where(Expr::col(Recipe::Id).eq(id.as_str()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            nutriplan_shared::not_found!("recipe {id}");
        }

        tracing::info!(recipe.id = %id, "recipe updated");
        self.notifier.publish(Change::Recipe(id));

        Ok(())
    }

    /// Meal plan rows pointing at the recipe are left as they are.
    pub async fn delete(&self, id: impl Into<String>) -> nutriplan_shared::Result<()> {
        let id = id.into();
        let statement = Query::delete()
            .from_table(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(id.as_str()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            nutriplan_shared::not_found!("recipe {id}");
        }

        tracing::info!(recipe.id = %id, "recipe deleted");
        self.notifier.publish(Change::Recipe(id));

        Ok(())
    }
}
