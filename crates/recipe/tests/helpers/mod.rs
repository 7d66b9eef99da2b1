use std::{path::PathBuf, str::FromStr};

use nutriplan_recipe::RecipeInput;
use nutriplan_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    nutriplan_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

#[allow(dead_code)]
pub fn recipe_input(title: impl Into<String>) -> RecipeInput {
    RecipeInput {
        title: title.into(),
        prep_time: 10,
        cook_time: 25,
        servings: 4,
        ingredients: "200 g oats\n500 ml milk".to_owned(),
        instructions: "Simmer until creamy.".to_owned(),
    }
}
