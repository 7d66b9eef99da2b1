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

pub async fn create_recipe(state: &State, title: impl Into<String>) -> anyhow::Result<String> {
    let id = nutriplan_recipe::Command::new(state.clone())
        .create(RecipeInput {
            title: title.into(),
            prep_time: 5,
            cook_time: 10,
            servings: 2,
            ..Default::default()
        })
        .await?;

    Ok(id)
}
