use std::{path::PathBuf, str::FromStr};

use nutriplan_shared::State;
use nutriplan_shopping::ItemInput;
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

pub fn item(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> ItemInput {
    ItemInput {
        name: name.into(),
        quantity,
        unit: unit.into(),
        checked: false,
    }
}
