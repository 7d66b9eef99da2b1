use nutriplan_mealdb::MealDbClient;
use nutriplan_shared::{Notifier, State};

use crate::config::Config;

/// Explicit wiring of every store, the aggregator and the remote client.
#[derive(Clone)]
pub struct App {
    pub state: State,
    pub recipe_command: nutriplan_recipe::Command,
    pub recipe_query: nutriplan_recipe::Query,
    pub shopping_command: nutriplan_shopping::Command,
    pub shopping_query: nutriplan_shopping::Query,
    pub mealplan_command: nutriplan_mealplan::Command,
    pub mealplan_query: nutriplan_mealplan::Query,
    pub aggregator: nutriplan_mealplan::Aggregator,
    pub mealdb: MealDbClient,
}

impl App {
    pub fn new(state: State, mealdb: MealDbClient) -> Self {
        Self {
            recipe_command: nutriplan_recipe::Command::new(state.clone()),
            recipe_query: nutriplan_recipe::Query(state.clone()),
            shopping_command: nutriplan_shopping::Command::new(state.clone()),
            shopping_query: nutriplan_shopping::Query(state.clone()),
            mealplan_command: nutriplan_mealplan::Command::new(state.clone()),
            mealplan_query: nutriplan_mealplan::Query(state.clone()),
            aggregator: nutriplan_mealplan::Aggregator::new(state.clone()),
            mealdb,
            state,
        }
    }

    /// Opens both pools, brings the schema up to date and builds the client.
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        let write_db = crate::db::create_write_pool(&config.database.url).await?;
        crate::db::run_migrations(&write_db).await?;

        let read_db =
            crate::db::create_read_pool(&config.database.url, config.database.max_connections)
                .await?;

        let mealdb = MealDbClient::new(&config.mealdb.base_url, config.mealdb.timeout())?;

        Ok(Self::new(
            State {
                read_db,
                write_db,
                notifier: Notifier::default(),
            },
            mealdb,
        ))
    }
}
