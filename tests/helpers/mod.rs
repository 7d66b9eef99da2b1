use nutriplan::{
    App, Config,
    config::{DatabaseConfig, MealDbConfig, ObservabilityConfig},
};
use temp_dir::TempDir;

pub fn test_config(dir: &TempDir, mealdb_url: impl Into<String>) -> Config {
    Config {
        database: DatabaseConfig {
            url: format!("sqlite:{}", dir.child("nutriplan.db").display()),
            max_connections: 4,
        },
        mealdb: MealDbConfig {
            base_url: mealdb_url.into(),
            timeout_secs: 5,
        },
        observability: ObservabilityConfig::default(),
    }
}

pub async fn setup_app(dir: &TempDir, mealdb_url: impl Into<String>) -> anyhow::Result<App> {
    App::connect(&test_config(dir, mealdb_url)).await
}
