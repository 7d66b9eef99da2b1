use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{ConnectOptions, SqlitePool, migrate::MigrateDatabase};
use sqlx_migrator::{Migrate, Plan};
use std::{str::FromStr, time::Duration};
use tracing::log::LevelFilter;

/// Connection options shared by both pools, applied on every new connection.
///
/// - busy_timeout reduces SQLITE_BUSY errors
/// - synchronous=NORMAL is safe with WAL
/// - temp_store=memory speeds up temporary tables
fn connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .busy_timeout(Duration::from_secs(5))
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .pragma("cache_size", "-20000")
        .pragma("temp_store", "memory")
        .log_statements(LevelFilter::Debug))
}

/// Create a read-only connection pool for concurrent reads
///
/// The database must already exist; open the write pool first.
pub async fn create_read_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = connect_options(database_url)?.read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(
        "Created read-only pool with {} max connections",
        max_connections
    );

    Ok(pool)
}

/// Create a write connection pool with a single connection
///
/// SQLite allows one writer at a time, so every mutation goes through this
/// connection. It also switches the database to WAL mode.
pub async fn create_write_pool(database_url: &str) -> Result<SqlitePool> {
    let options = connect_options(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    tracing::info!("Created write pool with 1 connection");

    Ok(pool)
}

/// Apply every pending schema migration.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    nutriplan_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(())
}

#[tracing::instrument]
pub async fn migrate(database_url: &str) -> Result<()> {
    tracing::info!("Running database migrations...");

    let pool = create_write_pool(database_url).await?;
    run_migrations(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drop the database if it exists and recreate it with migrations.
#[tracing::instrument]
pub async fn reset(database_url: &str) -> Result<()> {
    if sqlx::Sqlite::database_exists(database_url).await? {
        tracing::warn!("Dropping existing database: {}", database_url);
        sqlx::Sqlite::drop_database(database_url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(database_url).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}
