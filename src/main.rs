use anyhow::Result;
use clap::{Parser, Subcommand};
use nutriplan::App;

mod cli;

/// nutriplan - weekly meal planning
#[derive(Parser)]
#[command(name = "nutriplan")]
#[command(about = "Recipes, weekly meal plans and a shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Manage local recipes
    #[command(subcommand)]
    Recipe(cli::recipe::RecipeCommand),
    /// Manage the shopping list
    #[command(subcommand)]
    Shopping(cli::shopping::ShoppingCommand),
    /// View and edit the weekly meal plan
    #[command(subcommand)]
    Plan(cli::plan::PlanCommand),
    /// Browse the remote meal service
    #[command(subcommand)]
    Remote(cli::remote::RemoteCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = nutriplan::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    nutriplan::observability::init_observability(
        "nutriplan",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Migrate => nutriplan::db::migrate(&config.database.url).await,
        Commands::Reset => nutriplan::db::reset(&config.database.url).await,
        Commands::Recipe(command) => cli::recipe::run(&App::connect(&config).await?, command).await,
        Commands::Shopping(command) => {
            cli::shopping::run(&App::connect(&config).await?, command).await
        }
        Commands::Plan(command) => cli::plan::run(&App::connect(&config).await?, command).await,
        Commands::Remote(command) => cli::remote::run(&App::connect(&config).await?, command).await,
    }
}
