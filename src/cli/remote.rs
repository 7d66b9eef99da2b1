use anyhow::Result;
use clap::Subcommand;
use nutriplan::App;
use nutriplan_shared::LoadState;

#[derive(Subcommand)]
pub enum RemoteCommand {
    /// Search the meal service by name
    Search { term: String },
    /// Show a remote meal with its ingredients
    Show { id: String },
    /// Copy a remote meal into the local recipes
    Import { id: String },
}

pub async fn run(app: &App, command: RemoteCommand) -> Result<()> {
    match command {
        RemoteCommand::Search { term } => {
            match LoadState::from_result(app.mealdb.search(&term).await) {
                LoadState::Success(meals) if meals.is_empty() => println!("no meals match {term}"),
                LoadState::Success(meals) => {
                    for meal in meals {
                        let category = meal.category.as_deref().unwrap_or("-");
                        println!("{}  {} [{category}]", meal.id, meal.name);
                    }
                }
                LoadState::Error(message) => report(&message),
                LoadState::Loading => {}
            }
        }
        RemoteCommand::Show { id } => match LoadState::from_result(app.mealdb.lookup(&id).await) {
            LoadState::Success(Some(meal)) => {
                println!("{}", meal.name);
                for ingredient in meal.ingredients() {
                    println!("- {}", ingredient.line());
                }
                if let Some(instructions) = meal.instructions.as_deref() {
                    println!();
                    println!("{}", instructions.trim());
                }
            }
            LoadState::Success(None) => println!("no remote meal {id}"),
            LoadState::Error(message) => report(&message),
            LoadState::Loading => {}
        },
        RemoteCommand::Import { id } => match LoadState::from_result(app.mealdb.lookup(&id).await) {
            LoadState::Success(Some(meal)) => {
                let recipe_id = app.recipe_command.create(meal.to_create_input()).await?;
                tracing::info!(remote.id = %meal.id, recipe.id = %recipe_id, "remote meal imported");
                println!("{recipe_id}");
            }
            LoadState::Success(None) => println!("no remote meal {id}"),
            LoadState::Error(message) => report(&message),
            LoadState::Loading => {}
        },
    }

    Ok(())
}

fn report(message: &str) {
    tracing::warn!(error = %message, "meal service unavailable");
    eprintln!("meal service unavailable: {message}");
}
