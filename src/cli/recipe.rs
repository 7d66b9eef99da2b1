use anyhow::Result;
use clap::{Args, Subcommand};
use nutriplan::App;
use nutriplan_recipe::{RecipeInput, RecipeRow};
use nutriplan_shared::parse_or_zero;

#[derive(Subcommand)]
pub enum RecipeCommand {
    /// Create a recipe
    Add(RecipeArgs),
    /// List every recipe by title
    List,
    /// Show a recipe
    Show { id: String },
    /// Replace every field of a recipe
    Update {
        id: String,
        #[command(flatten)]
        args: RecipeArgs,
    },
    /// Delete a recipe; meal plans keep their reference
    Delete { id: String },
}

#[derive(Args)]
pub struct RecipeArgs {
    #[arg(long)]
    title: String,

    /// Preparation time in minutes
    #[arg(long, default_value = "")]
    prep_time: String,

    /// Cooking time in minutes
    #[arg(long, default_value = "")]
    cook_time: String,

    #[arg(long, default_value = "")]
    servings: String,

    /// One ingredient line, repeatable
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,

    #[arg(long, default_value = "")]
    instructions: String,
}

impl From<RecipeArgs> for RecipeInput {
    fn from(args: RecipeArgs) -> Self {
        Self {
            title: args.title,
            prep_time: parse_or_zero(&args.prep_time),
            cook_time: parse_or_zero(&args.cook_time),
            servings: parse_or_zero(&args.servings),
            ingredients: args.ingredients.join("\n"),
            instructions: args.instructions,
        }
    }
}

pub async fn run(app: &App, command: RecipeCommand) -> Result<()> {
    match command {
        RecipeCommand::Add(args) => {
            let id = app.recipe_command.create(args.into()).await?;
            println!("{id}");
        }
        RecipeCommand::List => {
            for recipe in app.recipe_query.list().await? {
                println!(
                    "{}  {} ({} min, serves {})",
                    recipe.id,
                    recipe.title,
                    recipe.total_time(),
                    recipe.servings
                );
            }
        }
        RecipeCommand::Show { id } => match app.recipe_query.find(&id).await? {
            Some(recipe) => print_recipe(&recipe),
            None => anyhow::bail!("recipe {id} not found"),
        },
        RecipeCommand::Update { id, args } => {
            app.recipe_command.update(id, args.into()).await?;
        }
        RecipeCommand::Delete { id } => {
            app.recipe_command.delete(id).await?;
        }
    }

    Ok(())
}

pub fn print_recipe(recipe: &RecipeRow) {
    println!("{}", recipe.title);
    println!(
        "prep {} min, cook {} min, serves {}",
        recipe.prep_time, recipe.cook_time, recipe.servings
    );

    let mut lines = recipe.ingredient_lines().peekable();
    if lines.peek().is_some() {
        println!();
        for line in lines {
            println!("- {line}");
        }
    }

    if !recipe.instructions.trim().is_empty() {
        println!();
        println!("{}", recipe.instructions.trim());
    }
}
