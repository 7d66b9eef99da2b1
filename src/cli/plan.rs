use anyhow::Result;
use clap::Subcommand;
use nutriplan::App;
use nutriplan_mealplan::{MealPlanAggregate, Week};
use nutriplan_shared::{mealplan::MealType, parse_date};
use strum::VariantArray;

#[derive(Subcommand)]
pub enum PlanCommand {
    /// Show the Monday to Sunday week containing a date
    Week {
        /// Any day of the week, defaults to today
        #[arg(long)]
        date: Option<String>,
        #[arg(long, conflicts_with = "next")]
        previous: bool,
        #[arg(long)]
        next: bool,
    },
    /// Put a recipe in a slot
    Assign {
        date: String,
        slot: MealType,
        recipe_id: String,
    },
    /// Empty a slot
    Clear { date: String, slot: MealType },
    /// Remove every slot of a day
    Delete { date: String },
}

pub async fn run(app: &App, command: PlanCommand) -> Result<()> {
    match command {
        PlanCommand::Week {
            date,
            previous,
            next,
        } => {
            let mut week = match date {
                Some(date) => Week::of(parse_date(date)?),
                None => Week::current(),
            };
            if previous {
                week = week.previous();
            }
            if next {
                week = week.next();
            }

            println!("Week {}", week.label());
            let days = app.aggregator.week_or_empty(week.start).await?;
            for (date, day) in week.days().into_iter().zip(days) {
                println!("{} {}", date.weekday(), day.date);
                print_day(&day);
            }
        }
        PlanCommand::Assign {
            date,
            slot,
            recipe_id,
        } => {
            let date = parse_date(date)?;
            if app.recipe_query.find(&recipe_id).await?.is_none() {
                tracing::warn!(recipe.id = %recipe_id, "assigning a recipe that does not exist");
            }
            app.aggregator.assign(date, slot, Some(recipe_id)).await?;
        }
        PlanCommand::Clear { date, slot } => {
            app.aggregator.assign(parse_date(date)?, slot, None).await?;
        }
        PlanCommand::Delete { date } => {
            app.mealplan_command.delete(parse_date(date)?).await?;
        }
    }

    Ok(())
}

fn print_day(day: &MealPlanAggregate) {
    for slot in MealType::VARIANTS {
        let title = day
            .recipe(*slot)
            .map(|recipe| recipe.title.as_str())
            .unwrap_or("-");
        println!("  {:<9} {title}", slot.as_ref());
    }
}
