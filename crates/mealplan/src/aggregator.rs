use std::collections::{BTreeMap, HashMap, HashSet};

use nutriplan_recipe::RecipeRow;
use nutriplan_shared::{State, format_date, mealplan::MealType, week_end_of};
use time::Date;

use crate::{Command, MealPlanRow, Query, Week};

/// A day of the plan with its recipes resolved.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MealPlanAggregate {
    pub date: String,
    pub breakfast: Option<RecipeRow>,
    pub lunch: Option<RecipeRow>,
    pub dinner: Option<RecipeRow>,
}

impl MealPlanAggregate {
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Default::default()
        }
    }

    pub fn recipe(&self, slot: MealType) -> Option<&RecipeRow> {
        match slot {
            MealType::Breakfast => self.breakfast.as_ref(),
            MealType::Lunch => self.lunch.as_ref(),
            MealType::Dinner => self.dinner.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.breakfast.is_none() && self.lunch.is_none() && self.dinner.is_none()
    }

    fn resolve(row: MealPlanRow, recipes: &HashMap<String, RecipeRow>) -> Self {
        let lookup = |slot: MealType| {
            let id = row.recipe_id(slot)?;
            let recipe = recipes.get(id).cloned();
            if recipe.is_none() {
                tracing::debug!(date = %row.date, %slot, recipe.id = %id, "dangling recipe reference");
            }

            recipe
        };

        Self {
            breakfast: lookup(MealType::Breakfast),
            lunch: lookup(MealType::Lunch),
            dinner: lookup(MealType::Dinner),
            date: row.date,
        }
    }
}

/// Joins meal plan rows with the recipe table and forwards slot edits.
#[derive(Clone)]
pub struct Aggregator {
    plans: Query,
    recipes: nutriplan_recipe::Query,
    command: Command,
}

impl Aggregator {
    pub fn new(state: State) -> Self {
        Self {
            plans: Query(state.clone()),
            recipes: nutriplan_recipe::Query(state.clone()),
            command: Command::new(state),
        }
    }

    /// Planned days in `[start, start + 6]`, keyed by ISO date.
    ///
    /// Days without a stored plan are absent. A slot pointing at a deleted
    /// recipe resolves to `None`.
    pub async fn week(&self, start: Date) -> anyhow::Result<BTreeMap<String, MealPlanAggregate>> {
        let rows = self.plans.filter_range(start, week_end_of(start)).await?;

        let ids = rows
            .iter()
            .flat_map(|row| row.recipe_ids())
            .map(str::to_owned)
            .collect::<HashSet<_>>();

        let recipes = self
            .recipes
            .find_many(ids)
            .await?
            .into_iter()
            .map(|recipe| (recipe.id.to_owned(), recipe))
            .collect::<HashMap<_, _>>();

        Ok(rows
            .into_iter()
            .map(|row| {
                let aggregate = MealPlanAggregate::resolve(row, &recipes);
                (aggregate.date.to_owned(), aggregate)
            })
            .collect())
    }

    /// All seven days of the week starting at `start`, unplanned days empty.
    pub async fn week_or_empty(&self, start: Date) -> anyhow::Result<Vec<MealPlanAggregate>> {
        let mut planned = self.week(start).await?;

        Ok(Week::starting(start)
            .days()
            .into_iter()
            .map(format_date)
            .map(|day| {
                planned
                    .remove(&day)
                    .unwrap_or_else(|| MealPlanAggregate::empty(day))
            })
            .collect())
    }

    pub async fn assign(
        &self,
        date: Date,
        slot: MealType,
        recipe_id: Option<String>,
    ) -> nutriplan_shared::Result<()> {
        self.command.assign(date, slot, recipe_id).await
    }
}
