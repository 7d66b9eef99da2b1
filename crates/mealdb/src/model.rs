use std::collections::HashMap;

use nutriplan_recipe::RecipeInput;
use serde::Deserialize;

/// Highest `strIngredientN` / `strMeasureN` index the service returns.
pub const MAX_INGREDIENTS: usize = 20;

#[derive(Debug, Deserialize)]
pub struct MealsResponse<T> {
    pub meals: Option<Vec<T>>,
}

impl<T> MealsResponse<T> {
    pub fn into_meals(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteMeal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteMealDetails {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(flatten)]
    extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteIngredient {
    pub name: String,
    pub measure: Option<String>,
}

impl RemoteIngredient {
    pub fn line(&self) -> String {
        match self.measure.as_deref() {
            Some(measure) => format!("{measure} {}", self.name),
            None => self.name.to_owned(),
        }
    }
}

impl RemoteMealDetails {
    /// Numbered ingredient/measure pairs, skipping blank ingredients.
    pub fn ingredients(&self) -> Vec<RemoteIngredient> {
        (1..=MAX_INGREDIENTS)
            .filter_map(|n| {
                let name = self.text(&format!("strIngredient{n}"))?;
                let measure = self.text(&format!("strMeasure{n}"));

                Some(RemoteIngredient {
                    name: name.to_owned(),
                    measure: measure.map(str::to_owned),
                })
            })
            .collect()
    }

    /// Recipe input for a local import. Times and servings are unknown remotely
    /// and default to 0.
    pub fn to_create_input(&self) -> RecipeInput {
        let ingredients = self
            .ingredients()
            .iter()
            .map(RemoteIngredient::line)
            .collect::<Vec<_>>()
            .join("\n");

        RecipeInput {
            title: self.name.trim().to_owned(),
            prep_time: 0,
            cook_time: 0,
            servings: 0,
            ingredients,
            instructions: self
                .instructions
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_owned(),
        }
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.extra
            .get(key)
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(value: serde_json::Value) -> RemoteMealDetails {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_ingredients_skip_blank_and_null() {
        let meal = details(serde_json::json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strCategory": "Chicken",
            "strInstructions": "Preheat oven.",
            "strMealThumb": null,
            "strIngredient1": "soy sauce",
            "strMeasure1": "3/4 cup",
            "strIngredient2": " ",
            "strMeasure2": "1 tbs",
            "strIngredient3": null,
            "strIngredient4": "water",
            "strMeasure4": "",
            "strIngredient20": "garlic",
            "strMeasure20": "2 cloves",
            "strIngredient21": "ignored",
        }));

        assert_eq!(
            meal.ingredients(),
            vec![
                RemoteIngredient {
                    name: "soy sauce".to_owned(),
                    measure: Some("3/4 cup".to_owned()),
                },
                RemoteIngredient {
                    name: "water".to_owned(),
                    measure: None,
                },
                RemoteIngredient {
                    name: "garlic".to_owned(),
                    measure: Some("2 cloves".to_owned()),
                },
            ]
        );
    }

    #[test]
    fn test_to_create_input() {
        let meal = details(serde_json::json!({
            "idMeal": "1",
            "strMeal": " Pancakes ",
            "strCategory": "Dessert",
            "strInstructions": "Mix and fry.\n",
            "strIngredient1": "Flour",
            "strMeasure1": "100g",
            "strIngredient2": "Eggs",
            "strMeasure2": "2",
            "strIngredient3": "Salt",
        }));

        let input = meal.to_create_input();

        assert_eq!(input.title, "Pancakes");
        assert_eq!(input.ingredients, "100g Flour\n2 Eggs\nSalt");
        assert_eq!(input.instructions, "Mix and fry.");
        assert_eq!(input.servings, 0);
    }

    #[test]
    fn test_null_meals_is_empty() {
        let response: MealsResponse<RemoteMeal> =
            serde_json::from_str(r#"{"meals": null}"#).unwrap();

        assert!(response.into_meals().is_empty());
    }
}
