mod meal_plan;
mod recipe;
mod shopping_item;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "nutriplan",
    "m0001",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        shopping_item::CreateTable,
        meal_plan::CreateTable,
        meal_plan::CreateDateIdx
    ]
);
