use sea_query::Iden;

#[derive(Iden, Clone, Copy)]
pub enum Recipe {
    Table,
    Id,
    Title,
    PrepTime,
    CookTime,
    Servings,
    Ingredients,
    Instructions,
    CreatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum ShoppingItem {
    Table,
    Id,
    Name,
    Quantity,
    Unit,
    Checked,
    CreatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum MealPlan {
    Table,
    Id,
    Date,
    Breakfast,
    Lunch,
    Dinner,
}
