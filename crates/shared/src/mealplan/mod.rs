use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(EnumString, VariantArray, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}
