//! External service clients

pub mod nutritionix;

pub use nutritionix::{FoodNutrients, LookupError, NutritionixClient};
