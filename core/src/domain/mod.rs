pub mod common;
pub mod cooking_mode;
pub mod health;
pub mod ingredients;
pub mod recipe;
pub mod recipe_history;
