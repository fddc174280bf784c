pub use super::saved_recipes::Entity as SavedRecipes;
