use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe_history::{
        entities::SavedRecipe,
        value_objects::{GetSavedRecipesFilter, SaveRecipeInput},
    },
};

/// Repository trait for saved recipes
#[cfg_attr(test, mockall::automock)]
pub trait RecipeHistoryRepository: Send + Sync {
    /// Most recently saved first.
    fn list(
        &self,
        filter: GetSavedRecipesFilter,
    ) -> impl Future<Output = Result<Vec<SavedRecipe>, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<SavedRecipe>, CoreError>> + Send;

    fn find_by_name_and_input(
        &self,
        name: String,
        ingredients_input: String,
    ) -> impl Future<Output = Result<Option<SavedRecipe>, CoreError>> + Send;

    /// Fails with [`CoreError::DuplicateRecipe`] when the pair already exists.
    fn create(
        &self,
        recipe: SavedRecipe,
    ) -> impl Future<Output = Result<SavedRecipe, CoreError>> + Send;

    /// Returns whether a row was deleted.
    fn delete(&self, recipe_id: Uuid) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn clear(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

/// Service trait for the recipe history
#[cfg_attr(test, mockall::automock)]
pub trait RecipeHistoryService: Send + Sync {
    fn get_saved_recipes(
        &self,
        filter: GetSavedRecipesFilter,
    ) -> impl Future<Output = Result<Vec<SavedRecipe>, CoreError>> + Send;

    fn get_saved_recipe(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<SavedRecipe, CoreError>> + Send;

    fn save_recipe(
        &self,
        input: SaveRecipeInput,
    ) -> impl Future<Output = Result<SavedRecipe, CoreError>> + Send;

    fn delete_saved_recipe(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear_history(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
