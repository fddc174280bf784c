use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::Recipe, value_objects::GenerateRecipeInput},
};

/// Service trait for recipe generation
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipe(
        &self,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;
}
