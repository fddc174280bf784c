use tracing::{error, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::LLMClient, services::Service},
    health::ports::HealthCheckRepository,
    recipe::{
        entities::Recipe, ports::RecipeService, prompts::build_recipe_prompt,
        schema::get_recipe_schema, value_objects::GenerateRecipeInput,
    },
    recipe_history::ports::RecipeHistoryRepository,
};

impl<RH, HC, LLM> RecipeService for Service<RH, HC, LLM>
where
    RH: RecipeHistoryRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self, input))]
    async fn generate_recipe(&self, input: GenerateRecipeInput) -> Result<Recipe, CoreError> {
        let ingredients = input.ingredients.trim();
        if ingredients.is_empty() {
            return Err(CoreError::InvalidInput(
                "Please enter or detect some ingredients first.".to_string(),
            ));
        }

        info!(ingredients, "generating recipe");

        let raw_response = self
            .llm_client
            .generate_with_text(build_recipe_prompt(ingredients), get_recipe_schema())
            .await?;

        let recipe: Recipe = serde_json::from_str(&raw_response).map_err(|e| {
            error!("Invalid recipe format: {}", e);
            CoreError::ExternalServiceError(format!("Invalid recipe format: {}", e))
        })?;
        let recipe = recipe.normalized();

        if recipe.recipe_name.is_empty() {
            error!("LLM returned a recipe without a name");
            return Err(CoreError::ExternalServiceError(
                "Recipe generation returned no output".to_string(),
            ));
        }

        info!(recipe_name = %recipe.recipe_name, "recipe generated");
        Ok(recipe)
    }
}
