use axum::extract::State;
use scrapchef_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::GenerateRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::GenerateRecipeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipe",
    summary = "Generate a recipe",
    description = "Asks the LLM for a recipe that uses the given ingredients.",
    responses(
        (status = 200, body = GenerateRecipeResponse),
        (status = 400, description = "No ingredients given"),
        (status = 502, description = "Recipe generation failed")
    ),
    request_body = GenerateRecipeValidator
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<GenerateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .generate_recipe(GenerateRecipeInput {
            ingredients: payload.ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipeResponse { data: recipe }))
}
