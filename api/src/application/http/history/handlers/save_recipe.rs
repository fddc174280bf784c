use axum::extract::State;
use scrapchef_core::domain::recipe_history::{
    entities::SavedRecipe, ports::RecipeHistoryService, value_objects::SaveRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    history::validators::SaveRecipeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveRecipeResponse {
    pub data: SavedRecipe,
}

#[utoipa::path(
    post,
    path = "",
    tag = "history",
    summary = "Save a recipe",
    description = "Adds a generated recipe to the history. A recipe with the same name and ingredient input is only kept once.",
    responses(
        (status = 201, body = SaveRecipeResponse),
        (status = 409, description = "Recipe already saved")
    ),
    request_body = SaveRecipeValidator
)]
pub async fn save_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SaveRecipeValidator>,
) -> Result<Response<SaveRecipeResponse>, ApiError> {
    let saved = state
        .service
        .save_recipe(SaveRecipeInput {
            recipe: payload.recipe(),
            ingredients_input: payload.ingredients_input,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SaveRecipeResponse { data: saved }))
}
