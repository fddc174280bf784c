use axum::extract::{Path, State};
use scrapchef_core::domain::recipe_history::{
    entities::SavedRecipe, ports::RecipeHistoryService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSavedRecipeResponse {
    pub data: SavedRecipe,
}

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "history",
    summary = "Get a saved recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Saved recipe ID"),
    ),
    responses(
        (status = 200, body = GetSavedRecipeResponse),
        (status = 404, description = "Recipe not found")
    ),
)]
pub async fn get_saved_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetSavedRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .get_saved_recipe(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSavedRecipeResponse { data: recipe }))
}
