use axum::extract::{Path, State};
use scrapchef_core::domain::recipe_history::ports::RecipeHistoryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteSavedRecipeResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{recipe_id}",
    tag = "history",
    summary = "Delete a saved recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Saved recipe ID"),
    ),
    responses(
        (status = 200, body = DeleteSavedRecipeResponse),
        (status = 404, description = "Recipe not found")
    ),
)]
pub async fn delete_saved_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteSavedRecipeResponse>, ApiError> {
    state
        .service
        .delete_saved_recipe(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteSavedRecipeResponse {
        message: "Recipe deleted successfully".to_string(),
    }))
}
