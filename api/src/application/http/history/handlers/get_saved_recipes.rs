use axum::extract::{Query, State};
use scrapchef_core::domain::recipe_history::{
    entities::SavedRecipe, ports::RecipeHistoryService, value_objects::GetSavedRecipesFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetSavedRecipesQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSavedRecipesResponse {
    pub data: Vec<SavedRecipe>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "history",
    summary = "List saved recipes",
    description = "Returns the recipe history, most recently saved first.",
    params(GetSavedRecipesQuery),
    responses(
        (status = 200, body = GetSavedRecipesResponse)
    ),
)]
pub async fn get_saved_recipes(
    Query(query): Query<GetSavedRecipesQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetSavedRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .get_saved_recipes(GetSavedRecipesFilter {
            limit: query.limit,
            offset: query.offset,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSavedRecipesResponse { data: recipes }))
}
