use axum::extract::State;
use scrapchef_core::domain::recipe_history::ports::RecipeHistoryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClearHistoryResponse {
    pub deleted: u64,
}

#[utoipa::path(
    delete,
    path = "",
    tag = "history",
    summary = "Clear the recipe history",
    responses(
        (status = 200, body = ClearHistoryResponse)
    ),
)]
pub async fn clear_history(
    State(state): State<AppState>,
) -> Result<Response<ClearHistoryResponse>, ApiError> {
    let deleted = state
        .service
        .clear_history()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearHistoryResponse { deleted }))
}
