use axum::extract::{Path, State};
use scrapchef_core::domain::cooking_mode::ports::CookingModeService;
use uuid::Uuid;

use crate::application::http::{
    cooking_session::handlers::open_session::CookingSessionResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{session_id}",
    tag = "cooking-session",
    summary = "Get cooking session",
    description = "Returns the current step and drains pending narration notices.",
    params(
        ("session_id" = Uuid, Path, description = "Cooking session ID"),
    ),
    responses(
        (status = 200, body = CookingSessionResponse),
        (status = 404, description = "No such open session")
    ),
)]
pub async fn get_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<CookingSessionResponse>, ApiError> {
    let view = state
        .service
        .get_session(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CookingSessionResponse { data: view }))
}
