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
    post,
    path = "/{session_id}/next",
    tag = "cooking-session",
    summary = "Go to the next step",
    description = "Does nothing on the last step.",
    params(
        ("session_id" = Uuid, Path, description = "Cooking session ID"),
    ),
    responses(
        (status = 200, body = CookingSessionResponse),
        (status = 404, description = "No such open session")
    ),
)]
pub async fn next_step(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<CookingSessionResponse>, ApiError> {
    let view = state
        .service
        .next_step(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CookingSessionResponse { data: view }))
}

#[utoipa::path(
    post,
    path = "/{session_id}/previous",
    tag = "cooking-session",
    summary = "Go to the previous step",
    description = "Does nothing on the first step.",
    params(
        ("session_id" = Uuid, Path, description = "Cooking session ID"),
    ),
    responses(
        (status = 200, body = CookingSessionResponse),
        (status = 404, description = "No such open session")
    ),
)]
pub async fn previous_step(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<CookingSessionResponse>, ApiError> {
    let view = state
        .service
        .previous_step(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CookingSessionResponse { data: view }))
}
