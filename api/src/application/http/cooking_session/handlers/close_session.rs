use axum::extract::{Path, State};
use scrapchef_core::domain::cooking_mode::ports::CookingModeService;
use uuid::Uuid;

use crate::application::http::{
    cooking_session::handlers::drain_narration_commands::NarrationCommandsResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/{session_id}",
    tag = "cooking-session",
    summary = "Close cooking mode",
    description = "Closes the session and returns the last speech commands for the client, ending with a cancel.",
    params(
        ("session_id" = Uuid, Path, description = "Cooking session ID"),
    ),
    responses(
        (status = 200, body = NarrationCommandsResponse),
        (status = 404, description = "No such open session")
    ),
)]
pub async fn close_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<NarrationCommandsResponse>, ApiError> {
    let commands = state
        .service
        .close_session(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(NarrationCommandsResponse { data: commands }))
}
