use axum::{
    Json,
    extract::{Path, State},
};
use scrapchef_core::domain::cooking_mode::{
    ports::CookingModeService, value_objects::UtteranceEvent,
};
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
    path = "/{session_id}/narration/events",
    tag = "cooking-session",
    summary = "Report a speech engine event",
    description = "The client reports when an utterance started, ended or failed. Unexpected failures show up once in the session notices.",
    params(
        ("session_id" = Uuid, Path, description = "Cooking session ID"),
    ),
    responses(
        (status = 200, body = CookingSessionResponse),
        (status = 404, description = "No such open session")
    ),
    request_body = UtteranceEvent
)]
pub async fn report_narration_event(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(event): Json<UtteranceEvent>,
) -> Result<Response<CookingSessionResponse>, ApiError> {
    let view = state
        .service
        .report_narration_event(session_id, event)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CookingSessionResponse { data: view }))
}
