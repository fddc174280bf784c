use axum::extract::{Path, State};
use scrapchef_core::domain::cooking_mode::ports::CookingModeService;
use uuid::Uuid;

use crate::application::http::{
    cooking_session::{
        handlers::open_session::CookingSessionResponse, validators::SetNarrationValidator,
    },
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/{session_id}/narration",
    tag = "cooking-session",
    summary = "Turn narration on or off",
    description = "Turning narration off cancels speech immediately. Turning it on reads the current step.",
    params(
        ("session_id" = Uuid, Path, description = "Cooking session ID"),
    ),
    responses(
        (status = 200, body = CookingSessionResponse),
        (status = 404, description = "No such open session")
    ),
    request_body = SetNarrationValidator
)]
pub async fn set_narration(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SetNarrationValidator>,
) -> Result<Response<CookingSessionResponse>, ApiError> {
    let view = state
        .service
        .set_narration(session_id, payload.enabled)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CookingSessionResponse { data: view }))
}
