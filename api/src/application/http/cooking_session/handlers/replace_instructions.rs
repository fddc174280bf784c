use axum::extract::{Path, State};
use scrapchef_core::domain::cooking_mode::ports::CookingModeService;
use uuid::Uuid;

use crate::application::http::{
    cooking_session::{
        handlers::open_session::CookingSessionResponse, validators::ReplaceInstructionsValidator,
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
    path = "/{session_id}/instructions",
    tag = "cooking-session",
    summary = "Replace the instructions",
    description = "Re-parses the steps and returns to the first one.",
    params(
        ("session_id" = Uuid, Path, description = "Cooking session ID"),
    ),
    responses(
        (status = 200, body = CookingSessionResponse),
        (status = 404, description = "No such open session")
    ),
    request_body = ReplaceInstructionsValidator
)]
pub async fn replace_instructions(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ReplaceInstructionsValidator>,
) -> Result<Response<CookingSessionResponse>, ApiError> {
    let view = state
        .service
        .replace_instructions(session_id, payload.instructions)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CookingSessionResponse { data: view }))
}
