use axum::extract::State;
use scrapchef_core::domain::cooking_mode::{
    ports::CookingModeService,
    value_objects::{CookingSessionView, OpenCookingSessionInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    cooking_session::validators::OpenSessionValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CookingSessionResponse {
    pub data: CookingSessionView,
}

#[utoipa::path(
    post,
    path = "",
    tag = "cooking-session",
    summary = "Open cooking mode",
    description = "Splits the recipe instructions into steps and opens a session on the first one. Any session still open is closed first.",
    responses(
        (status = 201, body = CookingSessionResponse)
    ),
    request_body = OpenSessionValidator
)]
pub async fn open_session(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<OpenSessionValidator>,
) -> Result<Response<CookingSessionResponse>, ApiError> {
    let view = state
        .service
        .open_session(OpenCookingSessionInput {
            recipe: payload.recipe,
            narration_enabled: payload.narration_enabled,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CookingSessionResponse { data: view }))
}
