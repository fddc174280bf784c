use scrapchef_core::domain::ingredients::helpers::append_ingredients;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ingredients::validators::AppendDictationValidator,
    server::api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AppendDictationResponse {
    pub ingredients_text: String,
}

#[utoipa::path(
    post,
    path = "/dictation",
    tag = "ingredients",
    summary = "Append a dictated transcript",
    description = "Merges a speech-to-text transcript into the ingredient text typed so far.",
    responses(
        (status = 200, body = AppendDictationResponse),
        (status = 422, description = "Empty transcript")
    ),
    request_body = AppendDictationValidator
)]
pub async fn append_dictation(
    ValidateJson(payload): ValidateJson<AppendDictationValidator>,
) -> Result<Response<AppendDictationResponse>, ApiError> {
    Ok(Response::OK(AppendDictationResponse {
        ingredients_text: append_ingredients(&payload.existing_ingredients, &payload.transcript),
    }))
}
