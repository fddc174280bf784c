use axum::extract::State;
use scrapchef_core::domain::ingredients::{
    ports::IngredientService,
    value_objects::{AnalyzeImageInput, ImagePayload},
};

use crate::application::http::{
    ingredients::{
        handlers::analyze_image::AnalyzeImageResponse, validators::AnalyzeImageUriValidator,
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
    post,
    path = "/analyze-uri",
    tag = "ingredients",
    summary = "Detect ingredients in a photo data URI",
    description = "Same as the multipart upload, for photos captured by the camera and sent as a base64 data URI.",
    responses(
        (status = 200, body = AnalyzeImageResponse),
        (status = 400, description = "Malformed data URI"),
        (status = 502, description = "Ingredient detection failed")
    ),
    request_body = AnalyzeImageUriValidator
)]
pub async fn analyze_image_uri(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeImageUriValidator>,
) -> Result<Response<AnalyzeImageResponse>, ApiError> {
    let image = ImagePayload::from_data_uri(&payload.image_data_uri)?;

    let detected = state
        .service
        .analyze_image(AnalyzeImageInput {
            image,
            existing_ingredients: payload.existing_ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeImageResponse { data: detected }))
}
