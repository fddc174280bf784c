use axum::extract::{Multipart, State};
use scrapchef_core::domain::ingredients::{
    ports::IngredientService,
    value_objects::{AnalyzeImageInput, DetectedIngredients, ImagePayload},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeImageResponse {
    pub data: DetectedIngredients,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "ingredients",
    summary = "Detect ingredients in a photo",
    description = "Accepts a multipart form with an `image` file and an optional `existing_ingredients` text field. Detected ingredients are appended to the existing text.",
    responses(
        (status = 200, body = AnalyzeImageResponse),
        (status = 400, description = "Missing or invalid image"),
        (status = 502, description = "Ingredient detection failed")
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeImageResponse>, ApiError> {
    let mut image: Option<ImagePayload> = None;
    let mut existing_ingredients: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "existing_ingredients" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read existing_ingredients: {}", e))
                })?;
                existing_ingredients = Some(value);
            }
            "image" => {
                let mime_type = field.content_type().unwrap_or("image/jpeg").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                image = Some(ImagePayload::new(mime_type, data.to_vec())?);
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let detected = state
        .service
        .analyze_image(AnalyzeImageInput {
            image,
            existing_ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeImageResponse { data: detected }))
}
