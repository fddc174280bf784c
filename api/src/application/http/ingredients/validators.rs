use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnalyzeImageUriValidator {
    /// `data:<mimetype>;base64,<encoded_data>`
    #[validate(length(min = 1, message = "image_data_uri is required"))]
    pub image_data_uri: String,

    #[serde(default)]
    pub existing_ingredients: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AppendDictationValidator {
    #[serde(default)]
    pub existing_ingredients: String,

    #[validate(length(min = 1, message = "transcript is required"))]
    pub transcript: String,
}
