use scrapchef_core::domain::recipe::entities::Recipe;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct OpenSessionValidator {
    pub recipe: Recipe,

    /// Start reading the first step aloud right away.
    #[serde(default)]
    pub narration_enabled: bool,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetNarrationValidator {
    pub enabled: bool,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReplaceInstructionsValidator {
    #[serde(default)]
    #[validate(length(max = 20000, message = "instructions must be at most 20000 characters"))]
    pub instructions: Option<String>,
}
