use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipeValidator {
    /// Comma separated ingredient text.
    #[validate(length(max = 2000, message = "ingredients must be at most 2000 characters"))]
    pub ingredients: String,
}
