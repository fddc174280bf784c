use scrapchef_core::domain::recipe::entities::Recipe;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveRecipeValidator {
    #[validate(length(min = 1, max = 255, message = "recipe_name is required"))]
    pub recipe_name: String,

    pub ingredients_list: String,

    #[serde(default)]
    pub instructions: String,

    #[serde(default)]
    pub additional_tips: Option<String>,

    /// The ingredient text the recipe was generated from.
    pub ingredients_input: String,
}

impl SaveRecipeValidator {
    pub fn recipe(&self) -> Recipe {
        Recipe {
            recipe_name: self.recipe_name.clone(),
            ingredients_list: self.ingredients_list.clone(),
            instructions: self.instructions.clone(),
            additional_tips: self.additional_tips.clone(),
        }
        .normalized()
    }
}
