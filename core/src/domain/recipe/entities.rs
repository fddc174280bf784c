use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A generated recipe. Only `instructions` is consumed by cooking mode; the
/// other text blocks are for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub recipe_name: String,
    pub ingredients_list: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_tips: Option<String>,
}

impl Recipe {
    /// Blank tips are treated as absent.
    pub fn normalized(mut self) -> Self {
        self.recipe_name = self.recipe_name.trim().to_string();
        self.additional_tips = self
            .additional_tips
            .map(|tips| tips.trim().to_string())
            .filter(|tips| !tips.is_empty());
        self
    }
}
