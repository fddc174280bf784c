use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, recipe::entities::Recipe};

/// A recipe kept in the history, with the ingredient text it was generated
/// from. `(name, ingredients_input)` is unique across the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SavedRecipe {
    pub id: Uuid,
    pub name: String,
    pub ingredients_list: String,
    pub instructions: String,
    pub additional_tips: Option<String>,
    pub ingredients_input: String,
    /// Calendar date of the save, `YYYY-MM-DD`.
    pub date_saved: String,
    pub saved_at: DateTime<Utc>,
}

impl SavedRecipe {
    pub fn new(recipe: Recipe, ingredients_input: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: recipe.recipe_name,
            ingredients_list: recipe.ingredients_list,
            instructions: recipe.instructions,
            additional_tips: recipe.additional_tips,
            ingredients_input,
            date_saved: now.format("%Y-%m-%d").to_string(),
            saved_at: now,
        }
    }

    pub fn recipe(&self) -> Recipe {
        Recipe {
            recipe_name: self.name.clone(),
            ingredients_list: self.ingredients_list.clone(),
            instructions: self.instructions.clone(),
            additional_tips: self.additional_tips.clone(),
        }
    }
}
