use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    SqlErr,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe_history::{
        entities::SavedRecipe, ports::RecipeHistoryRepository,
        value_objects::GetSavedRecipesFilter,
    },
};
use crate::entity::saved_recipes::{
    ActiveModel as SavedRecipeActiveModel, Column as SavedRecipeColumn,
    Entity as SavedRecipeEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeHistoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeHistoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_insert_error(e: DbErr) -> CoreError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
        return CoreError::DuplicateRecipe;
    }
    error!("Failed to save recipe: {}", e);
    CoreError::InternalServerError
}

impl RecipeHistoryRepository for PostgresRecipeHistoryRepository {
    async fn list(&self, filter: GetSavedRecipesFilter) -> Result<Vec<SavedRecipe>, CoreError> {
        let mut query = SavedRecipeEntity::find().order_by_desc(SavedRecipeColumn::SavedAt);

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let recipes = query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list saved recipes: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(SavedRecipe::from)
            .collect();

        Ok(recipes)
    }

    async fn get_by_id(&self, recipe_id: Uuid) -> Result<Option<SavedRecipe>, CoreError> {
        let recipe = SavedRecipeEntity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get saved recipe by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(SavedRecipe::from);

        Ok(recipe)
    }

    async fn find_by_name_and_input(
        &self,
        name: String,
        ingredients_input: String,
    ) -> Result<Option<SavedRecipe>, CoreError> {
        let recipe = SavedRecipeEntity::find()
            .filter(SavedRecipeColumn::Name.eq(name))
            .filter(SavedRecipeColumn::IngredientsInput.eq(ingredients_input))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to look up saved recipe: {}", e);
                CoreError::InternalServerError
            })?
            .map(SavedRecipe::from);

        Ok(recipe)
    }

    async fn create(&self, recipe: SavedRecipe) -> Result<SavedRecipe, CoreError> {
        let created = SavedRecipeEntity::insert(SavedRecipeActiveModel {
            id: Set(recipe.id),
            name: Set(recipe.name),
            ingredients_list: Set(recipe.ingredients_list),
            instructions: Set(recipe.instructions),
            additional_tips: Set(recipe.additional_tips),
            ingredients_input: Set(recipe.ingredients_input),
            date_saved: Set(recipe.date_saved),
            saved_at: Set(recipe.saved_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(SavedRecipe::from)
        .map_err(map_insert_error)?;

        Ok(created)
    }

    async fn delete(&self, recipe_id: Uuid) -> Result<bool, CoreError> {
        let result = SavedRecipeEntity::delete_by_id(recipe_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete saved recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected > 0)
    }

    async fn clear(&self) -> Result<u64, CoreError> {
        let result = SavedRecipeEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to clear recipe history: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
