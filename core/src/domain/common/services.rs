use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    common::ports::LLMClient,
    cooking_mode::services::ActiveCookingSession,
    health::ports::HealthCheckRepository,
    recipe_history::ports::RecipeHistoryRepository,
};

/// Holds every adapter the domain services need. Each domain area implements
/// its service trait on this struct.
pub struct Service<RH, HC, LLM>
where
    RH: RecipeHistoryRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    pub recipe_history_repository: Arc<RH>,
    pub health_check_repository: Arc<HC>,
    pub llm_client: Arc<LLM>,
    pub(crate) cooking_session: Arc<Mutex<Option<ActiveCookingSession>>>,
    pub(crate) narration_available: bool,
}

impl<RH, HC, LLM> Service<RH, HC, LLM>
where
    RH: RecipeHistoryRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    pub fn new(
        recipe_history_repository: RH,
        health_check_repository: HC,
        llm_client: LLM,
        narration_available: bool,
    ) -> Self {
        Self {
            recipe_history_repository: Arc::new(recipe_history_repository),
            health_check_repository: Arc::new(health_check_repository),
            llm_client: Arc::new(llm_client),
            cooking_session: Arc::new(Mutex::new(None)),
            narration_available,
        }
    }
}

impl<RH, HC, LLM> Clone for Service<RH, HC, LLM>
where
    RH: RecipeHistoryRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            recipe_history_repository: Arc::clone(&self.recipe_history_repository),
            health_check_repository: Arc::clone(&self.health_check_repository),
            llm_client: Arc::clone(&self.llm_client),
            cooking_session: Arc::clone(&self.cooking_session),
            narration_available: self.narration_available,
        }
    }
}
