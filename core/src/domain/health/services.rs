use crate::domain::{
    common::{entities::app_errors::CoreError, ports::LLMClient, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    recipe_history::ports::RecipeHistoryRepository,
};

impl<RH, HC, LLM> HealthCheckService for Service<RH, HC, LLM>
where
    RH: RecipeHistoryRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
