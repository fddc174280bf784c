use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError, generate_uuid_v7, ports::LLMClient, services::Service,
    },
    cooking_mode::{
        outbox::NarrationOutbox,
        ports::{CookingModeService, SpeechEngine},
        session::CookingSession,
        value_objects::{
            CookingSessionView, NarrationCommand, OpenCookingSessionInput, UtteranceEvent,
        },
    },
    health::ports::HealthCheckRepository,
    recipe_history::ports::RecipeHistoryRepository,
};

/// The session currently open, if any. Only one exists at a time.
#[derive(Debug)]
pub struct ActiveCookingSession {
    pub id: Uuid,
    pub session: CookingSession<NarrationOutbox>,
}

impl ActiveCookingSession {
    fn view(&mut self) -> CookingSessionView {
        let session = &mut self.session;
        CookingSessionView {
            id: self.id,
            recipe_name: session.recipe_name().to_string(),
            steps: session.steps().as_slice().to_vec(),
            step_index: session.step_index(),
            step_count: session.steps().len(),
            current_step: session.current_step().map(str::to_string),
            can_go_previous: session.can_go_previous(),
            can_go_next: session.can_go_next(),
            narration_available: session.narration_available(),
            narration_enabled: session.narration_enabled(),
            is_narrating: session.is_narrating(),
            notices: session.take_notices(),
        }
    }
}

fn matching<'a>(
    slot: &'a mut Option<ActiveCookingSession>,
    session_id: Uuid,
) -> Result<&'a mut ActiveCookingSession, CoreError> {
    slot.as_mut()
        .filter(|active| active.id == session_id)
        .ok_or(CoreError::NotFound)
}

impl<RH, HC, LLM> Service<RH, HC, LLM>
where
    RH: RecipeHistoryRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn with_session<T>(
        &self,
        session_id: Uuid,
        apply: impl FnOnce(&mut ActiveCookingSession) -> T + Send,
    ) -> Result<T, CoreError> {
        let mut slot = self.cooking_session.lock().await;
        let active = matching(&mut slot, session_id)?;
        Ok(apply(active))
    }
}

impl<RH, HC, LLM> CookingModeService for Service<RH, HC, LLM>
where
    RH: RecipeHistoryRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self, input), fields(recipe_name = %input.recipe.recipe_name))]
    async fn open_session(
        &self,
        input: OpenCookingSessionInput,
    ) -> Result<CookingSessionView, CoreError> {
        let mut slot = self.cooking_session.lock().await;
        let mut engine = self.narration_available.then(NarrationOutbox::new);
        if let Some(previous) = slot.take() {
            warn!(session_id = %previous.id, "closing cooking session replaced by a new one");
            previous.session.close();
            // The old id stops answering, so its final cancel rides on the new outbox.
            if let Some(outbox) = engine.as_mut() {
                outbox.cancel_all();
            }
        }

        let mut session = CookingSession::open(&input.recipe, engine);
        if input.narration_enabled {
            session.set_narration_enabled(true);
        }

        let mut active = ActiveCookingSession {
            id: generate_uuid_v7(),
            session,
        };
        let view = active.view();
        info!(session_id = %active.id, "cooking session ready");
        *slot = Some(active);

        Ok(view)
    }

    async fn get_session(&self, session_id: Uuid) -> Result<CookingSessionView, CoreError> {
        self.with_session(session_id, |active| active.view()).await
    }

    async fn next_step(&self, session_id: Uuid) -> Result<CookingSessionView, CoreError> {
        self.with_session(session_id, |active| {
            active.session.next();
            active.view()
        })
        .await
    }

    async fn previous_step(&self, session_id: Uuid) -> Result<CookingSessionView, CoreError> {
        self.with_session(session_id, |active| {
            active.session.previous();
            active.view()
        })
        .await
    }

    async fn set_narration(
        &self,
        session_id: Uuid,
        enabled: bool,
    ) -> Result<CookingSessionView, CoreError> {
        self.with_session(session_id, |active| {
            active.session.set_narration_enabled(enabled);
            active.view()
        })
        .await
    }

    async fn replace_instructions(
        &self,
        session_id: Uuid,
        instructions: Option<String>,
    ) -> Result<CookingSessionView, CoreError> {
        self.with_session(session_id, |active| {
            active.session.replace_instructions(instructions.as_deref());
            active.view()
        })
        .await
    }

    async fn drain_narration_commands(
        &self,
        session_id: Uuid,
    ) -> Result<Vec<NarrationCommand>, CoreError> {
        self.with_session(session_id, |active| {
            active
                .session
                .engine_mut()
                .map(NarrationOutbox::drain)
                .unwrap_or_default()
        })
        .await
    }

    async fn report_narration_event(
        &self,
        session_id: Uuid,
        event: UtteranceEvent,
    ) -> Result<CookingSessionView, CoreError> {
        self.with_session(session_id, |active| {
            active.session.handle_engine_event(event);
            active.view()
        })
        .await
    }

    #[instrument(skip(self))]
    async fn close_session(
        &self,
        session_id: Uuid,
    ) -> Result<Vec<NarrationCommand>, CoreError> {
        let mut slot = self.cooking_session.lock().await;
        matching(&mut slot, session_id)?;

        let commands = slot
            .take()
            .and_then(|active| active.session.close())
            .map(|mut outbox| outbox.drain())
            .unwrap_or_default();
        Ok(commands)
    }
}
