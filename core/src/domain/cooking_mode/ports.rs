use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    cooking_mode::value_objects::{
        CookingSessionView, NarrationCommand, OpenCookingSessionInput, Utterance, UtteranceEvent,
    },
};

/// Text-to-speech engine shared by the whole process.
///
/// `speak` only issues the request; start, end and failure are reported
/// later as [`UtteranceEvent`]s tagged with the utterance id.
#[cfg_attr(test, mockall::automock)]
pub trait SpeechEngine: Send {
    fn speak(&mut self, utterance: &Utterance);

    fn cancel_all(&mut self);
}

/// Service trait hosting the single open cooking-mode session.
pub trait CookingModeService: Send + Sync {
    /// Opens a session for the recipe, closing any session still open.
    fn open_session(
        &self,
        input: OpenCookingSessionInput,
    ) -> impl Future<Output = Result<CookingSessionView, CoreError>> + Send;

    fn get_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<CookingSessionView, CoreError>> + Send;

    fn next_step(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<CookingSessionView, CoreError>> + Send;

    fn previous_step(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<CookingSessionView, CoreError>> + Send;

    fn set_narration(
        &self,
        session_id: Uuid,
        enabled: bool,
    ) -> impl Future<Output = Result<CookingSessionView, CoreError>> + Send;

    fn replace_instructions(
        &self,
        session_id: Uuid,
        instructions: Option<String>,
    ) -> impl Future<Output = Result<CookingSessionView, CoreError>> + Send;

    fn drain_narration_commands(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Vec<NarrationCommand>, CoreError>> + Send;

    fn report_narration_event(
        &self,
        session_id: Uuid,
        event: UtteranceEvent,
    ) -> impl Future<Output = Result<CookingSessionView, CoreError>> + Send;

    /// Closes the session and returns the engine commands still to execute,
    /// ending with the final `CancelAll`.
    fn close_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Vec<NarrationCommand>, CoreError>> + Send;
}
