use tracing::{debug, info};

use crate::domain::{
    cooking_mode::{
        cursor::StepCursor,
        narration::NarrationCoordinator,
        parser::{StepSequence, parse_steps},
        ports::SpeechEngine,
        value_objects::{NarrationNotice, UtteranceEvent},
    },
    recipe::entities::Recipe,
};

/// One open cooking-mode session, bound to a single recipe.
///
/// Narration is active exactly when it is enabled and the session has a
/// current step. Every transition that can change either side ends in
/// [`CookingSession::renarrate`]. Closing consumes the session, so it
/// happens at most once. Dropping a session with narration on cancels it.
#[derive(Debug)]
pub struct CookingSession<E: SpeechEngine> {
    recipe_name: String,
    steps: StepSequence,
    cursor: StepCursor,
    narration: NarrationCoordinator<E>,
}

impl<E: SpeechEngine> CookingSession<E> {
    pub fn open(recipe: &Recipe, engine: Option<E>) -> Self {
        let steps = parse_steps(Some(&recipe.instructions));
        info!(
            recipe_name = %recipe.recipe_name,
            step_count = steps.len(),
            narration_available = engine.is_some(),
            "cooking session opened"
        );

        Self {
            recipe_name: recipe.recipe_name.clone(),
            cursor: StepCursor::new(steps.len()),
            steps,
            narration: NarrationCoordinator::new(engine),
        }
    }

    pub fn recipe_name(&self) -> &str {
        &self.recipe_name
    }

    pub fn steps(&self) -> &StepSequence {
        &self.steps
    }

    pub fn step_index(&self) -> Option<usize> {
        self.cursor.index()
    }

    pub fn current_step(&self) -> Option<&str> {
        self.cursor.index().and_then(|index| self.steps.get(index))
    }

    pub fn can_go_previous(&self) -> bool {
        !self.cursor.is_empty() && !self.cursor.is_first()
    }

    pub fn can_go_next(&self) -> bool {
        !self.cursor.is_last()
    }

    pub fn narration_available(&self) -> bool {
        self.narration.is_available()
    }

    pub fn narration_enabled(&self) -> bool {
        self.narration.is_enabled()
    }

    pub fn is_narrating(&self) -> bool {
        self.narration.is_narrating()
    }

    pub fn engine_mut(&mut self) -> Option<&mut E> {
        self.narration.engine_mut()
    }

    pub fn next(&mut self) {
        if self.cursor.next() {
            self.renarrate();
        }
    }

    pub fn previous(&mut self) {
        if self.cursor.previous() {
            self.renarrate();
        }
    }

    /// Turning narration on speaks the current step right away.
    pub fn set_narration_enabled(&mut self, enabled: bool) {
        if self.narration.set_enabled(enabled) && enabled {
            self.renarrate();
        }
    }

    /// Re-parses the instructions and returns to the first step.
    pub fn replace_instructions(&mut self, instructions: Option<&str>) {
        self.steps = parse_steps(instructions);
        self.cursor.reset(self.steps.len());
        debug!(step_count = self.steps.len(), "instructions replaced");
        self.renarrate();
    }

    pub fn handle_engine_event(&mut self, event: UtteranceEvent) -> Option<NarrationNotice> {
        self.narration.handle_event(event)
    }

    /// Drains notices raised since the last call.
    pub fn take_notices(&mut self) -> Vec<NarrationNotice> {
        self.narration.take_notices()
    }

    /// Ends the session, silences the engine and hands it back.
    pub fn close(mut self) -> Option<E> {
        self.narration.cancel();
        info!(recipe_name = %self.recipe_name, "cooking session closed");
        self.narration.take_engine()
    }

    fn renarrate(&mut self) {
        let step = self
            .cursor
            .index()
            .and_then(|index| self.steps.get(index).map(|text| (index, text)));
        self.narration.narrate(step);
    }
}

impl<E: SpeechEngine> Drop for CookingSession<E> {
    fn drop(&mut self) {
        if self.narration.is_enabled() {
            self.narration.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::{Sequence, predicate::always};

    use super::*;
    use crate::domain::cooking_mode::{
        ports::MockSpeechEngine,
        value_objects::{SpeechErrorKind, Utterance, UtteranceEventKind, UtteranceId},
    };

    fn recipe(instructions: &str) -> Recipe {
        Recipe {
            recipe_name: "Nasi Goreng".to_string(),
            ingredients_list: "nasi\ntelur".to_string(),
            instructions: instructions.to_string(),
            additional_tips: None,
        }
    }

    fn three_steps() -> Recipe {
        recipe("1. Heat oil\n2. Fry rice\n3. Add egg")
    }

    fn expect_cancel(engine: &mut MockSpeechEngine, seq: &mut Sequence) {
        engine
            .expect_cancel_all()
            .times(1)
            .in_sequence(seq)
            .return_const(());
    }

    fn expect_speak(engine: &mut MockSpeechEngine, seq: &mut Sequence, text: &'static str) {
        engine
            .expect_speak()
            .withf(move |utterance: &Utterance| utterance.text == text)
            .times(1)
            .in_sequence(seq)
            .return_const(());
    }

    fn failed(id: UtteranceId, error: SpeechErrorKind) -> UtteranceEvent {
        UtteranceEvent {
            utterance_id: id,
            kind: UtteranceEventKind::Failed { error },
        }
    }

    fn live_id(session: &CookingSession<MockSpeechEngine>) -> UtteranceId {
        session
            .narration
            .live_utterance()
            .map(|utterance| utterance.id)
            .expect("an utterance should be live")
    }

    #[test]
    fn test_open_starts_at_first_step_without_speaking() {
        let mut engine = MockSpeechEngine::new();
        engine.expect_speak().never();
        engine.expect_cancel_all().never();

        let session = CookingSession::open(&three_steps(), Some(engine));

        assert_eq!(session.step_index(), Some(0));
        assert_eq!(session.current_step(), Some("Heat oil"));
        assert!(!session.can_go_previous());
        assert!(session.can_go_next());
        assert!(!session.narration_enabled());
    }

    #[test]
    fn test_navigation_is_clamped_to_step_bounds() {
        let mut session = CookingSession::<MockSpeechEngine>::open(&three_steps(), None);

        for _ in 0..8 {
            session.next();
        }
        assert_eq!(session.step_index(), Some(2));
        assert!(!session.can_go_next());

        for _ in 0..8 {
            session.previous();
        }
        assert_eq!(session.step_index(), Some(0));
        assert!(!session.can_go_previous());
    }

    #[test]
    fn test_replacing_instructions_resets_cursor() {
        let mut session = CookingSession::<MockSpeechEngine>::open(&three_steps(), None);
        session.next();
        session.next();
        assert_eq!(session.step_index(), Some(2));

        session.replace_instructions(Some("- Boil water\n- Add noodles"));

        assert_eq!(session.step_index(), Some(0));
        assert_eq!(session.current_step(), Some("Boil water"));
        assert_eq!(session.steps().len(), 2);
    }

    #[test]
    fn test_recipe_without_instructions_disables_navigation() {
        let mut session = CookingSession::<MockSpeechEngine>::open(&recipe(""), None);

        session.next();
        session.previous();

        assert_eq!(session.step_index(), None);
        assert_eq!(session.current_step(), None);
        assert!(!session.can_go_next());
        assert!(!session.can_go_previous());
    }

    #[test]
    fn test_enabling_narration_speaks_current_step_immediately() {
        let mut seq = Sequence::new();
        let mut engine = MockSpeechEngine::new();
        expect_cancel(&mut engine, &mut seq);
        expect_speak(&mut engine, &mut seq, "Heat oil");
        // Dropped with narration on.
        expect_cancel(&mut engine, &mut seq);

        let mut session = CookingSession::open(&three_steps(), Some(engine));
        session.set_narration_enabled(true);

        assert!(session.narration_enabled());
        assert_eq!(live_id(&session), UtteranceId(1));
    }

    #[test]
    fn test_rapid_navigation_cancels_before_each_speak() {
        let mut seq = Sequence::new();
        let mut engine = MockSpeechEngine::new();
        expect_cancel(&mut engine, &mut seq);
        expect_speak(&mut engine, &mut seq, "Heat oil");
        expect_cancel(&mut engine, &mut seq);
        expect_speak(&mut engine, &mut seq, "Fry rice");
        expect_cancel(&mut engine, &mut seq);
        expect_speak(&mut engine, &mut seq, "Add egg");
        // Dropped with narration on.
        expect_cancel(&mut engine, &mut seq);

        let mut session = CookingSession::open(&three_steps(), Some(engine));
        session.set_narration_enabled(true);
        session.next();
        session.next();
        // Already at the last step: no further engine calls.
        session.next();

        assert_eq!(live_id(&session), UtteranceId(3));
    }

    #[test]
    fn test_disabling_narration_cancels_and_stays_silent() {
        let mut seq = Sequence::new();
        let mut engine = MockSpeechEngine::new();
        expect_cancel(&mut engine, &mut seq);
        expect_speak(&mut engine, &mut seq, "Heat oil");
        expect_cancel(&mut engine, &mut seq);

        let mut session = CookingSession::open(&three_steps(), Some(engine));
        session.set_narration_enabled(true);
        session.set_narration_enabled(false);
        session.next();
        session.previous();

        assert!(!session.narration_enabled());
        assert!(session.narration.live_utterance().is_none());
    }

    #[test]
    fn test_narration_resumes_after_re_enable() {
        let mut seq = Sequence::new();
        let mut engine = MockSpeechEngine::new();
        expect_cancel(&mut engine, &mut seq);
        expect_speak(&mut engine, &mut seq, "Heat oil");
        expect_cancel(&mut engine, &mut seq);
        expect_cancel(&mut engine, &mut seq);
        expect_speak(&mut engine, &mut seq, "Fry rice");
        // Dropped with narration on.
        expect_cancel(&mut engine, &mut seq);

        let mut session = CookingSession::open(&three_steps(), Some(engine));
        session.set_narration_enabled(true);
        session.set_narration_enabled(false);
        session.next();
        session.set_narration_enabled(true);

        assert_eq!(session.current_step(), Some("Fry rice"));
    }

    #[test]
    fn test_replacing_instructions_renarrates_first_step() {
        let mut seq = Sequence::new();
        let mut engine = MockSpeechEngine::new();
        expect_cancel(&mut engine, &mut seq);
        expect_speak(&mut engine, &mut seq, "Heat oil");
        expect_cancel(&mut engine, &mut seq);
        expect_speak(&mut engine, &mut seq, "Fry rice");
        expect_cancel(&mut engine, &mut seq);
        expect_speak(&mut engine, &mut seq, "Boil water");
        // Dropped with narration on.
        expect_cancel(&mut engine, &mut seq);

        let mut session = CookingSession::open(&three_steps(), Some(engine));
        session.set_narration_enabled(true);
        session.next();
        session.replace_instructions(Some("Boil water\nAdd noodles"));

        assert_eq!(session.step_index(), Some(0));
    }

    #[test]
    fn test_dropping_session_cancels_live_narration() {
        let mut seq = Sequence::new();
        let mut engine = MockSpeechEngine::new();
        expect_cancel(&mut engine, &mut seq);
        expect_speak(&mut engine, &mut seq, "Heat oil");
        expect_cancel(&mut engine, &mut seq);

        let mut session = CookingSession::open(&three_steps(), Some(engine));
        session.set_narration_enabled(true);
        drop(session);
    }

    #[test]
    fn test_dropping_silent_session_leaves_engine_alone() {
        let mut engine = MockSpeechEngine::new();
        engine.expect_speak().never();
        engine.expect_cancel_all().never();

        let mut session = CookingSession::open(&three_steps(), Some(engine));
        session.next();
        drop(session);
    }

    #[test]
    fn test_close_hands_back_engine_after_cancelling() {
        let mut seq = Sequence::new();
        let mut engine = MockSpeechEngine::new();
        expect_cancel(&mut engine, &mut seq);
        expect_speak(&mut engine, &mut seq, "Heat oil");
        expect_cancel(&mut engine, &mut seq);

        let mut session = CookingSession::open(&three_steps(), Some(engine));
        session.set_narration_enabled(true);
        // A second cancel from the closed session's drop would break the sequence.
        assert!(session.close().is_some());
    }

    #[test]
    fn test_engine_events_drive_is_narrating() {
        let mut engine = MockSpeechEngine::new();
        engine.expect_cancel_all().return_const(());
        engine.expect_speak().with(always()).return_const(());

        let mut session = CookingSession::open(&three_steps(), Some(engine));
        session.set_narration_enabled(true);
        let id = live_id(&session);

        session.handle_engine_event(UtteranceEvent {
            utterance_id: id,
            kind: UtteranceEventKind::Started,
        });
        assert!(session.is_narrating());

        session.handle_engine_event(UtteranceEvent {
            utterance_id: id,
            kind: UtteranceEventKind::Ended,
        });
        assert!(!session.is_narrating());
        assert_eq!(session.step_index(), Some(0));
        assert!(session.narration_enabled());
    }

    #[test]
    fn test_cancelled_error_after_navigation_is_silent() {
        let mut engine = MockSpeechEngine::new();
        engine.expect_cancel_all().return_const(());
        engine.expect_speak().with(always()).return_const(());

        let mut session = CookingSession::open(&three_steps(), Some(engine));
        session.set_narration_enabled(true);
        let first = live_id(&session);
        session.next();

        let notice = session.handle_engine_event(failed(first, SpeechErrorKind::Canceled));
        assert!(notice.is_none());

        let second = live_id(&session);
        let notice = session.handle_engine_event(failed(second, SpeechErrorKind::Interrupted));
        assert!(notice.is_none());
        assert!(session.take_notices().is_empty());
    }

    #[test]
    fn test_stale_failure_from_superseded_utterance_is_silent() {
        let mut engine = MockSpeechEngine::new();
        engine.expect_cancel_all().return_const(());
        engine.expect_speak().with(always()).return_const(());

        let mut session = CookingSession::open(&three_steps(), Some(engine));
        session.set_narration_enabled(true);
        let first = live_id(&session);
        session.next();

        assert!(
            session
                .handle_engine_event(failed(first, SpeechErrorKind::AudioBusy))
                .is_none()
        );
        assert!(session.take_notices().is_empty());
    }

    #[test]
    fn test_unexpected_failure_raises_exactly_one_notice() {
        let mut engine = MockSpeechEngine::new();
        engine.expect_cancel_all().return_const(());
        engine.expect_speak().with(always()).return_const(());

        let mut session = CookingSession::open(&three_steps(), Some(engine));
        session.set_narration_enabled(true);
        let id = live_id(&session);
        session.handle_engine_event(UtteranceEvent {
            utterance_id: id,
            kind: UtteranceEventKind::Started,
        });

        let notice = session
            .handle_engine_event(failed(id, SpeechErrorKind::AudioBusy))
            .expect("audio-busy should be reported");
        assert_eq!(notice.error, SpeechErrorKind::AudioBusy);
        assert_eq!(notice.step_index, 0);

        // A repeated report for the same utterance is no longer live.
        assert!(
            session
                .handle_engine_event(failed(id, SpeechErrorKind::AudioBusy))
                .is_none()
        );

        let notices = session.take_notices();
        assert_eq!(notices.len(), 1);
        assert!(session.take_notices().is_empty());

        // The session stays usable.
        assert!(!session.is_narrating());
        assert!(session.narration_enabled());
        session.next();
        assert_eq!(session.current_step(), Some("Fry rice"));
        assert!(session.narration.live_utterance().is_some());
    }

    #[test]
    fn test_missing_engine_keeps_steps_usable() {
        let mut session = CookingSession::<MockSpeechEngine>::open(&three_steps(), None);
        session.set_narration_enabled(true);
        session.next();

        assert!(!session.narration_available());
        assert!(session.narration_enabled());
        assert!(!session.is_narrating());
        assert_eq!(session.current_step(), Some("Fry rice"));
        session.close();
    }
}
