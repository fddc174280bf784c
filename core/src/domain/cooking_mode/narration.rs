use tracing::{debug, warn};

use crate::domain::cooking_mode::{
    ports::SpeechEngine,
    value_objects::{
        NarrationNotice, Utterance, UtteranceEvent, UtteranceEventKind, UtteranceId,
    },
};

/// Keeps spoken output in step with the cooking session.
///
/// At most one utterance is live at a time, and every `speak` is preceded by
/// `cancel_all` on the engine. Without an engine every operation is silent.
#[derive(Debug)]
pub struct NarrationCoordinator<E: SpeechEngine> {
    engine: Option<E>,
    enabled: bool,
    live: Option<Utterance>,
    is_narrating: bool,
    next_id: u64,
    notices: Vec<NarrationNotice>,
}

impl<E: SpeechEngine> NarrationCoordinator<E> {
    pub fn new(engine: Option<E>) -> Self {
        Self {
            engine,
            enabled: false,
            live: None,
            is_narrating: false,
            next_id: 1,
            notices: Vec::new(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.engine.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_narrating(&self) -> bool {
        self.is_narrating
    }

    pub fn live_utterance(&self) -> Option<&Utterance> {
        self.live.as_ref()
    }

    pub fn engine_mut(&mut self) -> Option<&mut E> {
        self.engine.as_mut()
    }

    /// Detaches the engine. Later calls leave it untouched.
    pub fn take_engine(&mut self) -> Option<E> {
        self.engine.take()
    }

    /// Returns whether the flag changed. Disabling always cancels.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if !enabled {
            self.cancel();
        }
        if self.enabled == enabled {
            return false;
        }
        self.enabled = enabled;
        true
    }

    /// Re-evaluates narration for the step now on screen.
    ///
    /// When enabled, the previous utterance is cancelled and `step` is spoken.
    /// When disabled, any live utterance is cancelled.
    pub fn narrate(&mut self, step: Option<(usize, &str)>) {
        if !self.enabled {
            if self.live.is_some() {
                self.cancel();
            }
            return;
        }

        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        engine.cancel_all();
        self.live = None;
        self.is_narrating = false;

        let Some((step_index, text)) = step else {
            return;
        };

        let utterance = Utterance {
            id: UtteranceId(self.next_id),
            step_index,
            text: text.to_string(),
        };
        self.next_id += 1;

        debug!(utterance_id = %utterance.id, step_index, "narrating step");
        engine.speak(&utterance);
        self.live = Some(utterance);
    }

    /// Stops any audio and releases the live utterance.
    pub fn cancel(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.cancel_all();
        }
        if let Some(utterance) = self.live.take() {
            debug!(utterance_id = %utterance.id, "narration cancelled");
        }
        self.is_narrating = false;
    }

    /// Applies an engine callback. Returns the notice raised for an
    /// unexpected failure of the live utterance, if any.
    pub fn handle_event(&mut self, event: UtteranceEvent) -> Option<NarrationNotice> {
        let is_live = self
            .live
            .as_ref()
            .is_some_and(|utterance| utterance.id == event.utterance_id);

        if !is_live {
            debug!(
                utterance_id = %event.utterance_id,
                kind = ?event.kind,
                "ignoring event for a superseded utterance"
            );
            return None;
        }

        match event.kind {
            UtteranceEventKind::Started => {
                self.is_narrating = true;
                None
            }
            UtteranceEventKind::Ended => {
                self.is_narrating = false;
                self.live = None;
                None
            }
            UtteranceEventKind::Failed { error } => {
                self.is_narrating = false;
                let utterance = self.live.take()?;
                if error.is_benign() {
                    debug!(utterance_id = %utterance.id, ?error, "narration interrupted");
                    return None;
                }

                warn!(
                    utterance_id = %utterance.id,
                    step_index = utterance.step_index,
                    ?error,
                    "narration failed"
                );
                let notice = NarrationNotice {
                    utterance_id: utterance.id,
                    step_index: utterance.step_index,
                    error,
                    message: error.user_message().to_string(),
                };
                self.notices.push(notice.clone());
                Some(notice)
            }
        }
    }

    pub fn take_notices(&mut self) -> Vec<NarrationNotice> {
        std::mem::take(&mut self.notices)
    }
}
