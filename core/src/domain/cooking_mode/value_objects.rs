use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::recipe::entities::Recipe;

/// Identifies one `speak` request so late engine events can be matched to it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct UtteranceId(pub u64);

impl std::fmt::Display for UtteranceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub id: UtteranceId,
    pub step_index: usize,
    pub text: String,
}

/// Failure codes a speech engine reports for an utterance. Names follow the
/// web speech synthesis error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SpeechErrorKind {
    Canceled,
    Interrupted,
    AudioBusy,
    AudioHardware,
    Network,
    SynthesisUnavailable,
    SynthesisFailed,
    LanguageUnavailable,
    VoiceUnavailable,
    TextTooLong,
    InvalidArgument,
    NotAllowed,
}

impl SpeechErrorKind {
    /// Cancellation and interruption by a newer utterance are expected.
    pub fn is_benign(&self) -> bool {
        matches!(self, SpeechErrorKind::Canceled | SpeechErrorKind::Interrupted)
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            SpeechErrorKind::Canceled | SpeechErrorKind::Interrupted => "Narration was stopped.",
            SpeechErrorKind::AudioBusy => "The audio device is busy. Try narration again shortly.",
            SpeechErrorKind::AudioHardware => "No audio output device could be used for narration.",
            SpeechErrorKind::Network => "Narration needs a network connection for this voice.",
            SpeechErrorKind::SynthesisUnavailable => "Speech synthesis is not available.",
            SpeechErrorKind::SynthesisFailed => "Speech synthesis failed for this step.",
            SpeechErrorKind::LanguageUnavailable => "No voice is available for this language.",
            SpeechErrorKind::VoiceUnavailable => "The selected voice is not available.",
            SpeechErrorKind::TextTooLong => "This step is too long to be narrated.",
            SpeechErrorKind::InvalidArgument => "Narration settings are invalid.",
            SpeechErrorKind::NotAllowed => "Narration is not allowed by the device.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UtteranceEventKind {
    Started,
    Ended,
    Failed { error: SpeechErrorKind },
}

/// Asynchronous completion report from the speech engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UtteranceEvent {
    pub utterance_id: UtteranceId,
    #[serde(flatten)]
    pub kind: UtteranceEventKind,
}

/// Transient, non-fatal report of an unexpected narration failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NarrationNotice {
    pub utterance_id: UtteranceId,
    pub step_index: usize,
    pub error: SpeechErrorKind,
    pub message: String,
}

/// Instruction for a speech engine that runs on the client device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NarrationCommand {
    Speak {
        utterance_id: UtteranceId,
        text: String,
    },
    CancelAll,
}

#[derive(Debug, Clone)]
pub struct OpenCookingSessionInput {
    pub recipe: Recipe,
    pub narration_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CookingSessionView {
    pub id: Uuid,
    pub recipe_name: String,
    pub steps: Vec<String>,
    /// Zero based, absent when the recipe has no steps.
    pub step_index: Option<usize>,
    pub step_count: usize,
    pub current_step: Option<String>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub narration_available: bool,
    pub narration_enabled: bool,
    pub is_narrating: bool,
    pub notices: Vec<NarrationNotice>,
}
