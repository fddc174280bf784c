use crate::domain::cooking_mode::{
    ports::SpeechEngine,
    value_objects::{NarrationCommand, Utterance},
};

/// Speech engine that lives on the client device.
///
/// Commands are queued until the client drains them. A cancel makes every
/// undelivered command obsolete, so the queue never holds more than a
/// `CancelAll` followed by one `Speak`.
#[derive(Debug, Default)]
pub struct NarrationOutbox {
    commands: Vec<NarrationCommand>,
}

impl NarrationOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&mut self) -> Vec<NarrationCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn pending(&self) -> &[NarrationCommand] {
        &self.commands
    }
}

impl SpeechEngine for NarrationOutbox {
    fn speak(&mut self, utterance: &Utterance) {
        self.commands.push(NarrationCommand::Speak {
            utterance_id: utterance.id,
            text: utterance.text.clone(),
        });
    }

    fn cancel_all(&mut self) {
        self.commands.clear();
        self.commands.push(NarrationCommand::CancelAll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cooking_mode::value_objects::UtteranceId;

    fn utterance(id: u64, text: &str) -> Utterance {
        Utterance {
            id: UtteranceId(id),
            step_index: 0,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_cancel_supersedes_undelivered_speech() {
        let mut outbox = NarrationOutbox::new();
        outbox.cancel_all();
        outbox.speak(&utterance(1, "Heat oil"));
        outbox.cancel_all();
        outbox.speak(&utterance(2, "Fry rice"));

        assert_eq!(
            outbox.drain(),
            vec![
                NarrationCommand::CancelAll,
                NarrationCommand::Speak {
                    utterance_id: UtteranceId(2),
                    text: "Fry rice".to_string(),
                },
            ]
        );
        assert!(outbox.pending().is_empty());
    }

    #[test]
    fn test_commands_serialize_with_type_tag() {
        let json = serde_json::to_value(NarrationCommand::Speak {
            utterance_id: UtteranceId(7),
            text: "Stir".to_string(),
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "type": "speak", "utterance_id": 7, "text": "Stir" })
        );
        assert_eq!(
            serde_json::to_value(NarrationCommand::CancelAll).unwrap(),
            serde_json::json!({ "type": "cancel_all" })
        );
    }
}
