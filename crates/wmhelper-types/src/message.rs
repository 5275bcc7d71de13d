use serde::{Deserialize, Serialize};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// A single entry in the conversation transcript.
/// Append-only: a message is never mutated once created, and the
/// order of the list is the chronological order of the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Ai,
        }
    }
}
