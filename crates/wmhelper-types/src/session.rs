use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Reserved session id meaning "start a new session".
/// Never a real stored id; the history picker uses it for its
/// "+ New chat" entry.
pub const NEW_SESSION_ID: u64 = 0;

/// A stored session as listed by the chat-history endpoint.
/// Ids are assigned by the server, never by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    pub id: u64,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Full session content as returned when loading a single session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDetail {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub messages: Vec<Message>,
}
