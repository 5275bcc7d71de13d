use serde::{Deserialize, Serialize};

/// Events emitted by the chat engine and models.
/// The UI drains these each frame for reactive updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A query was accepted and is in flight
    QueryStarted,

    /// The server answered the query
    AnswerReceived,

    /// The server rejected the query with HTTP 429; `message` is the
    /// warning text shown in the usage-limit banner
    RateLimited { message: String },

    /// The query failed (transport failure or non-2xx server error)
    QueryFailed { detail: String },

    /// The session was persisted under the given id
    SessionSaved { session_id: u64 },

    /// A stored session was loaded into the transcript
    SessionLoaded { session_id: u64 },

    /// A fresh usage snapshot replaced the previous one
    UsageRefreshed,
}
