//! In-memory store for the active chat session.
//!
//! Nothing here is persisted directly: the transcript lives in memory
//! until a save round-trip succeeds, at which point the server-assigned
//! id and title are reconciled back into the store. The store itself is
//! synchronous; the engine drives the network calls around it so that
//! no borrow of the store is ever held across an await.

use wmhelper_types::{
    api::{SaveSessionRequest, SavedSession},
    message::Message,
    session::{SessionDetail, SessionMeta},
    user::UserContext,
    Result,
};

use crate::ports::ApiPort;

/// Characters of the first message used for a derived title.
const TITLE_MAX_CHARS: usize = 40;

#[derive(Debug, Default)]
pub struct SessionStore {
    session_id: Option<u64>,
    title: String,
    messages: Vec<Message>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` until the first successful save; stable afterwards.
    pub fn session_id(&self) -> Option<u64> {
        self.session_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Start a fresh, unsaved session.
    pub fn create_new(&mut self) {
        self.session_id = None;
        self.title.clear();
        self.messages.clear();
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Replace the transcript wholesale with a fetched session.
    pub fn install(&mut self, session_id: u64, detail: SessionDetail) {
        self.session_id = Some(session_id);
        self.title = detail.title;
        self.messages = detail.messages;
    }

    /// Build the persistence request for the current transcript, or
    /// `None` when there is nothing to save.
    ///
    /// The title is derived from the first message on a first save;
    /// after `apply_saved` the server's title is reused verbatim.
    pub fn save_request(&self, user: &UserContext) -> Option<SaveSessionRequest> {
        if self.messages.is_empty() {
            return None;
        }

        let title = if self.title.is_empty() {
            derive_title(&self.messages[0].text)
        } else {
            self.title.clone()
        };

        Some(SaveSessionRequest {
            user_id: user.id.clone(),
            session_id: self.session_id,
            title,
            messages: self.messages.clone(),
        })
    }

    /// Reconcile a successful save. The server-returned id and title
    /// become authoritative on first save; every later save reuses that
    /// id (update semantics, never a second insert for the same logical
    /// session). Returns the session id now in effect.
    pub fn apply_saved(&mut self, saved: SavedSession) -> u64 {
        if self.session_id.is_none() {
            self.session_id = Some(saved.session_id);
            self.title = saved.title;
        }
        self.session_id.unwrap_or(saved.session_id)
    }

    /// All stored sessions for the user, in the order the server
    /// returns them (the client does not re-sort).
    pub async fn list(user: &UserContext, api: &dyn ApiPort) -> Result<Vec<SessionMeta>> {
        api.list_sessions(&user.id).await
    }
}

/// First `TITLE_MAX_CHARS` characters of the text, with `"..."`
/// appended only when the text was truncated. Character-based so a
/// multi-byte scalar is never split.
pub fn derive_title(text: &str) -> String {
    let mut title: String = text.chars().take(TITLE_MAX_CHARS).collect();
    if text.chars().count() > TITLE_MAX_CHARS {
        title.push_str("...");
    }
    title
}
