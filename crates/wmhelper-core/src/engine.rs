//! Chat engine — the query round state machine.
//!
//! One round: optimistic user-message append → network call → terminal
//! outcome (answer, rate-limited, failure) → silent persist → idle.
//! The engine is single-flight: while a round is in flight a second
//! submit is rejected outright rather than queued.
//!
//! State lives behind `Cell`/`RefCell` and every borrow ends before an
//! await point, so the render loop can read the store between polls of
//! an in-flight round.

use std::cell::{Cell, RefCell};

use wmhelper_types::{
    api::QueryRequest,
    event::ChatEvent,
    message::Message,
    scope::Scope,
    session::NEW_SESSION_ID,
    user::UserContext,
};

use crate::event_bus::EventBus;
use crate::ports::{ApiPort, QueryReply};
use crate::session::SessionStore;

/// Banner text used when a 429 arrives without a body.
pub const DEFAULT_LIMIT_MESSAGE: &str = "Usage limit reached. Please upgrade your subscription.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    Idle,
    Sending,
}

pub struct ChatEngine {
    pub store: RefCell<SessionStore>,
    pub(crate) phase: Cell<ChatPhase>,
    event_bus: EventBus,
}

impl ChatEngine {
    pub fn new(event_bus: EventBus) -> Self {
        Self {
            store: RefCell::new(SessionStore::new()),
            phase: Cell::new(ChatPhase::Idle),
            event_bus,
        }
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase.get()
    }

    pub fn is_sending(&self) -> bool {
        self.phase.get() == ChatPhase::Sending
    }

    /// Run one query round.
    ///
    /// Empty or whitespace-only input is a no-op, as is a submit while a
    /// round is already in flight — neither touches any state or the
    /// network. The user-message append strictly precedes the network
    /// call; the AI-message append strictly follows response receipt.
    pub async fn submit(&self, input: &str, scope: Scope, user: &UserContext, api: &dyn ApiPort) {
        let query = input.trim();
        if query.is_empty() || self.is_sending() {
            return;
        }

        self.phase.set(ChatPhase::Sending);
        let session_id = {
            let mut store = self.store.borrow_mut();
            store.push(Message::user(query));
            store.session_id()
        };
        self.event_bus.emit(ChatEvent::QueryStarted);

        let req = QueryRequest {
            query: query.to_string(),
            scope,
            user_id: user.id.clone(),
            session_id,
        };

        match api.submit_query(&req).await {
            Ok(QueryReply::Answer(text)) => {
                self.store.borrow_mut().push(Message::ai(text));
                self.event_bus.emit(ChatEvent::AnswerReceived);
            }
            Ok(QueryReply::RateLimited(message)) => {
                let message = if message.is_empty() {
                    DEFAULT_LIMIT_MESSAGE.to_string()
                } else {
                    message
                };
                self.store.borrow_mut().push(Message::ai(message.clone()));
                self.event_bus.emit(ChatEvent::RateLimited { message });
            }
            Err(e) => {
                let detail = e.to_string();
                self.store.borrow_mut().push(Message::ai(format!(
                    "Sorry, I couldn't process your request: {}",
                    detail
                )));
                self.event_bus.emit(ChatEvent::QueryFailed { detail });
            }
        }

        // The transcript on screen stays the source of truth for the
        // session; a failed save is logged and never shown to the user.
        let save_req = self.store.borrow().save_request(user);
        if let Some(save_req) = save_req {
            match api.save_session(&save_req).await {
                Ok(saved) => {
                    let session_id = self.store.borrow_mut().apply_saved(saved);
                    self.event_bus.emit(ChatEvent::SessionSaved { session_id });
                }
                Err(e) => log::warn!("session save failed: {}", e),
            }
        }

        self.phase.set(ChatPhase::Idle);
    }

    /// Switch the transcript to a stored session (or a fresh one for
    /// the sentinel id 0). Ignored while a round is in flight so the
    /// pending response cannot land in the wrong session.
    ///
    /// A fetch failure is logged and leaves the prior transcript
    /// untouched — no partial overwrite.
    pub async fn open_session(&self, session_id: u64, user: &UserContext, api: &dyn ApiPort) {
        if self.is_sending() {
            return;
        }
        if session_id == NEW_SESSION_ID {
            self.store.borrow_mut().create_new();
            return;
        }
        match api.fetch_session(session_id, &user.id).await {
            Ok(detail) => {
                self.store.borrow_mut().install(session_id, detail);
                self.event_bus.emit(ChatEvent::SessionLoaded { session_id });
            }
            Err(e) => log::warn!("failed to load session {}: {}", session_id, e),
        }
    }
}
