//! UI-level state that drives rendering.
//! This is a projection over the chat engine, updated each frame by
//! draining the EventBus; the transcript itself is read straight from
//! the session store.

use wmhelper_core::nav::View;
use wmhelper_types::event::ChatEvent;
use wmhelper_types::scope::Scope;

/// State visible to UI panels
pub struct UiState {
    /// Which top-level view is showing
    pub view: View,
    /// Input field content for the chat composer
    pub input_text: String,
    /// Corpus the next query runs against
    pub scope: Scope,
    /// Whether a query is in flight
    pub sending: bool,
    /// Usage-limit banner text, shown above the composer when set
    pub limit_banner: Option<String>,
    /// Whether the session history drawer is open
    pub menu_open: bool,
    /// Status line text
    pub status_text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            view: View::Landing,
            input_text: String::new(),
            scope: Scope::default(),
            sending: false,
            limit_banner: None,
            menu_open: false,
            status_text: "Ready".to_string(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::QueryStarted => {
                    self.sending = true;
                    self.status_text = "Searching the regulations...".to_string();
                }
                ChatEvent::AnswerReceived => {
                    self.sending = false;
                    self.limit_banner = None;
                    self.status_text = "Ready".to_string();
                }
                ChatEvent::RateLimited { message } => {
                    self.sending = false;
                    self.limit_banner = Some(message);
                    self.status_text = "Usage limit reached".to_string();
                }
                ChatEvent::QueryFailed { detail } => {
                    self.sending = false;
                    self.status_text = format!("Request failed: {}", detail);
                }
                ChatEvent::SessionSaved { .. } => {}
                ChatEvent::SessionLoaded { .. } => {
                    self.limit_banner = None;
                    self.status_text = "Ready".to_string();
                }
                ChatEvent::UsageRefreshed => {}
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.sending
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
