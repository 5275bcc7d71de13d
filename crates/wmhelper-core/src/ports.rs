//! Port traits — the boundary between the core models and the browser.
//!
//! These traits are defined here in `wmhelper-core` (pure Rust).
//! Implementations live in `wmhelper-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use wmhelper_types::{
    api::{QueryRequest, SaveSessionRequest, SavedSession},
    session::{SessionDetail, SessionMeta},
    usage::{Tier, UsageData},
    user::UserContext,
    Result,
};

// ─── Remote API Port ─────────────────────────────────────────

/// Reply to a query submission. HTTP 429 is an expected, user-facing
/// outcome and is decoded here rather than surfaced as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryReply {
    /// 2xx — the assistant's answer text
    Answer(String),
    /// 429 — server-supplied warning text (may be empty)
    RateLimited(String),
}

/// The remote backend as observed by this client. No call retries,
/// times out, or backs off; errors carry the HTTP status and body
/// verbatim for the caller to present.
#[async_trait(?Send)]
pub trait ApiPort {
    /// `POST /api/query`
    async fn submit_query(&self, req: &QueryRequest) -> Result<QueryReply>;

    /// `GET /api/chat-history?user_id=`
    async fn list_sessions(&self, user_id: &str) -> Result<Vec<SessionMeta>>;

    /// `GET /api/chat-session/{id}?user_id=`
    async fn fetch_session(&self, session_id: u64, user_id: &str) -> Result<SessionDetail>;

    /// `POST /api/chat-session`
    async fn save_session(&self, req: &SaveSessionRequest) -> Result<SavedSession>;

    /// `GET /api/usage?user_id=`
    async fn fetch_usage(&self, user_id: &str) -> Result<UsageData>;

    /// `POST /api/subscribe`
    async fn change_tier(&self, user_id: &str, tier: Tier) -> Result<()>;

    /// `POST /api/create-checkout-session` — returns the checkout URL.
    async fn create_checkout(&self, user_id: &str, tier: Tier) -> Result<String>;
}

// ─── Auth Port ───────────────────────────────────────────────

/// Identity signal from the hosted auth widget. The widget owns
/// sign-in, sign-up, and the session itself; the client only reads
/// the result.
pub trait AuthPort {
    fn current_user(&self) -> Option<UserContext>;

    /// Open the hosted sign-in dialog.
    fn open_sign_in(&self);

    fn sign_out(&self);
}

// ─── Redirect Port ───────────────────────────────────────────

/// Full-page navigation away from the app, used for hosted checkout.
pub trait RedirectPort {
    fn redirect(&self, url: &str);
}
