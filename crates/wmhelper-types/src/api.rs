//! Request and response bodies for the remote API.
//!
//! One struct per endpoint payload, shaped exactly as the backend
//! expects them. The HTTP plumbing lives in `wmhelper-platform`.

use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::scope::Scope;
use crate::session::SessionMeta;
use crate::usage::Tier;

/// `POST /api/query` body. `session_id` is serialized as `null` for a
/// session that has never been saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    pub scope: Scope,
    pub user_id: String,
    pub session_id: Option<u64>,
}

/// `POST /api/query` response body — the same shape carries the answer
/// on 200 and the warning text on 429.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub response: String,
}

/// `GET /api/chat-history` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionList {
    #[serde(default)]
    pub sessions: Vec<SessionMeta>,
}

/// `POST /api/chat-session` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSessionRequest {
    pub user_id: String,
    pub session_id: Option<u64>,
    pub title: String,
    pub messages: Vec<Message>,
}

/// `POST /api/chat-session` response — the authoritative id and title
/// the client adopts after a first save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSession {
    pub session_id: u64,
    pub title: String,
}

/// `POST /api/subscribe` and `POST /api/create-checkout-session` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierChangeRequest {
    pub user_id: String,
    pub tier: Tier,
}

/// `POST /api/create-checkout-session` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    #[serde(rename = "checkoutUrl")]
    pub checkout_url: String,
}
