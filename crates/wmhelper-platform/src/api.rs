//! HTTP adapter for the remote backend.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility. No call
//! retries, times out, or backs off; non-2xx statuses and transport
//! failures are surfaced to the caller verbatim as typed errors.
//! HTTP 429 on the query endpoint is an expected reply, not an error.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use wmhelper_core::ports::{ApiPort, QueryReply};
use wmhelper_types::{
    api::{
        CheckoutSession, QueryRequest, QueryResponse, SaveSessionRequest, SavedSession,
        SessionList, TierChangeRequest,
    },
    session::{SessionDetail, SessionMeta},
    usage::{Tier, UsageData},
    ClientError, Result,
};

pub struct HttpApiClient {
    base_url: String,
}

impl HttpApiClient {
    /// `base_url` is resolved once at startup and fixed for the
    /// process lifetime; an empty base means same-origin requests.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    async fn get(&self, path: &str) -> Result<Response> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        ok_or_http_error(response).await
    }

    async fn post<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<Response> {
        let response = Request::post(&self.url(path))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ClientError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        ok_or_http_error(response).await
    }
}

#[async_trait(?Send)]
impl ApiPort for HttpApiClient {
    async fn submit_query(&self, req: &QueryRequest) -> Result<QueryReply> {
        let response = Request::post(&self.url("/api/query"))
            .header("Content-Type", "application/json")
            .json(req)
            .map_err(|e| ClientError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        // 429 carries the warning text in the same body shape as 200.
        if response.status() == 429 {
            let body = response
                .json::<QueryResponse>()
                .await
                .map(|b| b.response)
                .unwrap_or_default();
            return Ok(QueryReply::RateLimited(body));
        }

        let response = ok_or_http_error(response).await?;
        let body: QueryResponse = decode(response).await?;
        Ok(QueryReply::Answer(body.response))
    }

    async fn list_sessions(&self, user_id: &str) -> Result<Vec<SessionMeta>> {
        let response = self
            .get(&format!("/api/chat-history?user_id={}", user_id))
            .await?;
        let body: SessionList = decode(response).await?;
        Ok(body.sessions)
    }

    async fn fetch_session(&self, session_id: u64, user_id: &str) -> Result<SessionDetail> {
        let response = self
            .get(&format!(
                "/api/chat-session/{}?user_id={}",
                session_id, user_id
            ))
            .await?;
        decode(response).await
    }

    async fn save_session(&self, req: &SaveSessionRequest) -> Result<SavedSession> {
        let response = self.post("/api/chat-session", req).await?;
        decode(response).await
    }

    async fn fetch_usage(&self, user_id: &str) -> Result<UsageData> {
        let response = self.get(&format!("/api/usage?user_id={}", user_id)).await?;
        decode(response).await
    }

    async fn change_tier(&self, user_id: &str, tier: Tier) -> Result<()> {
        let req = TierChangeRequest {
            user_id: user_id.to_string(),
            tier,
        };
        self.post("/api/subscribe", &req).await?;
        Ok(())
    }

    async fn create_checkout(&self, user_id: &str, tier: Tier) -> Result<String> {
        let req = TierChangeRequest {
            user_id: user_id.to_string(),
            tier,
        };
        let response = self.post("/api/create-checkout-session", &req).await?;
        let body: CheckoutSession = decode(response).await?;
        Ok(body.checkout_url)
    }
}

/// Join the configured base with an endpoint path. A trailing slash on
/// the base never produces a double slash.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

async fn ok_or_http_error(response: Response) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(ClientError::Http { status, body })
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Serialization(e.to_string()))
}
