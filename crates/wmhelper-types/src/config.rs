//! API base URL resolution.
//!
//! Resolved exactly once at startup and fixed for the process
//! lifetime; there is no runtime reconfiguration.

/// Production backend origin used by release builds.
const PROD_API_BASE: &str = "https://nbwm-backend.onrender.com";

/// Resolve the API base URL.
///
/// A compile-time `WMHELPER_API_BASE` override wins. Otherwise debug
/// builds use a relative base (the dev server proxies `/api/*`) and
/// release builds the production origin.
pub fn resolve_api_base() -> String {
    if let Some(base) = option_env!("WMHELPER_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    if cfg!(debug_assertions) {
        String::new()
    } else {
        PROD_API_BASE.to_string()
    }
}
