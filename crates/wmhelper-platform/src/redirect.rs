//! Full-page navigation and return-redirect handling.
//!
//! The hosted checkout is reached by replacing the whole page; when it
//! finishes, the backend sends the browser back with a success
//! indicator in the query string that the app checks on load.

use wmhelper_core::ports::RedirectPort;

pub struct LocationRedirect;

impl RedirectPort for LocationRedirect {
    fn redirect(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                log::error!("redirect to {} failed: {:?}", url, e);
            }
        }
    }
}

/// Read a single query parameter from the current location.
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    parse_query_param(&search, name)
}

/// `true` when this page load came back from the hosted checkout.
pub fn is_checkout_return() -> bool {
    query_param("success").as_deref() == Some("true") || query_param("session_id").is_some()
}

/// Parse `name` out of a raw `?a=b&c=d` query string.
pub fn parse_query_param(search: &str, name: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    for pair in search.split('&') {
        let mut parts = pair.splitn(2, '=');
        if parts.next() == Some(name) {
            return Some(parts.next().unwrap_or("").to_string());
        }
    }
    None
}
