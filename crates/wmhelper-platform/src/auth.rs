//! Bridge to the hosted authentication widget.
//!
//! The widget script loaded from index.html owns sign-in, sign-up, and
//! the session itself; it exposes a small `authBridge` global that this
//! adapter reads. The client never sees credentials.

use wasm_bindgen::prelude::*;

use wmhelper_core::ports::AuthPort;
use wmhelper_types::user::UserContext;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = authBridge, js_name = userId)]
    fn bridge_user_id() -> Option<String>;

    #[wasm_bindgen(js_namespace = authBridge, js_name = userName)]
    fn bridge_user_name() -> Option<String>;

    #[wasm_bindgen(js_namespace = authBridge, js_name = userEmail)]
    fn bridge_user_email() -> Option<String>;

    #[wasm_bindgen(js_namespace = authBridge, js_name = openSignIn)]
    fn bridge_open_sign_in();

    #[wasm_bindgen(js_namespace = authBridge, js_name = signOut)]
    fn bridge_sign_out();
}

pub struct HostedAuthBridge;

impl HostedAuthBridge {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HostedAuthBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthPort for HostedAuthBridge {
    fn current_user(&self) -> Option<UserContext> {
        let id = bridge_user_id()?;
        Some(UserContext {
            id,
            name: bridge_user_name(),
            email: bridge_user_email(),
        })
    }

    fn open_sign_in(&self) {
        bridge_open_sign_in();
    }

    fn sign_out(&self) {
        bridge_sign_out();
    }
}
