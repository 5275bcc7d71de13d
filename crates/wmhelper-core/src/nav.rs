//! Top-level view selection, gated by the auth signal.
//!
//! Transitions are synchronous and menu-driven; none of them touch
//! the network.

/// The shell's top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Chat,
    Profile,
    Help,
}

impl View {
    /// Where a fresh page load lands.
    pub fn default_for(signed_in: bool) -> View {
        if signed_in {
            View::Chat
        } else {
            View::Landing
        }
    }
}

/// Where a page load lands, accounting for the checkout return
/// redirect: a signed-in return from the hosted checkout lands on the
/// profile so the refreshed subscription is visible.
pub fn entry_view(signed_in: bool, checkout_return: bool) -> View {
    if signed_in && checkout_return {
        View::Profile
    } else {
        View::default_for(signed_in)
    }
}

/// Resolve a requested view against the auth gate.
///
/// Signed-out users may only reach the landing and help views; any
/// attempt to reach chat or profile resolves to landing. Signed-in
/// users have no landing view — it resolves to chat.
pub fn resolve(requested: View, signed_in: bool) -> View {
    match (requested, signed_in) {
        (View::Chat | View::Profile, false) => View::Landing,
        (View::Landing, true) => View::Chat,
        (view, _) => view,
    }
}
