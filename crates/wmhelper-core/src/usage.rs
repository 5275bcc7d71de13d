//! Usage and subscription state for the profile page.
//!
//! The snapshot is an authoritative read-only value from the backend,
//! replaced wholesale on every refresh. Tier changes either apply
//! immediately (downgrade) or hand off to the hosted checkout
//! (upgrade); the model never confirms payment itself.
//!
//! State lives behind `Cell`/`RefCell` and every borrow ends before an
//! await point, so the profile view can read the model while a refresh
//! or tier change is in flight.

use std::cell::{Cell, RefCell};

use wmhelper_types::{
    event::ChatEvent,
    usage::{Tier, UsageData},
    user::UserContext,
};

use crate::event_bus::EventBus;
use crate::ports::{ApiPort, RedirectPort};

pub struct UsageModel {
    snapshot: RefCell<Option<UsageData>>,
    selected_tier: Cell<Option<Tier>>,
    error: RefCell<Option<String>>,
    event_bus: EventBus,
}

impl UsageModel {
    pub fn new(event_bus: EventBus) -> Self {
        Self {
            snapshot: RefCell::new(None),
            selected_tier: Cell::new(None),
            error: RefCell::new(None),
            event_bus,
        }
    }

    /// Cloned copy of the snapshot; the live cell is never exposed.
    pub fn snapshot(&self) -> Option<UsageData> {
        self.snapshot.borrow().clone()
    }

    pub fn current_tier(&self) -> Option<Tier> {
        self.snapshot.borrow().as_ref().map(|s| s.subscription_tier)
    }

    /// Plan card currently highlighted on the profile page.
    pub fn selected_tier(&self) -> Option<Tier> {
        self.selected_tier.get()
    }

    pub fn select_tier(&self, tier: Tier) {
        self.selected_tier.set(Some(tier));
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    /// Fetch a fresh snapshot, replacing the previous one wholesale.
    ///
    /// On failure the previous snapshot (if any) stays visible as stale
    /// and an error banner is set. No automatic retry.
    pub async fn refresh(&self, user: &UserContext, api: &dyn ApiPort) {
        match api.fetch_usage(&user.id).await {
            Ok(data) => {
                self.selected_tier.set(Some(data.subscription_tier));
                *self.snapshot.borrow_mut() = Some(data);
                *self.error.borrow_mut() = None;
                self.event_bus.emit(ChatEvent::UsageRefreshed);
            }
            Err(e) => {
                log::warn!("usage fetch failed: {}", e);
                *self.error.borrow_mut() =
                    Some("Failed to load your usage data. Please try again later.".to_string());
            }
        }
    }

    /// Apply a tier change. A request for the current tier is a no-op
    /// with no network call.
    ///
    /// Downgrading to free applies immediately and refetches the
    /// snapshot. A paid target requests a checkout session and
    /// redirects to it; completion is observed later through the return
    /// redirect plus a refresh on next load.
    pub async fn change_tier(
        &self,
        target: Tier,
        user: &UserContext,
        api: &dyn ApiPort,
        nav: &dyn RedirectPort,
    ) {
        if self.current_tier() == Some(target) {
            return;
        }
        let result = match target {
            Tier::Free => match api.change_tier(&user.id, target).await {
                Ok(()) => {
                    self.refresh(user, api).await;
                    Ok(())
                }
                Err(e) => Err(e),
            },
            Tier::Paid => match api.create_checkout(&user.id, target).await {
                Ok(url) => {
                    nav.redirect(&url);
                    Ok(())
                }
                Err(e) => Err(e),
            },
        };
        if let Err(e) = result {
            log::warn!("subscription change failed: {}", e);
            *self.error.borrow_mut() = Some(format!("Failed to update your subscription: {}", e));
        }
    }
}
