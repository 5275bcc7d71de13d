//! Main egui application — composes the panels and drives the chat
//! engine and usage model through the port adapters.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use wmhelper_core::engine::ChatEngine;
use wmhelper_core::event_bus::EventBus;
use wmhelper_core::nav::{self, View};
use wmhelper_core::ports::{AuthPort, RedirectPort};
use wmhelper_core::session::SessionStore;
use wmhelper_core::usage::UsageModel;
use wmhelper_platform::redirect::is_checkout_return;
use wmhelper_platform::{HostedAuthBridge, HttpApiClient, LocationRedirect};
use wmhelper_types::config::resolve_api_base;
use wmhelper_types::event::ChatEvent;
use wmhelper_types::session::SessionMeta;
use wmhelper_types::usage::Tier;
use wmhelper_types::user::UserContext;
use wmhelper_ui::panels::{chat, help, history, landing, profile};
use wmhelper_ui::state::UiState;
use wmhelper_ui::theme;

/// The main application state.
///
/// The engine and usage model take `&self` and keep their state behind
/// `Cell`/`RefCell` internally, so spawned rounds and the per-frame
/// render reads never contend for a borrow.
pub struct WmHelperApp {
    ui_state: UiState,
    event_bus: EventBus,
    engine: Rc<ChatEngine>,
    usage: Rc<UsageModel>,
    sessions: Rc<RefCell<Vec<SessionMeta>>>,
    api: Rc<HttpApiClient>,
    auth: Rc<dyn AuthPort>,
    redirect: Rc<dyn RedirectPort>,
    /// User id seen last frame, to detect sign-in and sign-out edges.
    last_user_id: Option<String>,
    first_frame: bool,
}

impl WmHelperApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let event_bus = EventBus::new();
        let api = Rc::new(HttpApiClient::new(resolve_api_base()));

        Self {
            ui_state: UiState::new(),
            engine: Rc::new(ChatEngine::new(event_bus.clone())),
            usage: Rc::new(UsageModel::new(event_bus.clone())),
            sessions: Rc::new(RefCell::new(Vec::new())),
            event_bus,
            api,
            auth: Rc::new(HostedAuthBridge::new()),
            redirect: Rc::new(LocationRedirect),
            last_user_id: None,
            first_frame: true,
        }
    }

    /// Kick off the per-user data loads. Runs on sign-in and on the
    /// checkout return redirect.
    fn load_user_data(&self, user: &UserContext, ctx: &egui::Context) {
        self.refresh_usage(user, ctx);
        self.refresh_sessions(user, ctx);
    }

    fn refresh_usage(&self, user: &UserContext, ctx: &egui::Context) {
        let usage = self.usage.clone();
        let api = self.api.clone();
        let user = user.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            usage.refresh(&user, api.as_ref()).await;
            ctx.request_repaint();
        });
    }

    fn refresh_sessions(&self, user: &UserContext, ctx: &egui::Context) {
        let sessions = self.sessions.clone();
        let api = self.api.clone();
        let user = user.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            match SessionStore::list(&user, api.as_ref()).await {
                Ok(list) => *sessions.borrow_mut() = list,
                Err(e) => log::warn!("failed to load chat history: {}", e),
            }
            ctx.request_repaint();
        });
    }

    /// Dispatch a query round to the chat engine (async)
    fn dispatch_query(&self, text: String, user: &UserContext, ctx: &egui::Context) {
        let engine = self.engine.clone();
        let api = self.api.clone();
        let scope = self.ui_state.scope;
        let user = user.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            engine.submit(&text, scope, &user, api.as_ref()).await;
            ctx.request_repaint();
        });
    }

    fn dispatch_open_session(&self, session_id: u64, user: &UserContext, ctx: &egui::Context) {
        let engine = self.engine.clone();
        let api = self.api.clone();
        let user = user.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            engine.open_session(session_id, &user, api.as_ref()).await;
            ctx.request_repaint();
        });
    }

    fn dispatch_change_tier(&self, tier: Tier, user: &UserContext, ctx: &egui::Context) {
        let usage = self.usage.clone();
        let api = self.api.clone();
        let redirect = self.redirect.clone();
        let user = user.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            usage
                .change_tier(tier, &user, api.as_ref(), redirect.as_ref())
                .await;
            ctx.request_repaint();
        });
    }
}

impl eframe::App for WmHelperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let user = self.auth.current_user();
        let signed_in = user.is_some();

        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Sign-in and sign-out edges from the hosted auth widget. The
        // initial frame takes the sign-in path too, which also covers
        // the post-checkout reload: a checkout return lands directly
        // on the profile so the refreshed subscription is visible.
        let user_id = user.as_ref().map(|u| u.id.clone());
        if user_id != self.last_user_id {
            self.ui_state.view = nav::entry_view(signed_in, is_checkout_return());
            if let Some(user) = &user {
                self.load_user_data(user, ctx);
            } else {
                self.engine.store.borrow_mut().create_new();
                self.sessions.borrow_mut().clear();
                self.ui_state.menu_open = false;
            }
            self.last_user_id = user_id;
        }

        // Drain events from the chat engine and usage model
        let events = self.event_bus.drain();
        if !events.is_empty() {
            // A completed save can change the history list (new session
            // or bumped timestamp), so refetch it.
            let saved = events
                .iter()
                .any(|e| matches!(e, ChatEvent::SessionSaved { .. }));
            self.ui_state.process_events(events);
            if saved {
                if let Some(user) = &user {
                    self.refresh_sessions(user, ctx);
                }
            }
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        self.ui_state.view = nav::resolve(self.ui_state.view, signed_in);

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Weights & Measures Helper")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();

                if signed_in {
                    if ui
                        .selectable_label(self.ui_state.menu_open, "History")
                        .clicked()
                    {
                        self.ui_state.menu_open = !self.ui_state.menu_open;
                    }
                    for (view, label) in [
                        (View::Chat, "Chat"),
                        (View::Profile, "Profile"),
                        (View::Help, "Help"),
                    ] {
                        if ui
                            .selectable_label(self.ui_state.view == view, label)
                            .clicked()
                        {
                            self.ui_state.view = nav::resolve(view, signed_in);
                        }
                    }
                } else if ui.selectable_label(self.ui_state.view == View::Help, "Help").clicked() {
                    self.ui_state.view = nav::resolve(View::Help, signed_in);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match &user {
                        Some(user) => {
                            if ui.button("Sign Out").clicked() {
                                self.auth.sign_out();
                            }
                            ui.label(
                                RichText::new(user.display_name())
                                    .color(theme::TEXT_SECONDARY)
                                    .small(),
                            );
                        }
                        None => {
                            if ui.button("Sign In").clicked() {
                                self.auth.open_sign_in();
                            }
                        }
                    }
                });
            });
        });

        // ── History drawer ───────────────────────────────────
        if signed_in && self.ui_state.menu_open {
            let mut picked = None;
            SidePanel::left("history_panel")
                .min_width(220.0)
                .max_width(300.0)
                .show(ctx, |ui| {
                    let sessions = self.sessions.borrow();
                    let current = self.engine.store.borrow().session_id();
                    picked = history::history_panel(ui, &sessions, current);
                });
            if let Some(session_id) = picked {
                if let Some(user) = &user {
                    self.dispatch_open_session(session_id, user, ctx);
                }
                self.ui_state.menu_open = false;
            }
        }

        // ── Main content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| match self.ui_state.view {
            View::Landing => {
                if let Some(landing::LandingAction::SignIn) = landing::landing_panel(ui) {
                    self.auth.open_sign_in();
                }
            }
            View::Chat => {
                let action = {
                    let store = self.engine.store.borrow();
                    chat::chat_panel(ui, &mut self.ui_state, store.messages())
                };
                match action {
                    Some(chat::ChatAction::Submit(text)) => {
                        if let Some(user) = &user {
                            self.dispatch_query(text, user, ctx);
                        }
                    }
                    Some(chat::ChatAction::ShowPlans) => {
                        self.ui_state.view = nav::resolve(View::Profile, signed_in);
                    }
                    None => {}
                }
            }
            View::Profile => {
                if let Some(user) = &user {
                    match profile::profile_panel(ui, user, &self.usage) {
                        Some(profile::ProfileAction::SelectTier(tier)) => {
                            self.usage.select_tier(tier);
                        }
                        Some(profile::ProfileAction::ChangeTier(tier)) => {
                            self.dispatch_change_tier(tier, user, ctx);
                        }
                        None => {}
                    }
                }
            }
            View::Help => help::help_panel(ui),
        });
    }
}
