//! Chat panel — transcript, scope selector, usage-limit banner, composer.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use wmhelper_types::message::{Message, Sender};
use wmhelper_types::scope::Scope;

use crate::state::UiState;
use crate::theme::*;

/// What the caller should do after rendering the chat panel
pub enum ChatAction {
    /// The user submitted a query
    Submit(String),
    /// The user asked to see subscription plans
    ShowPlans,
}

/// Render the chat panel. Returns an action for the caller to handle.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    messages: &[Message],
) -> Option<ChatAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header with scope selector
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Ask W&M Helper").color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = if state.is_busy() { WARNING } else { SUCCESS };
                        ui.label(
                            RichText::new(&state.status_text)
                                .color(status_color)
                                .small(),
                        );
                        egui::ComboBox::from_id_salt("query_scope")
                            .selected_text(state.scope.label())
                            .show_ui(ui, |ui| {
                                for &scope in Scope::all() {
                                    ui.selectable_value(&mut state.scope, scope, scope.label());
                                }
                            });
                    });
                });

                ui.separator();

                // Transcript
                let available_height = ui.available_height() - 90.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if messages.is_empty() {
                            ui.add_space(24.0);
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new(
                                        "Ask about Massachusetts weights & measures law, \
                                         device requirements, or citation procedures.",
                                    )
                                    .color(TEXT_SECONDARY)
                                    .italics(),
                                );
                            });
                        }
                        for message in messages {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }

                        if state.sending {
                            ui.label(
                                RichText::new("Searching the regulations...")
                                    .color(TEXT_SECONDARY)
                                    .italics(),
                            );
                        }
                    });

                ui.add_space(8.0);

                // Usage-limit banner
                if let Some(banner) = state.limit_banner.clone() {
                    egui::Frame::default()
                        .fill(BANNER_BG)
                        .corner_radius(PANEL_ROUNDING)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&banner).color(WARNING));
                                if ui
                                    .link(RichText::new("View subscription options").color(ACCENT))
                                    .clicked()
                                {
                                    action = Some(ChatAction::ShowPlans);
                                }
                            });
                        });
                    ui.add_space(4.0);
                }

                // Composer
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Ask about W&M regulations...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled = !state.input_text.trim().is_empty() && !state.is_busy();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    if (response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && send_enabled)
                        || send_btn.clicked()
                    {
                        let text = state.input_text.trim().to_string();
                        action = Some(ChatAction::Submit(text));
                        state.input_text.clear();
                        response.request_focus();
                    }
                });
            });
        });

    action
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (label, label_color, bg) = match message.sender {
        Sender::User => ("You", ACCENT, BG_SECONDARY),
        Sender::Ai => ("W&M Helper", SUCCESS, BG_SURFACE),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(label_color).strong().small());
            ui.label(RichText::new(&message.text).color(TEXT_PRIMARY));
        });
}
