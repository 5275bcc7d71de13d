//! Landing panel shown to signed-out visitors.

use egui::{self, RichText, Vec2};

use crate::theme::*;

/// What the caller should do after rendering the landing panel
pub enum LandingAction {
    /// The user clicked the sign-in call to action
    SignIn,
}

const FEATURES: &[&str] = &[
    "Ask questions on-site during inspections",
    "Get citation authority and fine amounts instantly",
    "Chat history saves your research for later",
    "Always updated with the latest Massachusetts regulations",
];

pub fn landing_panel(ui: &mut egui::Ui) -> Option<LandingAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.heading(
                    RichText::new("Stop Hunting Through Regulation Manuals")
                        .color(TEXT_PRIMARY)
                        .strong(),
                );
                ui.label(
                    RichText::new(
                        "Get instant answers from an assistant that actually knows \
                         weights & measures law, right in the field.",
                    )
                    .color(TEXT_SECONDARY),
                );

                ui.add_space(16.0);
                for feature in FEATURES {
                    ui.label(RichText::new(format!("• {}", feature)).color(TEXT_PRIMARY));
                }

                ui.add_space(16.0);
                egui::Frame::default()
                    .fill(BG_SECONDARY)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(
                                "\"No more driving back to the office to look up laws. \
                                 I can handle complex citations confidently right in the field.\"",
                            )
                            .color(TEXT_SECONDARY)
                            .italics(),
                        );
                        ui.label(
                            RichText::new("— Built by a working W&M inspector")
                                .color(TEXT_SECONDARY)
                                .small(),
                        );
                    });

                ui.add_space(16.0);
                let cta = ui.add(
                    egui::Button::new(
                        RichText::new("Start Free Trial - 6 Queries")
                            .color(TEXT_PRIMARY)
                            .strong(),
                    )
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(220.0, 32.0)),
                );
                if cta.clicked() {
                    action = Some(LandingAction::SignIn);
                }
                ui.label(
                    RichText::new("No credit card required. Upgrade to Professional for $20/month.")
                        .color(TEXT_SECONDARY)
                        .small(),
                );
            });
        });

    action
}
