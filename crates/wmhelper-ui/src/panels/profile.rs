//! Profile panel — subscription summary, usage meters, recent queries
//! and plan cards.

use egui::{self, ProgressBar, RichText, ScrollArea, Vec2};
use wmhelper_core::usage::UsageModel;
use wmhelper_types::time::{format_date, format_time};
use wmhelper_types::usage::{Tier, UsageCounters};
use wmhelper_types::user::UserContext;

use crate::theme::*;

/// What the caller should do after rendering the profile panel
pub enum ProfileAction {
    /// The user highlighted a plan card
    SelectTier(Tier),
    /// The user confirmed a plan change
    ChangeTier(Tier),
}

/// Render the profile panel. Returns an action for the caller to handle.
pub fn profile_panel(
    ui: &mut egui::Ui,
    user: &UserContext,
    model: &UsageModel,
) -> Option<ProfileAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.heading(RichText::new(user.display_name()).color(TEXT_PRIMARY));
                if let Some(email) = &user.email {
                    ui.label(RichText::new(email).color(TEXT_SECONDARY).small());
                }
                ui.separator();

                if let Some(err) = model.error() {
                    egui::Frame::default()
                        .fill(ERROR_BG)
                        .corner_radius(PANEL_ROUNDING)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(err).color(ERROR));
                        });
                    ui.add_space(8.0);
                }

                let Some(snapshot) = model.snapshot() else {
                    ui.label(
                        RichText::new("Loading your usage data...")
                            .color(TEXT_SECONDARY)
                            .italics(),
                    );
                    return;
                };

                // Current plan
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Current plan:").color(TEXT_SECONDARY));
                    let badge_color = match snapshot.subscription_tier {
                        Tier::Free => TEXT_SECONDARY,
                        Tier::Paid => SUCCESS,
                    };
                    ui.label(
                        RichText::new(snapshot.subscription_tier.label())
                            .color(badge_color)
                            .strong(),
                    );
                    if snapshot.subscription_tier == Tier::Paid {
                        ui.label(
                            RichText::new(format!(
                                "renews {}",
                                format_date(snapshot.subscription_end_date.as_deref())
                            ))
                            .color(TEXT_SECONDARY)
                            .small(),
                        );
                    }
                });

                ui.add_space(8.0);

                // Usage meters
                ui.label(RichText::new("Usage").color(ACCENT).strong());
                render_meter(ui, "Today", snapshot.usage.daily, snapshot.usage.daily_limit, snapshot.usage.daily_percent());
                render_meter(ui, "This month", snapshot.usage.monthly, snapshot.usage.monthly_limit, snapshot.usage.monthly_percent());
                ui.label(
                    RichText::new(format!("{} queries all time", snapshot.usage.total))
                        .color(TEXT_SECONDARY)
                        .small(),
                );
                render_warnings(ui, &snapshot.usage);

                ui.add_space(12.0);
                ui.separator();

                // Recent queries
                ui.label(RichText::new("Recent Queries").color(ACCENT).strong());
                if snapshot.recent_queries.is_empty() {
                    ui.label(
                        RichText::new("No queries yet.")
                            .color(TEXT_SECONDARY)
                            .italics(),
                    );
                }
                for recent in &snapshot.recent_queries {
                    egui::Frame::default()
                        .fill(BG_SECONDARY)
                        .corner_radius(PANEL_ROUNDING)
                        .inner_margin(6.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(&recent.query).color(TEXT_PRIMARY));
                            ui.label(
                                RichText::new(format!(
                                    "{} · {} tokens · {}",
                                    recent.scope,
                                    recent.tokens_used,
                                    format_time(&recent.created_at)
                                ))
                                .color(TEXT_SECONDARY)
                                .small(),
                            );
                        });
                    ui.add_space(2.0);
                }

                ui.add_space(12.0);
                ui.separator();

                // Plan cards
                ui.label(RichText::new("Plans").color(ACCENT).strong());
                ui.horizontal_top(|ui| {
                    for &tier in Tier::all() {
                        if let Some(a) = render_plan_card(ui, tier, model) {
                            action = Some(a);
                        }
                    }
                });
            });
        });

    action
}

fn render_meter(ui: &mut egui::Ui, label: &str, used: u32, limit: u32, percent: f32) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(TEXT_SECONDARY).small());
        ui.label(
            RichText::new(format!("{} / {}", used, limit))
                .color(TEXT_PRIMARY)
                .small(),
        );
    });
    ui.add(
        ProgressBar::new(percent / 100.0)
            .desired_height(8.0)
            .fill(meter_color(percent)),
    );
}

fn render_warnings(ui: &mut egui::Ui, usage: &UsageCounters) {
    if usage.daily_warning() {
        ui.label(
            RichText::new("You are close to your daily query limit.")
                .color(WARNING)
                .small(),
        );
    }
    if usage.monthly_warning() {
        ui.label(
            RichText::new("You are close to your monthly query limit.")
                .color(WARNING)
                .small(),
        );
    }
}

fn render_plan_card(ui: &mut egui::Ui, tier: Tier, model: &UsageModel) -> Option<ProfileAction> {
    let mut action = None;
    let is_selected = model.selected_tier() == Some(tier);
    let is_current = model.current_tier() == Some(tier);

    egui::Frame::default()
        .fill(if is_selected { BG_SURFACE } else { BG_SECONDARY })
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(180.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(tier.label()).color(TEXT_PRIMARY).strong());
                ui.label(RichText::new(tier.price()).color(ACCENT));
                for perk in tier.perks() {
                    ui.label(RichText::new(format!("• {}", perk)).color(TEXT_SECONDARY).small());
                }
                ui.add_space(6.0);

                if is_current {
                    ui.label(RichText::new("Current plan").color(SUCCESS).small());
                } else {
                    let button_label = match tier {
                        Tier::Free => "Switch to Free",
                        Tier::Paid => "Upgrade",
                    };
                    let btn = ui.add(
                        egui::Button::new(RichText::new(button_label).color(TEXT_PRIMARY))
                            .fill(ACCENT)
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(100.0, 24.0)),
                    );
                    if btn.clicked() {
                        action = Some(ProfileAction::ChangeTier(tier));
                    }
                }
            });

            let card = ui.interact(
                ui.min_rect(),
                ui.id().with(("plan_card", tier.label())),
                egui::Sense::click(),
            );
            if card.clicked() && action.is_none() {
                action = Some(ProfileAction::SelectTier(tier));
            }
        });

    action
}
