//! Session history drawer — saved research threads plus a new-chat entry.

use egui::{self, RichText, ScrollArea};
use wmhelper_types::session::{SessionMeta, NEW_SESSION_ID};
use wmhelper_types::time::format_date;

use crate::theme::*;

/// Render the session history list. Returns Some(session_id) when the
/// user picks a session; `NEW_SESSION_ID` means start a fresh chat.
pub fn history_panel(
    ui: &mut egui::Ui,
    sessions: &[SessionMeta],
    current: Option<u64>,
) -> Option<u64> {
    let mut selected = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Research History").color(TEXT_PRIMARY));
            ui.separator();

            if ui
                .add(
                    egui::Button::new(RichText::new("+ New Chat").color(TEXT_PRIMARY))
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING),
                )
                .clicked()
            {
                selected = Some(NEW_SESSION_ID);
            }

            ui.add_space(8.0);

            if sessions.is_empty() {
                ui.label(
                    RichText::new("No saved conversations yet.")
                        .color(TEXT_SECONDARY)
                        .italics(),
                );
                return;
            }

            ScrollArea::vertical()
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for session in sessions {
                        let is_current = current == Some(session.id);
                        let fill = if is_current { BG_SURFACE } else { BG_SECONDARY };

                        egui::Frame::default()
                            .fill(fill)
                            .corner_radius(PANEL_ROUNDING)
                            .inner_margin(6.0)
                            .show(ui, |ui| {
                                let title_color =
                                    if is_current { ACCENT } else { TEXT_PRIMARY };
                                if ui
                                    .link(RichText::new(&session.title).color(title_color))
                                    .clicked()
                                {
                                    selected = Some(session.id);
                                }
                                ui.label(
                                    RichText::new(format_date(Some(session.updated_at.as_str())))
                                        .color(TEXT_SECONDARY)
                                        .small(),
                                );
                            });
                        ui.add_space(2.0);
                    }
                });
        });

    selected
}
