//! Help panel — static usage tips and the legal disclaimer.

use egui::{self, RichText, ScrollArea};

use crate::theme::*;

const TIPS: &[(&str, &str)] = &[
    (
        "Be specific",
        "Instead of \"pricing rules\", try \"fine amounts for incorrect price displays on retail items\".",
    ),
    (
        "Ask for citations",
        "Request specific law sections: \"What Mass law gives me authority to cite pricing violations?\"",
    ),
    (
        "Context matters",
        "Mention the type of business: \"gas station pump accuracy requirements\" vs \"grocery store scale rules\".",
    ),
    (
        "Field-ready questions",
        "Ask practical questions: \"How do I handle a business that refuses inspection?\"",
    ),
];

const EXAMPLE_QUERIES: &[&str] = &[
    "What's the fine for incorrect pricing on 12 items?",
    "Store wants to use electronic price tags. What are the rules?",
    "I went to inspect the scales at a fish house and they won't let me.",
    "What sample size do I use for scanner accuracy tests?",
];

const DISCLAIMER: &str = "This assistant is a research tool, not a substitute for official \
legal guidance or your professional judgment. Always verify citations against the current \
text of the law before taking enforcement action. The creators of this tool assume no \
responsibility for enforcement actions or decisions made based on its responses.";

pub fn help_panel(ui: &mut egui::Ui) {
    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.heading(RichText::new("Help & Tips").color(TEXT_PRIMARY));
                ui.separator();

                ui.label(RichText::new("How to get the best results").color(ACCENT).strong());
                for (title, body) in TIPS {
                    egui::Frame::default()
                        .fill(BG_SECONDARY)
                        .corner_radius(PANEL_ROUNDING)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(*title).color(TEXT_PRIMARY).strong());
                            ui.label(RichText::new(*body).color(TEXT_SECONDARY));
                        });
                    ui.add_space(4.0);
                }

                ui.add_space(8.0);
                ui.label(RichText::new("Example questions").color(ACCENT).strong());
                for example in EXAMPLE_QUERIES {
                    ui.label(
                        RichText::new(format!("• {}", example)).color(TEXT_SECONDARY),
                    );
                }

                ui.add_space(8.0);
                ui.label(RichText::new("Pro tips from the field").color(ACCENT).strong());
                ui.label(
                    RichText::new(
                        "Before inspections, ask about the business type and its common \
                         violations. On-site, request the exact legal language to include \
                         in your report. Use your chat history to keep citations consistent \
                         across similar cases.",
                    )
                    .color(TEXT_SECONDARY),
                );

                ui.add_space(12.0);
                ui.separator();
                ui.label(RichText::new("Legal disclaimer").color(WARNING).strong());
                ui.label(RichText::new(DISCLAIMER).color(TEXT_SECONDARY).small());
            });
        });
}
