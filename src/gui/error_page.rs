use eframe::egui::{
    self,
    RichText,
    Ui,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::core::ExplorerError;

/// Page-level boundary for failed catalog requests. Replaces the page body
/// and offers a retry of whatever fetch failed.
pub fn error_page(
    ui: &mut Ui,
    error: &ExplorerError,
    theme: &Theme,
    show_back: bool,
    actions: &mut ActionQueue,
) {
    let (title, message) = match error {
        ExplorerError::ProductNotFound(_) => ("Product Not Found", error.user_message()),
        _ => ("Oops! Something went wrong", error.user_message()),
    };

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new("⚠").size(40.0).color(theme.favorite(ui.ctx())));
        ui.label(RichText::new(title).size(22.0).strong());
        ui.add_space(6.0);
        ui.label(RichText::new(message).color(theme.muted(ui.ctx())));
        ui.add_space(14.0);

        ui.horizontal(|ui| {
            // Center the button pair
            let width = if show_back { 260.0 } else { 110.0 };
            ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));

            if error.is_retryable() && ui.button("Try Again").clicked() {
                actions.push(UiAction::Retry);
            }
            if show_back && ui.button("Back to Products").clicked() {
                actions.push(UiAction::BackToListing);
            }
        });

        ui.add_space(10.0);
        ui.collapsing("Technical Details", |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut error.to_string().as_str())
                    .desired_width(f32::INFINITY)
                    .desired_rows(2)
                    .code_editor(),
            );
        });
    });
}
