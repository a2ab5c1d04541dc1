use chrono::{
    DateTime,
    Local,
};
use eframe::egui::{
    self,
    containers,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        theme: &Theme,
        favorites_count: usize,
        fetched_at: Option<DateTime<Local>>,
        catalog_url: &str,
        actions: &mut ActionQueue,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Refresh Products").clicked() {
                        actions.push(UiAction::Refresh);
                    }
                    if ui
                        .add_enabled(favorites_count > 0, egui::Button::new("Clear Favorites"))
                        .clicked()
                    {
                        actions.push(UiAction::ClearFavorites);
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Reset Filters").clicked() {
                        actions.push(UiAction::ResetFilters);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status(ui, theme, favorites_count, fetched_at, catalog_url);
                });
            });
        });
    }

    fn show_status(
        ui: &mut egui::Ui,
        theme: &Theme,
        favorites_count: usize,
        fetched_at: Option<DateTime<Local>>,
        catalog_url: &str,
    ) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small(format!("{}", favorites_count));
            ui.small(egui::RichText::new("♥").color(theme.favorite(ui.ctx())))
                .on_hover_text("Favorites saved on this device");
        });

        ui.add_space(6.0);

        let (status, tooltip) = match fetched_at {
            Some(at) => (
                format!("Updated {}", at.format("%H:%M")),
                format!("Loaded from {} at {}", catalog_url, at.format("%Y-%m-%d %H:%M:%S")),
            ),
            None => ("Not loaded".to_string(), format!("Catalog: {}", catalog_url)),
        };
        ui.small(egui::RichText::new(status).color(theme.muted(ui.ctx()))).on_hover_text(tooltip);
    }
}
