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
use crate::core::{
    models::display_category,
    Product,
};

const IMAGE_HEIGHT: f32 = 320.0;

pub fn back_link(ui: &mut Ui, actions: &mut ActionQueue) {
    if ui.link("‹ Back to Products").clicked() {
        actions.push(UiAction::BackToListing);
    }
}

pub fn product_detail(
    ui: &mut Ui,
    product: &Product,
    is_favorite: bool,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    back_link(ui, actions);
    ui.add_space(12.0);

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        if let Some(uri) = product.image_uri() {
            ui.add(
                egui::Image::from_uri(uri)
                    .max_height(IMAGE_HEIGHT)
                    .maintain_aspect_ratio(true)
                    .show_loading_spinner(true),
            )
            .on_hover_text(uri);
            ui.add_space(12.0);
        }

        ui.label(
            RichText::new(display_category(&product.category).to_uppercase())
                .small()
                .color(theme.accent(ui.ctx())),
        );
        ui.label(RichText::new(&product.title).size(26.0).strong());
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new(product.price_label()).size(22.0).strong());
            if let Some(rating) = &product.rating {
                ui.separator();
                ui.label(RichText::new(rating.label()).color(theme.rating(ui.ctx())));
            }
        });

        ui.add_space(12.0);
        ui.label(theme.heading(ui.ctx(), "Description"));
        ui.add(egui::Label::new(&product.description).wrap());

        ui.add_space(16.0);
        let (label, color) = if is_favorite {
            ("♥ Remove from Favorites", theme.favorite(ui.ctx()))
        } else {
            ("♡ Add to Favorites", theme.accent(ui.ctx()))
        };
        if ui.button(RichText::new(label).color(color)).clicked() {
            actions.push(UiAction::ToggleFavorite(product.id));
        }
    });
}
