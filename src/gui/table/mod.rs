use eframe::egui::{
    self,
    RichText,
    Sense,
    Ui,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::{
    core::{
        models::display_category,
        Product,
    },
    favorites::FavoritesStore,
};

mod header;
mod state;

use header::{
    controls_row,
    header_cols,
};
pub use state::ListingState;

const ROW_HEIGHT: f32 = 52.0;
const THUMBNAIL_SIZE: f32 = 44.0;

pub fn product_listing(
    ui: &mut Ui,
    state: &mut ListingState,
    favorites: &FavoritesStore,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    state.ensure_indices(favorites.favorites());

    ui.heading(theme.heading(ui.ctx(), "Browse Products"));
    ui.label(
        RichText::new(format!("Explore our collection of {} products", state.products().len()))
            .color(theme.muted(ui.ctx())),
    );
    ui.add_space(8.0);

    controls_row(ui, state, favorites.len(), theme, actions);
    ui.add_space(10.0);

    if state.products().is_empty() {
        empty_state(
            ui,
            theme,
            "No Products Available",
            "Unable to load products at this time. Please refresh the page.",
        );
        if ui.button("Refresh").clicked() {
            actions.push(UiAction::Refresh);
        }
        return;
    }

    if state.visible_indices().is_empty() {
        if state.criteria().favorites_only && favorites.is_empty() {
            empty_state(
                ui,
                theme,
                "No favorites yet",
                "Click the heart icon to add products to your favorites",
            );
        } else {
            empty_state(
                ui,
                theme,
                "No products found",
                "Try adjusting your filters or search query",
            );
        }
        return;
    }

    ui.label(
        RichText::new(format!(
            "Showing {} of {}",
            state.visible_indices().len(),
            state.products().len()
        ))
        .small()
        .color(theme.muted(ui.ctx())),
    );

    let visible: Vec<&Product> = state.visible_products().collect();

    egui::ScrollArea::horizontal().show(ui, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(32.0))
            .column(Column::exact(THUMBNAIL_SIZE + 8.0))
            .column(Column::remainder().at_least(240.0))
            .column(Column::auto().at_least(140.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(90.0))
            .column(Column::auto().at_least(70.0))
            .header(25.0, |header| header_cols(header, theme))
            .body(|body| {
                body.rows(ROW_HEIGHT, visible.len(), |mut row| {
                    let product = visible[row.index()];
                    let is_favorite = favorites.is_favorite(product.id);

                    row.col(|ui| favorite_button(ui, product, is_favorite, theme, actions));
                    row.col(|ui| thumbnail(ui, product));
                    row.col(|ui| {
                        let title = egui::Label::new(RichText::new(&product.title).strong())
                            .truncate()
                            .sense(Sense::click());
                        let response = ui
                            .add(title)
                            .on_hover_cursor(egui::CursorIcon::PointingHand)
                            .on_hover_text(&product.title);
                        if response.clicked() {
                            actions.push(UiAction::OpenProduct(product.id));
                        }
                    });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(display_category(&product.category))
                                .color(theme.accent(ui.ctx())),
                        );
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(product.price_label()).strong());
                    });
                    row.col(|ui| match &product.rating {
                        Some(rating) => {
                            ui.label(RichText::new(rating.label()).color(theme.rating(ui.ctx())));
                        }
                        None => {
                            ui.label(RichText::new("No ratings").color(theme.muted(ui.ctx())));
                        }
                    });
                    row.col(|ui| {
                        if ui.link("Details ›").clicked() {
                            actions.push(UiAction::OpenProduct(product.id));
                        }
                    });
                });
            });
    });
}

pub(crate) fn favorite_button(
    ui: &mut Ui,
    product: &Product,
    is_favorite: bool,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    let (glyph, color, hover) = if is_favorite {
        ("♥", theme.favorite(ui.ctx()), "Remove from favorites")
    } else {
        ("♡", theme.muted(ui.ctx()), "Add to favorites")
    };

    let response = ui
        .add(egui::Label::new(RichText::new(glyph).size(18.0).color(color)).sense(Sense::click()))
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(hover);

    if response.clicked() {
        actions.push(UiAction::ToggleFavorite(product.id));
    }
}

fn thumbnail(ui: &mut Ui, product: &Product) {
    if let Some(uri) = product.image_uri() {
        ui.add(
            egui::Image::from_uri(uri)
                .fit_to_exact_size(egui::vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE))
                .maintain_aspect_ratio(true)
                .show_loading_spinner(true),
        );
    }
}

fn empty_state(ui: &mut Ui, theme: &Theme, title: &str, hint: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(RichText::new(title).size(24.0).color(theme.accent(ui.ctx())));
        ui.add_space(4.0);
        ui.label(RichText::new(hint).color(theme.muted(ui.ctx())));
        ui.add_space(12.0);
    });
}
