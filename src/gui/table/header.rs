use eframe::egui::{
    self,
    Frame,
    Margin,
    RichText,
    TextEdit,
    Ui,
};
use egui_extras::TableRow;

use super::state::ListingState;
use crate::{
    core::models::display_category,
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        theme::Theme,
    },
};

const ALL_CATEGORIES: &str = "All Categories";

pub fn controls_row(
    ui: &mut Ui,
    state: &ListingState,
    favorites_count: usize,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    let mut search = state.search_input().to_string();
    let search_width = 320.0;

    Frame::group(ui.style()).inner_margin(Margin::symmetric(8, 4)).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 12.0;

            let response = ui.add_sized(
                [search_width, ui.spacing().interact_size.y],
                TextEdit::singleline(&mut search).hint_text("Search products..."),
            );
            if response.changed() {
                actions.push(UiAction::SetSearchInput(search.clone()));
            }
            if !search.is_empty() && ui.small_button("✖").on_hover_text("Clear search").clicked()
            {
                actions.push(UiAction::ClearSearch);
            }

            ui.separator();
            category_select(ui, state, actions);

            ui.separator();
            favorites_toggle(ui, state, favorites_count, theme, actions);
        });
    });
}

fn category_select(ui: &mut Ui, state: &ListingState, actions: &mut ActionQueue) {
    let current = state.criteria().category.clone();
    let mut selected = current.clone();

    let selected_text = match &current {
        Some(category) => display_category(category),
        None => ALL_CATEGORIES.to_string(),
    };

    ui.label("Category");
    egui::ComboBox::from_id_salt("category_select")
        .selected_text(selected_text)
        .width(180.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, None, ALL_CATEGORIES);
            for category in state.categories() {
                ui.selectable_value(
                    &mut selected,
                    Some(category.clone()),
                    display_category(category),
                );
            }
        });

    if selected != current {
        actions.push(UiAction::SetCategory(selected));
    }
}

fn favorites_toggle(
    ui: &mut Ui,
    state: &ListingState,
    favorites_count: usize,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    let favorites_only = state.criteria().favorites_only;
    let label = if favorites_count > 0 {
        format!("♥ Favorites ({})", favorites_count)
    } else {
        "♥ Favorites".to_string()
    };
    let text = if favorites_only {
        RichText::new(label).color(theme.favorite(ui.ctx())).strong()
    } else {
        RichText::new(label)
    };

    let hover = if favorites_only { "Show all products" } else { "Show only favorite products" };
    if ui.selectable_label(favorites_only, text).on_hover_text(hover).clicked() {
        actions.push(UiAction::SetFavoritesOnly(!favorites_only));
    }
}

pub fn header_cols(mut header: TableRow<'_, '_>, theme: &Theme) {
    for title in ["", "", "Product", "Category", "Price", "Rating", ""] {
        header.col(|ui| {
            ui.label(theme.heading(ui.ctx(), title));
        });
    }
}
