mod page;

use std::time::Instant;

use eframe::egui;
use page::{
    DetailStatus,
    FetchSequence,
    Page,
};
use tracing::{
    error,
    info,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    detail::{
        back_link,
        product_detail,
    },
    error_page::error_page,
    message_overlay::MessageOverlay,
    table::{
        product_listing,
        ListingState,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    catalog::CatalogClient,
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        ExplorerError,
        ProductId,
        Settings,
    },
    favorites::FavoritesStore,
    persistence::FileStore,
};

pub struct ExplorerApp {
    settings: Settings,
    client: CatalogClient,
    task_manager: TaskManager,
    favorites: FavoritesStore,
    listing: ListingState,
    listing_loading: bool,
    list_requests: FetchSequence,
    listing_error: Option<ExplorerError>,
    page: Page,
    actions: ActionQueue,
    message_overlay: MessageOverlay,
    theme: Theme,
    window_title: String,
}

impl ExplorerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Result<Self, ExplorerError> {
        let client = CatalogClient::new(&settings.catalog_base_url, settings.request_timeout())?;

        let repaint_ctx = cc.egui_ctx.clone();
        let task_manager = TaskManager::new()?.with_notifier(move || repaint_ctx.request_repaint());

        let favorites = FavoritesStore::load(Box::new(FileStore::app_data()));

        let mut app = Self {
            listing: ListingState::new(settings.search_debounce()),
            settings,
            client,
            task_manager,
            favorites,
            listing_loading: false,
            list_requests: FetchSequence::default(),
            listing_error: None,
            page: Page::Listing,
            actions: ActionQueue::new(),
            message_overlay: MessageOverlay::new(),
            theme: Theme::slate(),
            window_title: String::new(),
        };

        egui_extras::install_image_loaders(&cc.egui_ctx);
        app.setup_theme(cc);
        app.load_products();

        Ok(app)
    }

    fn setup_theme(&self, cc: &eframe::CreationContext<'_>) {
        set_theme(&cc.egui_ctx, &self.theme);

        let (theme, preference) = if self.settings.dark_mode {
            (egui::Theme::Dark, egui::ThemePreference::Dark)
        } else {
            (egui::Theme::Light, egui::ThemePreference::Light)
        };
        cc.egui_ctx.set_theme(theme);
        cc.egui_ctx.options_mut(|o| o.theme_preference = preference);
    }

    fn load_products(&mut self) {
        self.listing_loading = true;
        self.listing_error = None;
        self.message_overlay.set_message("Loading products...");
        let request = self.list_requests.next();
        self.task_manager.load_products(self.client.clone(), request);
    }

    fn open_product(&mut self, id: ProductId) {
        self.page = Page::detail(id);
        self.message_overlay.set_message("Loading product...");
        self.task_manager.load_product(self.client.clone(), id);
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::ProductsLoaded { request, result } => {
                if !self.list_requests.is_latest(request) {
                    info!("Discarding product list from superseded request {}", request);
                    return;
                }
                self.listing_loading = false;
                match result {
                    Ok(products) => {
                        info!("Loaded {} products", products.len());
                        self.listing.set_products(products);
                        self.listing_error = None;
                    }
                    Err(e) => {
                        error!("Failed to load products: {}", e);
                        self.listing_error = Some(e);
                    }
                }
            }
            TaskResult::ProductLoaded { id, result } => {
                if let Err(e) = &result {
                    error!("Failed to load product {}: {}", id, e);
                }
                if !self.page.accept_product(id, result) {
                    info!("Discarding result for product {}, no longer shown", id);
                }
            }
        }

        if !self.listing_loading && !self.page.is_loading_detail() {
            self.message_overlay.clear_message();
        }
    }

    fn execute_actions(&mut self) {
        let actions: Vec<UiAction> = self.actions.drain().collect();

        for action in actions {
            match action {
                UiAction::SetSearchInput(text) => {
                    self.listing.set_search_input(text, Instant::now());
                }
                UiAction::ClearSearch => self.listing.set_search_text(String::new()),
                UiAction::SetCategory(category) => self.listing.set_category(category),
                UiAction::SetFavoritesOnly(favorites_only) => {
                    self.listing.set_favorites_only(favorites_only)
                }
                UiAction::ResetFilters => self.listing.reset_filters(),
                UiAction::ToggleFavorite(id) => {
                    self.favorites.toggle(id);
                    self.listing.favorites_changed();
                }
                UiAction::ClearFavorites => {
                    self.favorites.clear();
                    self.listing.favorites_changed();
                }
                UiAction::OpenProduct(id) => self.open_product(id),
                UiAction::BackToListing => {
                    self.page = Page::Listing;
                    self.load_products();
                }
                UiAction::Retry | UiAction::Refresh => match self.page.detail_id() {
                    Some(id) => self.open_product(id),
                    None => self.load_products(),
                },
            }
        }
    }

    fn show_page(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(6.0);
            match &self.page {
                Page::Listing => match &self.listing_error {
                    Some(e) => error_page(ui, e, &self.theme, false, &mut self.actions),
                    None if self.listing_loading && self.listing.products().is_empty() => {}
                    None => product_listing(
                        ui,
                        &mut self.listing,
                        &self.favorites,
                        &self.theme,
                        &mut self.actions,
                    ),
                },
                Page::Detail { status, .. } => match status {
                    DetailStatus::Loading => back_link(ui, &mut self.actions),
                    DetailStatus::Loaded(product) => product_detail(
                        ui,
                        product,
                        self.favorites.is_favorite(product.id),
                        &self.theme,
                        &mut self.actions,
                    ),
                    DetailStatus::Failed(e) => error_page(ui, e, &self.theme, true, &mut self.actions),
                },
            }
        });
    }

    fn update_window_title(&mut self, ctx: &egui::Context) {
        let title = self.page.window_title();
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }

    fn sync_theme_preference(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings.dark_mode {
            self.settings.persist_dark_mode(dark_mode);
        }
    }

    fn schedule_debounce_wakeup(&self, ctx: &egui::Context) {
        if let Some(remaining) = self.listing.next_wakeup(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.listing.tick(Instant::now());

        TopBar::show(
            ctx,
            &self.theme,
            self.favorites.len(),
            self.listing.fetched_at(),
            self.client.base_url(),
            &mut self.actions,
        );

        self.show_page(ctx);
        self.message_overlay.show(ctx, &self.theme);

        if !self.actions.is_empty() {
            self.execute_actions();
            ctx.request_repaint();
        }

        self.schedule_debounce_wakeup(ctx);
        self.update_window_title(ctx);
        self.sync_theme_preference(ctx);
    }
}
