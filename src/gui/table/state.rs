use std::time::{
    Duration,
    Instant,
};

use chrono::{
    DateTime,
    Local,
};

use crate::{
    core::{
        category_index,
        filter_indices,
        Debouncer,
        FilterCriteria,
        Product,
    },
    favorites::FavoriteSet,
};

/// Everything the listing page needs between frames: the fetched products,
/// the filter controls, and the cached result of filtering.
pub struct ListingState {
    products: Vec<Product>,
    categories: Vec<String>,
    fetched_at: Option<DateTime<Local>>,
    criteria: FilterCriteria,
    search_input: String,
    search_debounce: Debouncer<String>,
    visible_indices: Vec<usize>,
    dirty: bool,
}

impl ListingState {
    pub fn new(search_debounce: Duration) -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            fetched_at: None,
            criteria: FilterCriteria::default(),
            search_input: String::new(),
            search_debounce: Debouncer::new(search_debounce),
            visible_indices: Vec::new(),
            dirty: true,
        }
    }

    pub fn set_products(&mut self, products: Vec<Product>) {
        self.categories = category_index(&products);
        self.products = products;
        self.fetched_at = Some(Local::now());

        let stale_category = self
            .criteria
            .category
            .as_ref()
            .is_some_and(|selected| !self.categories.contains(selected));
        if stale_category {
            self.criteria.category = None;
        }

        self.dirty = true;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn fetched_at(&self) -> Option<DateTime<Local>> {
        self.fetched_at
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Raw text box contents, ahead of the debounced search text.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn set_search_input(&mut self, input: String, now: Instant) {
        if self.search_input != input {
            self.search_input = input.clone();
            self.search_debounce.push(input, now);
        }
    }

    /// Applies search text immediately, dropping any pending keystrokes.
    pub fn set_search_text(&mut self, text: String) {
        self.search_debounce.cancel();
        self.search_input = text.clone();
        self.apply_search_text(text);
    }

    /// Fires the debounced search if it is due. Returns true when the
    /// criteria changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.search_debounce.poll(now) {
            Some(text) => self.apply_search_text(text),
            None => false,
        }
    }

    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        self.search_debounce.time_remaining(now)
    }

    fn apply_search_text(&mut self, text: String) -> bool {
        if self.criteria.search_text == text {
            return false;
        }
        self.criteria.search_text = text;
        self.dirty = true;
        true
    }

    pub fn set_category(&mut self, category: Option<String>) {
        if self.criteria.category != category {
            self.criteria.category = category;
            self.dirty = true;
        }
    }

    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        if self.criteria.favorites_only != favorites_only {
            self.criteria.favorites_only = favorites_only;
            self.dirty = true;
        }
    }

    pub fn reset_filters(&mut self) {
        self.search_debounce.cancel();
        self.search_input.clear();
        self.criteria = FilterCriteria::default();
        self.dirty = true;
    }

    /// The favorites predicate reads the set, so a toggle must invalidate.
    pub fn favorites_changed(&mut self) {
        if self.criteria.favorites_only {
            self.dirty = true;
        }
    }

    pub fn ensure_indices(&mut self, favorites: &FavoriteSet) {
        if self.dirty {
            self.visible_indices = filter_indices(&self.products, &self.criteria, favorites);
            self.dirty = false;
        }
    }

    pub fn visible_indices(&self) -> &[usize] {
        &self.visible_indices
    }

    pub fn visible_products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.visible_indices.iter().filter_map(|&idx| self.products.get(idx))
    }
}
