use crate::core::ProductId;

// A simple ui action queue so the draw functions only need shared references
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    // Filters
    SetSearchInput(String),
    ClearSearch,
    SetCategory(Option<String>),
    SetFavoritesOnly(bool),
    ResetFilters,

    // Favorites
    ToggleFavorite(ProductId),
    ClearFavorites,

    // Navigation
    OpenProduct(ProductId),
    BackToListing,
    Retry,
    Refresh,
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
