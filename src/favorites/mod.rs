//! Favorited product ids, kept in memory for the session and mirrored to
//! durable storage after every change.

use std::collections::BTreeSet;

use tracing::{
    debug,
    info,
    warn,
};

use crate::{
    core::{
        ExplorerError,
        ProductId,
    },
    persistence::KeyValueStore,
};

pub const FAVORITES_KEY: &str = "favorites";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: BTreeSet<ProductId>,
}

impl FavoriteSet {
    pub fn from_ids(ids: impl IntoIterator<Item = ProductId>) -> Self {
        Self { ids: ids.into_iter().collect() }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Copy of the set with `id` flipped in or out.
    pub fn toggled(&self, id: ProductId) -> Self {
        let mut ids = self.ids.clone();
        if !ids.remove(&id) {
            ids.insert(id);
        }
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.ids.iter().copied()
    }

    pub fn to_json(&self) -> Result<String, ExplorerError> {
        let ids: Vec<ProductId> = self.iter().collect();
        Ok(serde_json::to_string(&ids)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ExplorerError> {
        let ids: Vec<ProductId> = serde_json::from_str(json)?;
        Ok(Self::from_ids(ids))
    }
}

/// Reads the stored set once. Anything unreadable yields an empty set.
pub fn load(storage: &dyn KeyValueStore) -> FavoriteSet {
    let stored = match storage.read(FAVORITES_KEY) {
        Ok(Some(json)) => json,
        Ok(None) => {
            warn!("No stored favorites under '{}', starting empty", FAVORITES_KEY);
            return FavoriteSet::default();
        }
        Err(e) => {
            warn!("Failed to read favorites: {}. Starting empty.", e.into_storage());
            return FavoriteSet::default();
        }
    };

    match FavoriteSet::from_json(&stored) {
        Ok(set) => {
            info!("Loaded {} favorites", set.len());
            set
        }
        Err(e) => {
            warn!("Stored favorites are corrupt: {}. Starting empty.", e);
            FavoriteSet::default()
        }
    }
}

pub fn is_favorite(set: &FavoriteSet, id: ProductId) -> bool {
    set.contains(id)
}

pub fn toggle(set: &FavoriteSet, id: ProductId) -> FavoriteSet {
    set.toggled(id)
}

/// Writes the set back. Failures are logged and otherwise ignored.
pub fn persist(storage: &dyn KeyValueStore, set: &FavoriteSet) {
    if let Err(e) = try_persist(storage, set) {
        warn!("{}", e);
    }
}

fn try_persist(storage: &dyn KeyValueStore, set: &FavoriteSet) -> Result<(), ExplorerError> {
    let json = set.to_json().map_err(ExplorerError::into_storage)?;
    storage.write(FAVORITES_KEY, &json).map_err(ExplorerError::into_storage)?;
    debug!("Saved {} favorites", set.len());
    Ok(())
}

/// Session-owned favorites: the current set plus the storage it is mirrored to.
pub struct FavoritesStore {
    set: FavoriteSet,
    storage: Box<dyn KeyValueStore>,
}

impl FavoritesStore {
    pub fn load(storage: Box<dyn KeyValueStore>) -> Self {
        let set = load(storage.as_ref());
        Self { set, storage }
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.set
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        is_favorite(&self.set, id)
    }

    /// Flips `id` and persists. Returns whether `id` is now a favorite.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        self.set = toggle(&self.set, id);
        persist(self.storage.as_ref(), &self.set);
        self.set.contains(id)
    }

    pub fn clear(&mut self) {
        self.set = FavoriteSet::default();
        persist(self.storage.as_ref(), &self.set);
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
