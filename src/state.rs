use parking_lot::Mutex;

use crate::catalog::Catalog;
use crate::favorites::{FavoritesSet, FavoritesStore};
use crate::models::{CommandRecord, FilterState, Result, SelectionState};
use crate::query;
use crate::selection::SelectionMap;
use crate::syntax::SyntaxBuilder;

/// Everything a presentation layer binds to for one session
pub struct AppState {
    catalog: &'static Catalog,
    store: FavoritesStore,
    favorites: Mutex<FavoritesSet>,
    filter: Mutex<FilterState>,
    selections: Mutex<SelectionMap>,
}

impl AppState {
    /// Create a session over `catalog`, loading favorites once from `store`
    pub fn new(catalog: &'static Catalog, store: FavoritesStore) -> Self {
        let favorites = store.load();
        tracing::info!("Loaded {} favorites", favorites.len());

        Self {
            catalog,
            store,
            favorites: Mutex::new(favorites),
            filter: Mutex::new(FilterState::default()),
            selections: Mutex::new(SelectionMap::new()),
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn favorites(&self) -> FavoritesSet {
        self.favorites.lock().clone()
    }

    pub fn filter_state(&self) -> FilterState {
        self.filter.lock().clone()
    }

    pub fn set_filter_state(&self, filter: FilterState) {
        *self.filter.lock() = filter;
    }

    /// Mutate the filter state in place, returning the updated copy
    pub fn update_filter<F>(&self, f: F) -> FilterState
    where
        F: FnOnce(&mut FilterState),
    {
        let mut filter = self.filter.lock();
        f(&mut *filter);
        filter.clone()
    }

    /// Records visible under the current filter state
    pub fn visible_commands(&self) -> Vec<&'static CommandRecord> {
        let filter = self.filter.lock();
        let favorites = self.favorites.lock();
        query::filter(self.catalog, &filter, &favorites)
    }
}

impl AppState {
    pub fn toggle_favorite(&self, id: &str) -> FavoritesSet {
        let mut favorites = self.favorites.lock();
        *favorites = self.store.toggle(&favorites, id);
        tracing::debug!("Toggled favorite {}; {} favorites", id, favorites.len());
        favorites.clone()
    }

    pub fn add_favorite(&self, id: &str) -> FavoritesSet {
        let mut favorites = self.favorites.lock();
        *favorites = self.store.add(&favorites, id);
        favorites.clone()
    }

    pub fn remove_favorite(&self, id: &str) -> FavoritesSet {
        let mut favorites = self.favorites.lock();
        *favorites = self.store.remove(&favorites, id);
        favorites.clone()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.lock().contains(id)
    }

    pub fn clear_favorites(&self) {
        let mut favorites = self.favorites.lock();
        self.store.clear();
        *favorites = FavoritesSet::new();
    }

    /// Pretty JSON of the session's favorites
    pub fn export_favorites(&self) -> String {
        self.favorites.lock().to_pretty_json()
    }

    /// Returns false when `json` is not an array of strings
    pub fn import_favorites(&self, json: &str) -> bool {
        let mut favorites = self.favorites.lock();
        match self.store.import_set(json) {
            Some(imported) => {
                *favorites = imported;
                true
            }
            None => false,
        }
    }
}

impl AppState {
    /// Make `id` the active card, dropping selections made on other cards
    pub fn focus_command(&self, id: &str) -> Result<SelectionState> {
        self.catalog.require(id)?;
        Ok(self.selections.lock().focus(id).clone())
    }

    pub fn selection(&self, id: &str) -> SelectionState {
        self.selections.lock().get_or_default(id)
    }

    /// Mutate a command's selection, returning the updated copy
    pub fn update_selection<F>(&self, id: &str, f: F) -> Result<SelectionState>
    where
        F: FnOnce(&mut SelectionState),
    {
        self.catalog.require(id)?;
        let mut selections = self.selections.lock();
        let selection = selections.get_mut(id);
        f(&mut *selection);
        Ok(selection.clone())
    }

    pub fn reset_selection(&self, id: &str) {
        self.selections.lock().reset(id);
    }

    /// Syntax string for `id` under its current selection
    pub fn built_syntax(&self, id: &str) -> Result<String> {
        let record = self.catalog.require(id)?;
        let selection = self.selection(id);
        Ok(SyntaxBuilder::build_for(record, &selection))
    }
}
