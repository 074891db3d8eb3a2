//! Favorited command ids, persisted through an injected key-value backend.
//!
//! Persistence is best-effort: a missing backend loads as an empty set, and
//! backend failures are logged and swallowed. Mutations work on the caller's
//! current set, so the in-memory result is always correct.

pub mod backend;

pub use backend::{KeyValueStore, MemoryStore, SqliteStore};

use serde::{Deserialize, Serialize};

use crate::models::{CatalogError, Result};

/// Storage key holding the JSON array of favorited ids
pub const FAVORITES_STORAGE_KEY: &str = "docker-cheat-sheet-favorites";

/// Ordered, duplicate-free set of command ids.
///
/// Equality ignores order: two sets are equal when they hold the same ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesSet {
    ids: Vec<String>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set, dropping repeated ids after their first occurrence
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for id in ids {
            set.insert(id.into());
        }
        set
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// Returns true if the id was newly added
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Returns true if the id was present
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|i| i != id);
        self.ids.len() < before
    }

    /// Remove the id if present, otherwise add it. Returns whether it is now a favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Consuming variant of [`FavoritesSet::toggle`]
    pub fn toggled(mut self, id: &str) -> Self {
        self.toggle(id);
        self
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }

    /// Parse a stored value. Anything other than a JSON array of strings is rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let ids: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::from_ids(ids))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.ids)?)
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }
}

impl PartialEq for FavoritesSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|id| other.contains(id))
    }
}

impl Eq for FavoritesSet {}

/// Load/save/toggle triad over a [`KeyValueStore`]
pub struct FavoritesStore {
    backend: Option<Box<dyn KeyValueStore>>,
}

impl FavoritesStore {
    pub fn new(backend: Option<Box<dyn KeyValueStore>>) -> Self {
        Self { backend }
    }

    /// A store with no persistence backend: always empty, writes are skipped
    pub fn unavailable() -> Self {
        Self::new(None)
    }

    pub fn in_memory() -> Self {
        Self::new(Some(Box::new(MemoryStore::new())))
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    pub fn load(&self) -> FavoritesSet {
        let Some(backend) = &self.backend else {
            return FavoritesSet::new();
        };

        match backend.get(FAVORITES_STORAGE_KEY) {
            Ok(Some(json)) => FavoritesSet::from_json(&json).unwrap_or_else(|e| {
                tracing::error!("Error reading favorites from storage: {}", e);
                FavoritesSet::new()
            }),
            Ok(None) => FavoritesSet::new(),
            Err(e) => {
                tracing::error!("Error reading favorites from storage: {}", e);
                FavoritesSet::new()
            }
        }
    }

    /// Persist the set. Failures are logged, never returned.
    pub fn save(&self, favorites: &FavoritesSet) {
        let Some(backend) = &self.backend else {
            return;
        };

        let result = favorites
            .to_json()
            .and_then(|json| backend.set(FAVORITES_STORAGE_KEY, &json));

        if let Err(e) = result {
            tracing::error!("Error saving favorites to storage: {}", e);
        }
    }

    /// Add `id` to `current` and persist the result
    pub fn add(&self, current: &FavoritesSet, id: &str) -> FavoritesSet {
        let mut favorites = current.clone();
        if favorites.insert(id) {
            self.save(&favorites);
        }
        favorites
    }

    /// Remove `id` from `current` and persist the result
    pub fn remove(&self, current: &FavoritesSet, id: &str) -> FavoritesSet {
        let mut favorites = current.clone();
        if favorites.remove(id) {
            self.save(&favorites);
        }
        favorites
    }

    /// Flip membership of `id` in `current` and persist the result.
    ///
    /// No catalog validation is performed. The returned set is correct even
    /// when the write is skipped or fails.
    pub fn toggle(&self, current: &FavoritesSet, id: &str) -> FavoritesSet {
        let favorites = current.clone().toggled(id);
        self.save(&favorites);
        favorites
    }

    pub fn contains(&self, id: &str) -> bool {
        self.load().contains(id)
    }

    pub fn clear(&self) {
        let Some(backend) = &self.backend else {
            return;
        };

        if let Err(e) = backend.remove(FAVORITES_STORAGE_KEY) {
            tracing::error!("Error clearing favorites from storage: {}", e);
        }
    }

    /// Pretty-printed JSON array of the stored ids
    pub fn export(&self) -> String {
        self.load().to_pretty_json()
    }

    /// Replace the stored set with a JSON array of strings.
    ///
    /// Returns false, leaving storage untouched, for any other input.
    pub fn import(&self, json: &str) -> bool {
        self.import_set(json).is_some()
    }

    /// Like [`FavoritesStore::import`], handing back the accepted set
    pub fn import_set(&self, json: &str) -> Option<FavoritesSet> {
        match parse_import(json) {
            Ok(favorites) => {
                self.save(&favorites);
                Some(favorites)
            }
            Err(e) => {
                tracing::warn!("Error importing favorites: {}", e);
                None
            }
        }
    }
}

fn parse_import(json: &str) -> Result<FavoritesSet> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let items = value
        .as_array()
        .ok_or_else(|| CatalogError::Serialization("expected a JSON array".to_string()))?;

    let ids = items
        .iter()
        .map(|item| {
            item.as_str().map(String::from).ok_or_else(|| {
                CatalogError::Serialization(format!("expected string id, got {}", item))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(FavoritesSet::from_ids(ids))
}
