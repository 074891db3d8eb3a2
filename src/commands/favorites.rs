use crate::favorites::FavoritesSet;
use crate::models::error::CatalogError;
use crate::state::AppState;

/// Toggle the favorite status of a command. Unknown ids are stored as-is.
pub fn toggle_favorite(state: &AppState, id: &str) -> FavoritesSet {
    state.toggle_favorite(id)
}

/// Add a command to favorites
pub fn add_favorite(state: &AppState, id: &str) -> FavoritesSet {
    state.add_favorite(id)
}

/// Remove a command from favorites
pub fn remove_favorite(state: &AppState, id: &str) -> FavoritesSet {
    state.remove_favorite(id)
}

/// List the current favorites
pub fn list_favorites(state: &AppState) -> FavoritesSet {
    state.favorites()
}

/// Remove every favorite
pub fn clear_favorites(state: &AppState) {
    state.clear_favorites();
}

/// Export favorites as a pretty-printed JSON array
pub fn export_favorites(state: &AppState) -> String {
    state.export_favorites()
}

/// Replace favorites with the ids in a JSON array of strings
pub fn import_favorites(state: &AppState, json: &str) -> Result<FavoritesSet, CatalogError> {
    if state.import_favorites(json) {
        Ok(state.favorites())
    } else {
        Err(CatalogError::Serialization(
            "favorites must be a JSON array of strings".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::favorites::FavoritesStore;

    fn state() -> AppState {
        AppState::new(Catalog::built_in(), FavoritesStore::in_memory())
    }

    #[test]
    fn test_toggle_twice_restores() {
        let state = state();
        add_favorite(&state, "docker-ps");
        let before = list_favorites(&state);

        toggle_favorite(&state, "docker-run");
        toggle_favorite(&state, "docker-run");
        assert_eq!(list_favorites(&state), before);
    }

    #[test]
    fn test_remove_and_clear() {
        let state = state();
        add_favorite(&state, "a");
        add_favorite(&state, "b");
        assert_eq!(remove_favorite(&state, "a").len(), 1);

        clear_favorites(&state);
        assert!(list_favorites(&state).is_empty());
    }

    #[test]
    fn test_export_then_import() {
        let source = state();
        add_favorite(&source, "docker-run");
        add_favorite(&source, "docker-logs");
        let exported = export_favorites(&source);

        let target = state();
        let imported = import_favorites(&target, &exported).unwrap();
        assert_eq!(imported, FavoritesSet::from_ids(["docker-logs", "docker-run"]));
    }

    #[test]
    fn test_import_rejects_invalid_json() {
        let state = state();
        assert!(matches!(
            import_favorites(&state, "[1, 2]"),
            Err(CatalogError::Serialization(_))
        ));
    }
}
