use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Session-only filter state driving the query engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub active_categories: BTreeSet<String>,
    #[serde(default)]
    pub show_favorites: bool,
    #[serde(default)]
    pub show_popular_only: bool,
}

impl FilterState {
    /// Toggle a category in or out of the active set; `None` clears every category
    pub fn toggle_category(&mut self, category_id: Option<&str>) {
        match category_id {
            None => self.active_categories.clear(),
            Some(id) => {
                if !self.active_categories.remove(id) {
                    self.active_categories.insert(id.to_string());
                }
            }
        }
    }

    /// True when no stage of the query engine would narrow the catalog
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.chars().count() < 2
            && self.active_categories.is_empty()
            && !self.show_favorites
            && !self.show_popular_only
    }
}

/// Per-command option selections for the syntax builder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    /// Selected flags in the order they were picked, without duplicates
    #[serde(default)]
    pub selected_flags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_image: Option<String>,
}

impl SelectionState {
    /// Select a flag, or deselect it if already selected. Returns whether it is now selected.
    pub fn toggle_flag(&mut self, flag: &str) -> bool {
        if let Some(pos) = self.selected_flags.iter().position(|f| f == flag) {
            self.selected_flags.remove(pos);
            false
        } else {
            self.selected_flags.push(flag.to_string());
            true
        }
    }

    pub fn select_flag(&mut self, flag: &str) {
        if !self.selected_flags.iter().any(|f| f == flag) {
            self.selected_flags.push(flag.to_string());
        }
    }

    pub fn set_image(&mut self, image: Option<String>) {
        self.selected_image = image.filter(|s| !s.is_empty());
    }

    pub fn set_command(&mut self, command: Option<String>) {
        self.selected_command = command.filter(|s| !s.is_empty());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.selected_flags.is_empty()
            && self.selected_command.is_none()
            && self.selected_image.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_state_defaults() {
        let state = FilterState::default();
        assert!(state.search_term.is_empty());
        assert!(state.active_categories.is_empty());
        assert!(!state.show_favorites);
        assert!(!state.show_popular_only);
        assert!(state.is_unfiltered());
    }

    #[test]
    fn test_toggle_category_adds_and_removes() {
        let mut state = FilterState::default();
        state.toggle_category(Some("images"));
        state.toggle_category(Some("network"));
        assert_eq!(state.active_categories.len(), 2);

        state.toggle_category(Some("images"));
        assert!(!state.active_categories.contains("images"));
        assert!(state.active_categories.contains("network"));

        state.toggle_category(None);
        assert!(state.active_categories.is_empty());
    }

    #[test]
    fn test_single_character_search_is_unfiltered() {
        let state = FilterState {
            search_term: "d".to_string(),
            ..Default::default()
        };
        assert!(state.is_unfiltered());

        let state = FilterState {
            search_term: "do".to_string(),
            ..Default::default()
        };
        assert!(!state.is_unfiltered());
    }

    #[test]
    fn test_toggle_flag_preserves_order_and_dedupes() {
        let mut selection = SelectionState::default();
        assert!(selection.toggle_flag("-d"));
        assert!(selection.toggle_flag("-p"));
        selection.select_flag("-d");
        assert_eq!(selection.selected_flags, vec!["-d", "-p"]);

        assert!(!selection.toggle_flag("-d"));
        assert_eq!(selection.selected_flags, vec!["-p"]);
    }

    #[test]
    fn test_empty_strings_clear_image_and_command() {
        let mut selection = SelectionState::default();
        selection.set_image(Some("nginx".to_string()));
        selection.set_command(Some("bash".to_string()));
        assert!(!selection.is_empty());

        selection.set_image(Some(String::new()));
        selection.set_command(None);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut selection = SelectionState::default();
        selection.select_flag("--rm");
        selection.set_image(Some("redis".to_string()));
        selection.clear();
        assert_eq!(selection, SelectionState::default());
    }
}
