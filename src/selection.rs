use std::collections::HashMap;

use crate::models::SelectionState;

/// Per-card option selections keyed by command id
#[derive(Debug, Default)]
pub struct SelectionMap {
    selections: HashMap<String, SelectionState>,
}

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, command_id: &str) -> Option<&SelectionState> {
        self.selections.get(command_id)
    }

    /// The selection for a command, or an empty one if nothing was picked yet
    pub fn get_or_default(&self, command_id: &str) -> SelectionState {
        self.get(command_id).cloned().unwrap_or_default()
    }

    pub fn get_mut(&mut self, command_id: &str) -> &mut SelectionState {
        self.selections.entry(command_id.to_string()).or_default()
    }

    pub fn set(&mut self, command_id: &str, selection: SelectionState) {
        self.selections.insert(command_id.to_string(), selection);
    }

    pub fn reset(&mut self, command_id: &str) {
        self.selections.remove(command_id);
    }

    /// Switch the active card. Selections belonging to any other command are dropped.
    pub fn focus(&mut self, command_id: &str) -> &mut SelectionState {
        self.selections.retain(|id, _| id == command_id);
        self.get_mut(command_id)
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}
