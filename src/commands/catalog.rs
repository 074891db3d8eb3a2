use serde::{Deserialize, Serialize};

use crate::models::command::{Category, CommandRecord};
use crate::models::error::CatalogError;
use crate::models::filter::FilterState;
use crate::query::{self, QueryOutcome};
use crate::state::AppState;

/// Everything the results grid needs for one filter state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandListing {
    pub outcome: QueryOutcome,
    pub heading: String,
    pub summary: String,
    pub commands: Vec<CommandRecord>,
}

/// A single card with the session's view of it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandCard {
    pub command: CommandRecord,
    pub category_name: String,
    pub is_favorite: bool,
    pub syntax: String,
}

/// Apply a filter state and return the visible commands.
///
/// Every filter state is valid: category ids outside the catalog simply
/// match nothing.
pub fn filter_commands(state: &AppState, filter: FilterState) -> CommandListing {
    for category in &filter.active_categories {
        if state.catalog().category(category).is_none() {
            tracing::debug!("Filtering on unknown category {}", category);
        }
    }

    state.set_filter_state(filter.clone());
    let commands: Vec<CommandRecord> = state.visible_commands().into_iter().cloned().collect();

    tracing::debug!(
        "Filter {:?} matched {} commands",
        filter.search_term,
        commands.len()
    );

    CommandListing {
        outcome: query::classify(&filter, commands.len()),
        heading: query::results_heading(&filter, state.catalog()),
        summary: query::results_summary(commands.len()),
        commands,
    }
}

/// List all categories with their derived counts
pub fn list_categories(state: &AppState) -> Vec<Category> {
    state.catalog().categories().to_vec()
}

/// Get a single command card by ID
pub fn get_command(state: &AppState, id: &str) -> Result<CommandCard, CatalogError> {
    let command = state.catalog().require(id)?;
    let category_name = state
        .catalog()
        .category(&command.category)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| command.category.clone());

    Ok(CommandCard {
        command: command.clone(),
        category_name,
        is_favorite: state.is_favorite(id),
        syntax: state.built_syntax(id)?,
    })
}
