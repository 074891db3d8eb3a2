//! Query engine: computes the visible subset of the catalog.
//!
//! Every function here is pure. Stages only ever narrow the previous stage's
//! result, and surviving records keep their catalog order.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::favorites::FavoritesSet;
use crate::models::{CommandRecord, FilterState};

/// Search terms shorter than this (in characters) do not filter
pub const MIN_SEARCH_LEN: usize = 2;

/// How the caller should present a query result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryOutcome {
    /// Exactly one character typed: not yet a query
    KeepTyping,
    /// A real query that matched nothing
    NoMatches,
    Results,
}

/// Apply the search, category, favorites and popular stages in that order
pub fn filter<'a>(
    catalog: &'a Catalog,
    state: &FilterState,
    favorites: &FavoritesSet,
) -> Vec<&'a CommandRecord> {
    let mut commands: Vec<&CommandRecord> = if is_active_search(&state.search_term) {
        search(catalog, &state.search_term)
    } else {
        catalog.commands().iter().collect()
    };

    if !state.active_categories.is_empty() {
        commands.retain(|c| state.active_categories.contains(&c.category));
    }

    if state.show_favorites {
        commands.retain(|c| favorites.contains(&c.id));
    }

    if state.show_popular_only {
        commands.retain(|c| c.is_popular);
    }

    commands
}

fn is_active_search(term: &str) -> bool {
    term.chars().count() >= MIN_SEARCH_LEN
}

/// Case-insensitive substring search over command, description, tags and example.
///
/// An empty term returns the whole catalog. Unlike [`filter`], this applies no
/// minimum length.
pub fn search<'a>(catalog: &'a Catalog, term: &str) -> Vec<&'a CommandRecord> {
    if term.is_empty() {
        return catalog.commands().iter().collect();
    }

    let term = term.to_lowercase();
    catalog
        .commands()
        .iter()
        .filter(|c| matches_search(c, &term))
        .collect()
}

/// `term` must already be lowercased
fn matches_search(command: &CommandRecord, term: &str) -> bool {
    command.command.to_lowercase().contains(term)
        || command.description.to_lowercase().contains(term)
        || command.tags.iter().any(|t| t.to_lowercase().contains(term))
        || command.example.to_lowercase().contains(term)
}

pub fn by_category<'a>(catalog: &'a Catalog, category_id: &str) -> Vec<&'a CommandRecord> {
    catalog
        .commands()
        .iter()
        .filter(|c| c.category == category_id)
        .collect()
}

pub fn popular(catalog: &Catalog) -> Vec<&CommandRecord> {
    catalog.commands().iter().filter(|c| c.is_popular).collect()
}

/// Classify a result so "keep typing" and "no matches" can be told apart
pub fn classify(state: &FilterState, result_count: usize) -> QueryOutcome {
    if state.search_term.chars().count() == 1 {
        QueryOutcome::KeepTyping
    } else if result_count == 0 {
        QueryOutcome::NoMatches
    } else {
        QueryOutcome::Results
    }
}

/// Title shown above the results grid
pub fn results_heading(state: &FilterState, catalog: &Catalog) -> String {
    match state.active_categories.len() {
        1 => state
            .active_categories
            .iter()
            .next()
            .map(|id| catalog.category(id).map_or_else(|| id.clone(), |c| c.name.clone()))
            .unwrap_or_default(),
        n if n > 1 => format!("{} Categories Selected", n),
        _ if state.show_favorites => "Favorite Commands".to_string(),
        _ if state.show_popular_only => "Popular Commands".to_string(),
        _ => "All Docker Commands".to_string(),
    }
}

pub fn results_summary(count: usize) -> String {
    format!(
        "{} command{} available",
        count,
        if count == 1 { "" } else { "s" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn record(id: &str, category: &str, tags: Vec<&str>, popular: bool) -> CommandRecord {
        let record = CommandRecord::new_built_in(
            id,
            &format!("docker {}", id),
            &format!("{} description", id),
            &format!("docker {} --example", id),
            category,
            tags,
        );
        if popular {
            record.popular()
        } else {
            record
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                record("run", "basic", vec!["container", "start"], true),
                record("pull", "images", vec!["download", "Registry"], true),
                record("connect", "network", vec!["network"], false),
                record("build", "images", vec!["dockerfile"], false),
                record("volume", "volumes", vec!["storage"], false),
            ],
            vec![
                Category::new("basic", "Basic Commands", "PlayCircle", ""),
                Category::new("images", "Image Management", "Package", ""),
                Category::new("network", "Network Commands", "Network", ""),
                Category::new("volumes", "Volume Commands", "HardDrive", ""),
            ],
        )
        .unwrap()
    }

    fn ids(records: &[&CommandRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    fn with_search(term: &str) -> FilterState {
        FilterState {
            search_term: term.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_and_single_char_search_return_everything() {
        let catalog = catalog();
        let favorites = FavoritesSet::new();
        let all = filter(&catalog, &FilterState::default(), &favorites);
        assert_eq!(all.len(), 5);

        let one = filter(&catalog, &with_search("z"), &favorites);
        assert_eq!(ids(&one), ids(&all));
    }

    #[test]
    fn test_search_matches_tags() {
        let catalog = Catalog::new(
            vec![
                CommandRecord::new_built_in("a", "x", "x", "x", "basic", vec!["container"]),
                CommandRecord::new_built_in("b", "y", "y", "y", "basic", vec!["image"]),
            ],
            vec![Category::new("basic", "Basic", "", "")],
        )
        .unwrap();

        let result = filter(&catalog, &with_search("cont"), &FavoritesSet::new());
        assert_eq!(ids(&result), vec!["a"]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let catalog = catalog();
        let favorites = FavoritesSet::new();

        // tag with uppercase letters
        assert_eq!(ids(&filter(&catalog, &with_search("registry"), &favorites)), vec!["pull"]);
        // command name, uppercase term
        assert_eq!(ids(&filter(&catalog, &with_search("DOCKER BUILD"), &favorites)), vec!["build"]);
        // description
        assert_eq!(ids(&filter(&catalog, &with_search("volume desc"), &favorites)), vec!["volume"]);
        // example
        assert_eq!(filter(&catalog, &with_search("--example"), &favorites).len(), 5);
    }

    #[test]
    fn test_category_stage_is_union_in_catalog_order() {
        let catalog = catalog();
        let mut state = FilterState::default();
        state.toggle_category(Some("network"));
        state.toggle_category(Some("images"));

        let result = filter(&catalog, &state, &FavoritesSet::new());
        assert_eq!(ids(&result), vec!["pull", "connect", "build"]);
    }

    #[test]
    fn test_favorites_stage() {
        let catalog = catalog();
        let favorites = FavoritesSet::from_ids(["build", "run", "ghost"]);
        let state = FilterState {
            show_favorites: true,
            ..Default::default()
        };

        assert_eq!(ids(&filter(&catalog, &state, &favorites)), vec!["run", "build"]);
    }

    #[test]
    fn test_popular_stage() {
        let catalog = catalog();
        let state = FilterState {
            show_popular_only: true,
            ..Default::default()
        };
        assert_eq!(ids(&filter(&catalog, &state, &FavoritesSet::new())), vec!["run", "pull"]);
    }

    #[test]
    fn test_stages_intersect() {
        let catalog = catalog();
        let favorites = FavoritesSet::from_ids(["pull", "build", "run"]);
        let mut state = FilterState {
            search_term: "docker".to_string(),
            show_favorites: true,
            show_popular_only: true,
            ..Default::default()
        };
        state.toggle_category(Some("images"));

        assert_eq!(ids(&filter(&catalog, &state, &favorites)), vec!["pull"]);
    }

    #[test]
    fn test_result_is_always_subsequence_of_catalog() {
        let catalog = catalog();
        let favorites = FavoritesSet::from_ids(["connect", "run"]);
        let terms = ["", "d", "do", "net", "zzz"];

        for term in terms {
            for show_favorites in [false, true] {
                for show_popular_only in [false, true] {
                    let state = FilterState {
                        search_term: term.to_string(),
                        show_favorites,
                        show_popular_only,
                        ..Default::default()
                    };
                    let result = filter(&catalog, &state, &favorites);
                    let positions: Vec<usize> = result
                        .iter()
                        .map(|r| catalog.commands().iter().position(|c| c.id == r.id).unwrap())
                        .collect();
                    assert!(positions.windows(2).all(|w| w[0] < w[1]));
                }
            }
        }
    }

    #[test]
    fn test_search_helper_has_no_minimum_length() {
        let catalog = catalog();
        assert_eq!(search(&catalog, "").len(), 5);
        assert_eq!(ids(&search(&catalog, "v")), vec!["volume"]);
    }

    #[test]
    fn test_by_category_and_popular() {
        let catalog = catalog();
        assert_eq!(ids(&by_category(&catalog, "images")), vec!["pull", "build"]);
        assert!(by_category(&catalog, "swarm").is_empty());
        assert_eq!(ids(&popular(&catalog)), vec!["run", "pull"]);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(&with_search("d"), 5), QueryOutcome::KeepTyping);
        assert_eq!(classify(&with_search("zz"), 0), QueryOutcome::NoMatches);
        assert_eq!(classify(&with_search(""), 0), QueryOutcome::NoMatches);
        assert_eq!(classify(&with_search("do"), 3), QueryOutcome::Results);
    }

    #[test]
    fn test_results_heading() {
        let catalog = catalog();
        let mut state = FilterState::default();
        assert_eq!(results_heading(&state, &catalog), "All Docker Commands");

        state.show_popular_only = true;
        assert_eq!(results_heading(&state, &catalog), "Popular Commands");

        state.show_favorites = true;
        assert_eq!(results_heading(&state, &catalog), "Favorite Commands");

        state.toggle_category(Some("images"));
        assert_eq!(results_heading(&state, &catalog), "Image Management");

        state.toggle_category(Some("basic"));
        assert_eq!(results_heading(&state, &catalog), "2 Categories Selected");
    }

    #[test]
    fn test_results_summary_pluralizes() {
        assert_eq!(results_summary(0), "0 commands available");
        assert_eq!(results_summary(1), "1 command available");
        assert_eq!(results_summary(79), "79 commands available");
    }

    #[test]
    fn test_built_in_search_for_nginx() {
        let catalog = Catalog::built_in();
        let result = filter(catalog, &with_search("nginx"), &FavoritesSet::new());
        assert!(result.iter().any(|r| r.id == "docker-run"));
    }
}
