pub mod builtin;

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::models::{CatalogError, Category, CommandRecord, Result};

static BUILT_IN_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(builtin::built_in_commands(), builtin::built_in_categories())
        .expect("built-in catalog must be valid")
});

/// Immutable collection of command records and their categories.
///
/// Category counts are always derived from the records on construction, so
/// they can never drift from the data.
#[derive(Debug, Clone)]
pub struct Catalog {
    commands: Vec<CommandRecord>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, validating id uniqueness and category references
    pub fn new(commands: Vec<CommandRecord>, mut categories: Vec<Category>) -> Result<Self> {
        let mut category_ids = HashSet::new();
        for category in &categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(CatalogError::InvalidOperation {
                    message: format!("Duplicate category id: {}", category.id),
                });
            }
        }

        let mut command_ids = HashSet::new();
        for command in &commands {
            if !command_ids.insert(command.id.as_str()) {
                return Err(CatalogError::DuplicateCommandId(command.id.clone()));
            }
            if !category_ids.contains(command.category.as_str()) {
                return Err(CatalogError::UnknownCategory {
                    command: command.id.clone(),
                    category: command.category.clone(),
                });
            }
        }

        for category in &mut categories {
            category.count = commands.iter().filter(|c| c.category == category.id).count();
        }

        tracing::debug!(
            "Catalog built with {} commands in {} categories",
            commands.len(),
            categories.len()
        );

        Ok(Self {
            commands,
            categories,
        })
    }

    /// The embedded Docker command catalog
    pub fn built_in() -> &'static Catalog {
        &BUILT_IN_CATALOG
    }

    pub fn commands(&self) -> &[CommandRecord] {
        &self.commands
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&CommandRecord> {
        self.commands.iter().find(|c| c.id == id)
    }

    /// Like [`Catalog::get`], but unknown ids are an error
    pub fn require(&self, id: &str) -> Result<&CommandRecord> {
        self.get(id)
            .ok_or_else(|| CatalogError::CommandNotFound(id.to_string()))
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn require_category(&self, id: &str) -> Result<&Category> {
        self.category(id)
            .ok_or_else(|| CatalogError::CategoryNotFound(id.to_string()))
    }

    /// Sum of all category counts
    pub fn total_commands(&self) -> usize {
        self.categories.iter().map(|c| c.count).sum()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, category: &str) -> CommandRecord {
        CommandRecord::new_built_in(id, id, "desc", "example", category, vec![])
    }

    fn categories() -> Vec<Category> {
        vec![
            Category::new("basic", "Basic", "PlayCircle", "Basic commands"),
            Category::new("images", "Images", "Package", "Image commands"),
        ]
    }

    #[test]
    fn test_counts_are_derived() {
        let catalog = Catalog::new(
            vec![record("a", "basic"), record("b", "images"), record("c", "images")],
            categories(),
        )
        .unwrap();

        assert_eq!(catalog.category("basic").unwrap().count, 1);
        assert_eq!(catalog.category("images").unwrap().count, 2);
        assert_eq!(catalog.total_commands(), 3);
    }

    #[test]
    fn test_hand_maintained_counts_are_overwritten() {
        let mut cats = categories();
        cats[0].count = 42;
        let catalog = Catalog::new(vec![record("a", "basic")], cats).unwrap();
        assert_eq!(catalog.category("basic").unwrap().count, 1);
        assert_eq!(catalog.category("images").unwrap().count, 0);
    }

    #[test]
    fn test_duplicate_command_id_rejected() {
        let err = Catalog::new(vec![record("a", "basic"), record("a", "images")], categories())
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCommandId(id) if id == "a"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = Catalog::new(vec![record("a", "swarm")], categories()).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { .. }));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let mut cats = categories();
        cats.push(Category::new("basic", "Again", "X", "dup"));
        assert!(Catalog::new(vec![], cats).is_err());
    }

    #[test]
    fn test_require_unknown_id() {
        let catalog = Catalog::new(vec![record("a", "basic")], categories()).unwrap();
        assert!(catalog.require("a").is_ok());
        assert!(matches!(
            catalog.require("zzz"),
            Err(CatalogError::CommandNotFound(_))
        ));
    }

    #[test]
    fn test_require_unknown_category() {
        let catalog = Catalog::new(vec![record("a", "basic")], categories()).unwrap();
        assert_eq!(catalog.require_category("basic").unwrap().count, 1);
        assert!(matches!(
            catalog.require_category("kubernetes"),
            Err(CatalogError::CategoryNotFound(_))
        ));
    }

    #[test]
    fn test_built_in_catalog_is_valid() {
        let catalog = Catalog::built_in();
        assert_eq!(catalog.len(), 79);
        assert_eq!(catalog.categories().len(), 15);
        assert_eq!(catalog.total_commands(), catalog.len());
        assert_eq!(catalog.category("containers").unwrap().count, 17);
        assert_eq!(catalog.category("compose").unwrap().count, 10);
        assert_eq!(catalog.category("basic").unwrap().count, 5);
    }

    #[test]
    fn test_built_in_catalog_contents() {
        let catalog = Catalog::built_in();
        let run = catalog.get("docker-run").unwrap();
        assert_eq!(run.command, "docker run");
        assert!(run.is_popular);
        assert_eq!(
            run.syntax.as_deref(),
            Some("docker run [OPTIONS] IMAGE [COMMAND] [ARG...]")
        );
        assert_eq!(run.flags.len(), 6);

        let popular = catalog.commands().iter().filter(|c| c.is_popular).count();
        assert_eq!(popular, 11);

        // Every record in the embedded data carries an explicit syntax template
        assert!(catalog.commands().iter().all(|c| c.syntax.is_some()));
    }
}
