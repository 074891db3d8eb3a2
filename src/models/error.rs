use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Serialize, Deserialize)]
pub enum CatalogError {
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Duplicate command id: {0}")]
    DuplicateCommandId(String),

    #[error("Command {command} references unknown category: {category}")]
    UnknownCategory { command: String, category: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid operation: {message}")]
    InvalidOperation { message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl CatalogError {
    /// Check if the failure came from a best-effort side channel (storage or clipboard)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CatalogError::Storage { .. } | CatalogError::Clipboard(_)
        )
    }

    /// Get a suggestion for recovering from this error
    pub fn recovery_suggestion(&self) -> &str {
        match self {
            CatalogError::CommandNotFound(_) => "Run `dockref list` to see available command ids",
            CatalogError::CategoryNotFound(_) => {
                "Run `dockref categories` to see available categories"
            }
            CatalogError::DuplicateCommandId(_) => "Give every catalog entry a unique id",
            CatalogError::UnknownCategory { .. } => "Add the category to the catalog first",
            CatalogError::Storage { .. } => "Check that the data directory is writable",
            CatalogError::Serialization(_) => "Check that the input is a JSON array of strings",
            CatalogError::Clipboard(_) => {
                "Install pbcopy, wl-copy, xclip or xsel to enable copying"
            }
            CatalogError::InvalidConfiguration(_) => "Review the command-line options",
            CatalogError::InvalidOperation { .. } => "This operation is not allowed",
            CatalogError::Io(_) => "Check the file path and permissions",
        }
    }
}

impl From<rusqlite::Error> for CatalogError {
    fn from(e: rusqlite::Error) -> Self {
        CatalogError::Storage {
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
