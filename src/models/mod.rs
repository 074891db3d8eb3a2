pub mod command;
pub mod error;
pub mod filter;

pub use command::{Category, CommandRecord, FlagInfo};
pub use error::{CatalogError, Result};
pub use filter::{FilterState, SelectionState};
