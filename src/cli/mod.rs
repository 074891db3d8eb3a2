//! Command-line interface for the reference catalog

pub mod args;
pub mod output;

pub use args::{Args, Commands, FavCommands};
