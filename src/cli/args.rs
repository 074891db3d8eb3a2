//! Command-line argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Searchable Docker command reference with favorites and a syntax builder
#[derive(Parser, Debug)]
#[command(name = "dockref")]
#[command(version)]
#[command(about = "Searchable Docker command reference with favorites and a syntax builder", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the favorites database (overrides DOCKREF_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep favorites in memory only for this run
    #[arg(long, global = true)]
    pub no_persist: bool,

    /// Log filter, e.g. `debug` or `dockref=trace` (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List commands, optionally filtered
    List {
        /// Search text (at least two characters to filter)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Restrict to a category (can be specified multiple times)
        #[arg(short, long = "category", value_name = "CATEGORY")]
        categories: Vec<String>,

        /// Only show favorites
        #[arg(short, long)]
        favorites: bool,

        /// Only show popular commands
        #[arg(short, long)]
        popular: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List categories with command counts
    Categories {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the full card for one command
    Show {
        /// Command id, e.g. docker-run
        id: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Build a command's syntax from selected options
    Syntax {
        /// Command id, e.g. docker-run
        id: String,

        /// Flag to include (can be specified multiple times)
        #[arg(short, long = "flag", value_name = "FLAG", allow_hyphen_values = true)]
        flags: Vec<String>,

        /// Image reference substituted for IMAGE
        #[arg(short, long)]
        image: Option<String>,

        /// Sub-command substituted for [COMMAND]
        #[arg(short = 'x', long = "command", value_name = "COMMAND")]
        sub_command: Option<String>,

        /// Also copy the result to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Copy a command's example (or bare syntax) to the clipboard
    Copy {
        /// Command id, e.g. docker-run
        id: String,

        /// Copy the syntax template instead of the example
        #[arg(long)]
        syntax: bool,
    },

    /// Manage favorites
    #[command(subcommand)]
    Fav(FavCommands),
}

#[derive(Subcommand, Debug)]
pub enum FavCommands {
    /// Toggle a command in or out of favorites
    Toggle { id: String },

    /// Add a command to favorites
    Add { id: String },

    /// Remove a command from favorites
    Remove { id: String },

    /// List favorites
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Remove all favorites
    Clear,

    /// Print favorites as a JSON array
    Export,

    /// Replace favorites with a JSON array read from a file (`-` for stdin)
    Import { file: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_list_filters() {
        let args = Args::parse_from([
            "dockref", "list", "--search", "net", "-c", "network", "-c", "images", "--popular",
        ]);
        match args.command {
            Some(Commands::List {
                search,
                categories,
                favorites,
                popular,
                json,
            }) => {
                assert_eq!(search, "net");
                assert_eq!(categories, vec!["network", "images"]);
                assert!(!favorites);
                assert!(popular);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_syntax_with_hyphen_flags() {
        let args = Args::parse_from([
            "dockref", "syntax", "docker-run", "--flag", "-d", "--flag", "--rm", "--image", "nginx",
        ]);
        match args.command {
            Some(Commands::Syntax { id, flags, image, sub_command, copy }) => {
                assert_eq!(id, "docker-run");
                assert_eq!(flags, vec!["-d", "--rm"]);
                assert_eq!(image.as_deref(), Some("nginx"));
                assert!(sub_command.is_none());
                assert!(!copy);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_options_after_subcommand() {
        let args = Args::parse_from(["dockref", "fav", "list", "--no-persist", "--data-dir", "/tmp/x"]);
        assert!(args.no_persist);
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(args.command, Some(Commands::Fav(FavCommands::List { json: false }))));
    }
}
