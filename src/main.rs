//! dockref - CLI entry point
//!
//! Thin wrapper around the library: parses arguments, sets up logging,
//! opens the session and dispatches to the command layer.

mod cli;

use clap::Parser;
use std::io::Read;
use std::path::Path;

use cli::{output, Args, Commands, FavCommands};
use dockref_lib::clipboard::{CopyIndicator, SystemClipboard};
use dockref_lib::commands::{self, CopyTarget};
use dockref_lib::config::AppConfig;
use dockref_lib::models::{CatalogError, FilterState, SelectionState};
use dockref_lib::{init_logging, open_session, AppState};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = AppConfig::from_env().with_overrides(
        args.data_dir.clone(),
        args.no_persist,
        args.log_level.clone(),
    );
    init_logging(config.effective_log_filter());

    let state = open_session(&config);

    if let Err(e) = run(&state, args.command).await {
        eprintln!("Error: {}", e);
        eprintln!("{}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

async fn run(state: &AppState, command: Option<Commands>) -> Result<(), CatalogError> {
    let command = command.unwrap_or(Commands::List {
        search: String::new(),
        categories: Vec::new(),
        favorites: false,
        popular: false,
        json: false,
    });

    match command {
        Commands::List {
            search,
            categories,
            favorites,
            popular,
            json,
        } => {
            for category in &categories {
                state.catalog().require_category(category)?;
            }

            let filter = FilterState {
                search_term: search,
                active_categories: categories.into_iter().collect(),
                show_favorites: favorites,
                show_popular_only: popular,
            };
            let listing = commands::filter_commands(state, filter);
            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                print!("{}", output::render_listing(&listing, &state.favorites()));
            }
        }

        Commands::Categories { json } => {
            let categories = commands::list_categories(state);
            if json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
            } else {
                print!("{}", output::render_categories(&categories));
            }
        }

        Commands::Show { id, json } => {
            let card = commands::get_command(state, &id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&card)?);
            } else {
                print!("{}", output::render_card(&card));
            }
        }

        Commands::Syntax {
            id,
            flags,
            image,
            sub_command,
            copy,
        } => {
            let mut selection = SelectionState::default();
            for flag in &flags {
                selection.select_flag(flag);
            }
            selection.set_image(image);
            selection.set_command(sub_command);

            let built = commands::build_command_syntax(state, &id, selection)?;
            println!("{}", built);

            if copy {
                copy_and_report(state, &id, CopyTarget::Syntax).await?;
            }
        }

        Commands::Copy { id, syntax } => {
            let target = if syntax {
                CopyTarget::Syntax
            } else {
                CopyTarget::Example
            };
            copy_and_report(state, &id, target).await?;
        }

        Commands::Fav(fav) => run_fav(state, fav)?,
    }

    Ok(())
}

fn run_fav(state: &AppState, command: FavCommands) -> Result<(), CatalogError> {
    match command {
        FavCommands::Toggle { id } => {
            state.catalog().require(&id)?;
            let favorites = commands::toggle_favorite(state, &id);
            if favorites.contains(&id) {
                println!("Added {} to favorites", id);
            } else {
                println!("Removed {} from favorites", id);
            }
        }
        FavCommands::Add { id } => {
            state.catalog().require(&id)?;
            commands::add_favorite(state, &id);
            println!("Added {} to favorites", id);
        }
        FavCommands::Remove { id } => {
            commands::remove_favorite(state, &id);
            println!("Removed {} from favorites", id);
        }
        FavCommands::List { json } => {
            let favorites = commands::list_favorites(state);
            if json {
                println!("{}", favorites.to_json()?);
            } else {
                print!("{}", output::render_favorites(&favorites));
            }
        }
        FavCommands::Clear => {
            commands::clear_favorites(state);
            println!("Cleared all favorites");
        }
        FavCommands::Export => {
            println!("{}", commands::export_favorites(state));
        }
        FavCommands::Import { file } => {
            let json = read_input(&file)?;
            let favorites = commands::import_favorites(state, &json)?;
            println!("Imported {} favorites", favorites.len());
        }
    }

    Ok(())
}

async fn copy_and_report(
    state: &AppState,
    id: &str,
    target: CopyTarget,
) -> Result<(), CatalogError> {
    let sink = SystemClipboard::new();
    let indicator = CopyIndicator::new();

    if commands::copy_command(state, &sink, &indicator, id, target).await? {
        eprintln!("Copied!");
        Ok(())
    } else {
        Err(CatalogError::Clipboard(
            "no clipboard tool accepted the text".to_string(),
        ))
    }
}

fn read_input(path: &Path) -> Result<String, CatalogError> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
