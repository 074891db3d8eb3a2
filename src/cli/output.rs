//! Plain-text rendering for terminal output

use std::fmt::Write;

use dockref_lib::commands::{CommandCard, CommandListing};
use dockref_lib::favorites::FavoritesSet;
use dockref_lib::models::Category;
use dockref_lib::query::QueryOutcome;

pub fn render_listing(listing: &CommandListing, favorites: &FavoritesSet) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", listing.heading);
    let _ = writeln!(out, "{}", listing.summary);
    let _ = writeln!(out);

    match listing.outcome {
        QueryOutcome::KeepTyping => {
            let _ = writeln!(out, "Keep typing... (search needs at least 2 characters)");
        }
        QueryOutcome::NoMatches => {
            let _ = writeln!(out, "No commands found.");
            let _ = writeln!(out, "Try adjusting your search terms or filters");
            return out;
        }
        QueryOutcome::Results => {}
    }

    let width = listing
        .commands
        .iter()
        .map(|c| c.id.len())
        .max()
        .unwrap_or(0);

    for command in &listing.commands {
        let star = if favorites.contains(&command.id) { "*" } else { " " };
        let popular = if command.is_popular { " [popular]" } else { "" };
        let _ = writeln!(
            out,
            "{} {:<width$}  {}{}",
            star,
            command.id,
            command.description,
            popular,
            width = width
        );
    }

    out
}

pub fn render_categories(categories: &[Category]) -> String {
    let mut out = String::new();
    let total: usize = categories.iter().map(|c| c.count).sum();
    let _ = writeln!(out, "All Commands ({})", total);

    for category in categories {
        let _ = writeln!(
            out,
            "  {:<12} {:<22} {:>3}  {}",
            category.id, category.name, category.count, category.description
        );
    }

    out
}

pub fn render_card(card: &CommandCard) -> String {
    let command = &card.command;
    let mut out = String::new();

    let star = if card.is_favorite { " *" } else { "" };
    let _ = writeln!(out, "{}{}", command.command, star);
    let _ = writeln!(out, "{}", command.description);
    let _ = writeln!(out, "Category: {}", card.category_name);
    if !command.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", command.tags.join(", "));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Example:");
    let _ = writeln!(out, "  {}", command.example);
    let _ = writeln!(out);
    let _ = writeln!(out, "Syntax:");
    let _ = writeln!(out, "  {}", card.syntax);

    if !command.flags.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Common Options:");
        let width = command.flags.iter().map(|f| f.flag.len()).max().unwrap_or(0);
        for flag in &command.flags {
            let _ = writeln!(
                out,
                "  {:<width$}  {}",
                flag.flag,
                flag.description,
                width = width
            );
        }
    }

    out
}

pub fn render_favorites(favorites: &FavoritesSet) -> String {
    if favorites.is_empty() {
        return "No favorites yet.\n".to_string();
    }

    let mut out = String::new();
    for id in favorites.iter() {
        let _ = writeln!(out, "{}", id);
    }
    out
}
