//! List and show commands

use super::{print_sounds, sound_json, unscored};
use crate::context::Context;
use anyhow::Result;
use owo_colors::OwoColorize;
use sfx_cli::output::swatch;
use sfx_cli::Status;
use sfx_library::LibraryError;
use sfx_search::SearchQuery;

/// All sounds in display order, optionally one category
pub async fn run(ctx: &Context, category: Option<&str>) -> Result<()> {
    let library = ctx.load().await?;
    let query = SearchQuery::default().in_category(category);
    let sounds = library.search(&query);
    print_sounds(ctx.is_json(), &library, &unscored(&sounds));
    Ok(())
}

/// One sound in detail
pub async fn show(ctx: &Context, id: u32) -> Result<()> {
    let library = ctx.load().await?;
    let sound = library
        .catalog()
        .get(id)
        .ok_or(LibraryError::NotFound(id))?;

    if ctx.is_json() {
        println!("{}", sound_json(&library, sound, None));
        return Ok(());
    }

    Status::header(&sound.name);
    println!("  {:<12} {}", "Id:".dimmed(), sound.id);
    println!("  {:<12} {}", "Category:".dimmed(), sound.category.cyan());
    println!("  {:<12} {}", "File:".dimmed(), sound.file);
    if !sound.description.is_empty() {
        println!("  {:<12} {}", "Description:".dimmed(), sound.description);
    }
    println!(
        "  {:<12} {} {} {}",
        "Icon:".dimmed(),
        swatch(sound.icon.color.as_deref()),
        sound.icon.kind,
        sound.icon.color.as_deref().unwrap_or("").dimmed(),
    );
    println!(
        "  {:<12} {}",
        "Built-in:".dimmed(),
        if library.catalog().is_builtin(id) { "yes" } else { "no" }
    );
    if library.favorites().contains(id) {
        println!("  {:<12} {}", "Favorite:".dimmed(), "★".yellow());
    }
    Ok(())
}
