//! Category commands

use crate::context::Context;
use anyhow::{Context as _, Result};
use owo_colors::OwoColorize;
use serde_json::json;
use sfx_cli::output::format_count;
use sfx_cli::{progress, Status};
use sfx_library::catalog::known_categories;
use sfx_library::{CategoryOutcome, LibraryError};
use sfx_search::ALL_CATEGORIES;

/// Known categories plus any used by the loaded sounds
pub async fn run(ctx: &Context) -> Result<()> {
    let mut library = ctx.load().await?;
    let known = library
        .load_categories()
        .await
        .context("Failed to load categories")?
        .to_vec();

    let in_use: Vec<String> = library
        .catalog()
        .categories()
        .into_iter()
        .filter(|c| c != ALL_CATEGORIES)
        .collect();
    let categories = known_categories(&known, &in_use);

    if ctx.is_json() {
        println!("{}", json!({ "count": categories.len(), "categories": categories }));
        return Ok(());
    }

    for category in &categories {
        let count = library
            .catalog()
            .sounds()
            .iter()
            .filter(|s| &s.category == category)
            .count();
        println!(
            "  {} {}",
            category.cyan(),
            format!("({})", format_count(count, "sound", "sounds")).dimmed()
        );
    }
    Ok(())
}

/// Add a category, optionally moving an existing sound into it
pub async fn add(ctx: &Context, name: &str, attach: Option<u32>) -> Result<()> {
    let mut library = ctx.load().await?;
    library
        .load_categories()
        .await
        .context("Failed to load categories")?;

    let mut editing = match attach {
        Some(id) => Some(
            library
                .catalog()
                .get(id)
                .cloned()
                .ok_or(LibraryError::NotFound(id))?,
        ),
        None => None,
    };

    let pb = ctx.spinner("Adding category...");
    let outcome = library.add_category(name, editing.as_mut()).await;
    progress::finish(&pb);
    let outcome = outcome?;

    if let (CategoryOutcome::Attached, Some(sound)) = (&outcome, editing) {
        library
            .save_sound(sound)
            .await
            .context("Category added but the sound could not be saved")?;
    }

    let name = name.trim();
    if ctx.is_json() {
        let outcome = match &outcome {
            CategoryOutcome::Attached => json!({ "kind": "attached", "sound": attach }),
            CategoryOutcome::Synced(placeholder) => {
                json!({ "kind": "synced", "placeholder": placeholder.id })
            }
            CategoryOutcome::LocalOnly => json!({ "kind": "local" }),
        };
        println!("{}", json!({ "status": "ok", "category": name, "outcome": outcome }));
        return Ok(());
    }

    match outcome {
        CategoryOutcome::Attached => {
            let target = attach.map(|id| format!(" and assigned to sound {id}"));
            Status::success(&format!("Category '{name}' added{}", target.unwrap_or_default()));
        }
        CategoryOutcome::Synced(placeholder) => Status::success(&format!(
            "New category '{name}' added and synced (placeholder sound {})",
            placeholder.id
        )),
        CategoryOutcome::LocalOnly => {
            if library.store().is_offline() {
                Status::success(&format!("Category '{name}' added locally"));
            } else {
                Status::warning(&format!(
                    "Category '{name}' added locally but failed to sync to the store"
                ));
            }
        }
    }
    Ok(())
}
