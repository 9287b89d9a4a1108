//! Export and import commands

use crate::context::Context;
use anyhow::{Context as _, Result};
use serde_json::json;
use sfx_cli::output::format_count;
use sfx_cli::{progress, Status};
use std::fs;
use std::path::Path;

/// Export custom sounds to stdout or a file
pub async fn export(ctx: &Context, output: Option<&Path>) -> Result<()> {
    let library = ctx.open()?;

    let pb = ctx.spinner("Exporting...");
    let exported = library.export().await;
    progress::finish(&pb);
    let exported = exported?;

    let Some(path) = output else {
        println!("{exported}");
        return Ok(());
    };

    fs::write(path, &exported).with_context(|| format!("Failed to write {}", path.display()))?;
    if ctx.is_json() {
        println!("{}", json!({ "status": "ok", "path": path.display().to_string() }));
    } else {
        Status::success(&format!("Sound effects exported to {}", path.display()));
    }
    Ok(())
}

/// Import sounds from a JSON file
pub async fn import(ctx: &Context, file: &Path) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let mut library = ctx.open()?;

    let pb = ctx.spinner("Importing...");
    let imported = library.import(&content).await;
    progress::finish(&pb);
    let count = imported.context("Error importing sound effects")?;

    if ctx.is_json() {
        println!("{}", json!({ "status": "ok", "imported": count }));
    } else {
        Status::success(&format!(
            "Imported {}",
            format_count(count, "sound effect", "sound effects")
        ));
    }
    Ok(())
}
