//! Theme and identity commands

use crate::context::Context;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::json;
use sfx_cli::Status;
use sfx_library::Theme;

/// Show the theme, or set it when one is given
pub fn theme(ctx: &Context, theme: Option<Theme>) -> Result<()> {
    let mut library = ctx.open()?;

    if let Some(theme) = theme {
        library.set_theme(theme)?;
        if !ctx.is_json() {
            Status::success(&format!("Theme set to {theme}"));
            return Ok(());
        }
    }

    if ctx.is_json() {
        println!("{}", json!({ "theme": library.theme() }));
    } else {
        println!("{}", library.theme());
    }
    Ok(())
}

/// Owner id, data directory and store status
pub fn whoami(ctx: &Context) -> Result<()> {
    let library = ctx.open()?;
    let store = &ctx.config.schema.store;
    let remote = store.url.as_deref().filter(|_| store.is_configured());

    if ctx.is_json() {
        println!(
            "{}",
            json!({
                "owner_id": library.owner_id(),
                "data_dir": library.local().dir().display().to_string(),
                "store": remote,
                "table": store.table,
                "config": ctx.config.path.as_ref().map(|p| p.display().to_string()),
                "session_id": sfx_telemetry::session_id(),
            })
        );
        return Ok(());
    }

    println!("  {:<10} {}", "Owner:".dimmed(), library.owner_id().bold());
    println!("  {:<10} {}", "Data:".dimmed(), library.local().dir().display());
    match remote {
        Some(url) => println!("  {:<10} {} ({})", "Store:".dimmed(), url, store.table),
        None => println!("  {:<10} {}", "Store:".dimmed(), "offline".yellow()),
    }
    if let Some(path) = &ctx.config.path {
        println!("  {:<10} {}", "Config:".dimmed(), path.display());
    }
    Ok(())
}
