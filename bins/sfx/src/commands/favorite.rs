//! Favorite commands

use super::{print_sounds, unscored};
use crate::context::Context;
use anyhow::Result;
use serde_json::json;
use sfx_cli::Status;
use sfx_search::SearchQuery;

/// Toggle a favorite
pub async fn toggle(ctx: &Context, id: u32) -> Result<()> {
    let mut library = ctx.load().await?;
    let favorite = library.toggle_favorite(id)?;

    if ctx.is_json() {
        println!("{}", json!({ "id": id, "favorite": favorite }));
    } else if favorite {
        Status::success(&format!("Added {id} to favorites"));
    } else {
        Status::success(&format!("Removed {id} from favorites"));
    }
    Ok(())
}

/// Favorites in display order
pub async fn list(ctx: &Context) -> Result<()> {
    let library = ctx.load().await?;
    let favorites = library.browse(&SearchQuery::default(), true);
    print_sounds(ctx.is_json(), &library, &unscored(&favorites));
    Ok(())
}
