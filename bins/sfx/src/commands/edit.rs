//! Add, edit, delete and move commands

use super::sound_json;
use crate::context::{Context, Library};
use anyhow::{Context as _, Result};
use serde_json::json;
use sfx_cli::{progress, Status};
use sfx_library::{LibraryError, SoundEffect};

/// Field values from the command line; `None` leaves a field unchanged
pub struct SoundFields {
    pub name: Option<String>,
    pub category: Option<String>,
    pub file: Option<String>,
    pub description: Option<String>,
    pub icon_color: Option<String>,
}

impl SoundFields {
    fn apply(self, sound: &mut SoundEffect) {
        if let Some(name) = self.name {
            sound.name = name;
        }
        if let Some(category) = self.category {
            sound.category = category;
        }
        if let Some(file) = self.file {
            sound.file = file;
        }
        if let Some(description) = self.description {
            sound.description = description;
        }
        if let Some(color) = self.icon_color {
            sound.icon.color = Some(color).filter(|c| !c.is_empty());
        }
    }
}

async fn save(ctx: &Context, library: &mut Library, sound: SoundEffect) -> Result<()> {
    let id = sound.id;
    let pb = ctx.spinner("Saving...");
    let saved = library.save_sound(sound).await;
    progress::finish(&pb);

    let updated = saved.with_context(|| format!("Failed to save sound effect {id}"))?;
    let sound = library.catalog().get(id).ok_or(LibraryError::NotFound(id))?;

    if ctx.is_json() {
        println!(
            "{}",
            json!({ "status": "ok", "updated": updated, "sound": sound_json(library, sound, None) })
        );
    } else if updated {
        Status::success(&format!("Sound updated: {} ({})", sound.name, sound.id));
    } else {
        Status::success(&format!("New sound added: {} ({})", sound.name, sound.id));
    }
    Ok(())
}

/// Add a sound with the next free id
pub async fn add(ctx: &Context, fields: SoundFields) -> Result<()> {
    let mut library = ctx.load().await?;

    let mut sound = SoundEffect::new(library.catalog().next_id()?, "", "", "");
    fields.apply(&mut sound);

    save(ctx, &mut library, sound).await
}

/// Change fields of an existing sound
pub async fn update(ctx: &Context, id: u32, fields: SoundFields) -> Result<()> {
    let mut library = ctx.load().await?;

    let mut sound = library
        .catalog()
        .get(id)
        .cloned()
        .ok_or(LibraryError::NotFound(id))?;
    fields.apply(&mut sound);

    save(ctx, &mut library, sound).await
}

/// Delete a sound
pub async fn delete(ctx: &Context, id: u32) -> Result<()> {
    let mut library = ctx.load().await?;

    let pb = ctx.spinner("Deleting...");
    let removed = library.delete_sound(id).await;
    progress::finish(&pb);
    let removed = removed.with_context(|| format!("Failed to delete sound effect {id}"))?;

    if ctx.is_json() {
        println!("{}", json!({ "status": "ok", "deleted": removed.id }));
    } else {
        Status::success(&format!("Sound effect deleted: {} ({})", removed.name, removed.id));
    }
    Ok(())
}

/// Move a sound to another sound's position
pub async fn reorder(ctx: &Context, id: u32, over: u32) -> Result<()> {
    let mut library = ctx.load().await?;
    for wanted in [id, over] {
        if library.catalog().get(wanted).is_none() {
            return Err(LibraryError::NotFound(wanted).into());
        }
    }

    let pb = ctx.spinner("Saving order...");
    let moved = library.reorder(id, over).await;
    progress::finish(&pb);
    let moved = moved.context("Failed to save the new order")?;

    let order: Vec<u32> = library.catalog().sounds().iter().map(|s| s.id).collect();
    if ctx.is_json() {
        println!("{}", json!({ "status": "ok", "moved": moved, "order": order }));
    } else if moved {
        Status::success(&format!("Moved {id} to the position of {over}"));
    } else {
        Status::info("Nothing to move");
    }
    Ok(())
}
