//! CLI command implementations

pub mod categories;
pub mod edit;
pub mod favorite;
pub mod list;
pub mod metrics;
pub mod search;
pub mod settings;
pub mod transfer;

use crate::context::Library;
use owo_colors::OwoColorize;
use serde_json::{json, Value};
use sfx_cli::output::{format_count, pad, swatch, truncate};
use sfx_library::SoundEffect;

const NAME_WIDTH: usize = 24;
const CATEGORY_WIDTH: usize = 12;
const DESCRIPTION_WIDTH: usize = 48;

/// JSON view of a sound with its favorite flag and optional score
pub(crate) fn sound_json(library: &Library, sound: &SoundEffect, score: Option<u32>) -> Value {
    let mut value = json!({
        "id": sound.id,
        "name": sound.name,
        "category": sound.category,
        "description": sound.description,
        "file": sound.file,
        "icon": sound.icon,
        "favorite": library.favorites().contains(sound.id),
    });
    if let Some(score) = score {
        value["score"] = json!(score);
    }
    value
}

/// Print `{"count": n, "sounds": [...]}`
pub(crate) fn print_sounds_json(library: &Library, rows: &[(&SoundEffect, Option<u32>)]) {
    let sounds: Vec<Value> = rows
        .iter()
        .map(|(sound, score)| sound_json(library, sound, *score))
        .collect();
    println!("{}", json!({ "count": sounds.len(), "sounds": sounds }));
}

/// Print one line per sound, then a count
pub(crate) fn print_sounds_table(library: &Library, rows: &[(&SoundEffect, Option<u32>)]) {
    if rows.is_empty() {
        println!("{}", "No sound effects found".dimmed());
        return;
    }

    for (sound, score) in rows {
        let star = if library.favorites().contains(sound.id) {
            "★".yellow().to_string()
        } else {
            " ".to_string()
        };
        let score = score
            .map(|s| format!(" {}", format!("[{s:>3}]").dimmed()))
            .unwrap_or_default();

        println!(
            "{:>4} {star} {} {}  {}  {}{score}",
            sound.id.to_string().dimmed(),
            swatch(sound.icon.color.as_deref()),
            pad(&truncate(&sound.name, NAME_WIDTH), NAME_WIDTH).bold(),
            pad(&truncate(&sound.category, CATEGORY_WIDTH), CATEGORY_WIDTH).cyan(),
            truncate(&sound.description, DESCRIPTION_WIDTH).dimmed(),
        );
    }

    println!();
    println!("{}", format_count(rows.len(), "sound", "sounds").dimmed());
}

/// Print sounds in the selected format
pub(crate) fn print_sounds(json: bool, library: &Library, rows: &[(&SoundEffect, Option<u32>)]) {
    if json {
        print_sounds_json(library, rows);
    } else {
        print_sounds_table(library, rows);
    }
}

/// Rows without scores
pub(crate) fn unscored<'a>(sounds: &[&'a SoundEffect]) -> Vec<(&'a SoundEffect, Option<u32>)> {
    sounds.iter().map(|sound| (*sound, None)).collect()
}
